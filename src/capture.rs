// Reads a rectangle of pixels off the screen and converts it into a buffer
// suitable for the window.
// Visual expectation: when the scheduler calls `capture()`, you get a
// Vec<u32> where each pixel is 0x00RRGGBB, the patch under the pointer.

use crate::error::Error;
use crate::types::{CaptureRegion, FrameBuffer, ScreenGeometry};

use image::RgbaImage;
use tracing::{debug, info};
use xcap::Monitor;

/// Anything that can hand back the pixels of a screen rectangle.
pub trait RegionReader {
    fn capture(&mut self, region: &CaptureRegion) -> Result<FrameBuffer, Error>;
}

// A small wrapper around the primary xcap::Monitor so the loop stays clean.
pub struct ScreenCapture {
    monitor: Monitor,
    geometry: ScreenGeometry,
}

impl ScreenCapture {
    /// Find the primary monitor and make sure we can actually read from it.
    /// On success nothing is shown yet; we just hold the monitor handle.
    pub fn open() -> Result<Self, Error> {
        // 1) Enumerate monitors (fails if there is no display to talk to).
        let monitors = Monitor::all().map_err(|e| Error::DisplayConnect(format!("list monitors: {e}")))?;

        // 2) Prefer the primary one, else whatever comes first.
        let monitor = monitors
            .into_iter()
            .reduce(|best, m| if m.is_primary().unwrap_or(false) { m } else { best })
            .ok_or_else(|| Error::DisplayConnect("no monitors found".into()))?;

        let width = monitor.width().map_err(|e| Error::DisplayConnect(format!("monitor width: {e}")))?;
        let height = monitor.height().map_err(|e| Error::DisplayConnect(format!("monitor height: {e}")))?;
        let geometry = ScreenGeometry::new(width as i32, height as i32)
            .with_origin(monitor.x().unwrap_or(0), monitor.y().unwrap_or(0));

        // 3) Probe: a 1x1 grab tells us the capture capability is there.
        monitor
            .capture_region(0, 0, 1, 1)
            .map_err(|e| Error::CaptureUnavailable(format!("probe capture: {e}")))?;

        info!(
            monitor = %monitor.name().unwrap_or_default(),
            width, height, "screen capture ready"
        );
        Ok(Self { monitor, geometry })
    }

    pub fn geometry(&self) -> ScreenGeometry {
        self.geometry
    }
}

impl RegionReader for ScreenCapture {
    fn capture(&mut self, region: &CaptureRegion) -> Result<FrameBuffer, Error> {
        let (x, y, w, h) = region_to_u32(region)?;

        let rgba = self
            .monitor
            .capture_region(x, y, w, h)
            .map_err(|e| Error::CaptureFailed(format!("capture_region: {e}")))?;

        if rgba.dimensions() != (w, h) {
            return Err(Error::CaptureFailed(format!(
                "asked for {w}x{h}, got {}x{}",
                rgba.width(),
                rgba.height()
            )));
        }
        debug!(x, y, w, h, "captured region");
        Ok(rgba_to_frame(&rgba))
    }
}

/// xcap wants unsigned coordinates; a negative origin means the region
/// never fit the screen.
pub fn region_to_u32(region: &CaptureRegion) -> Result<(u32, u32, u32, u32), Error> {
    let to_u32 = |v: i32, what: &str| {
        u32::try_from(v).map_err(|_| Error::CaptureFailed(format!("negative {what} {v} in {region:?}")))
    };
    Ok((
        to_u32(region.x, "x")?,
        to_u32(region.y, "y")?,
        to_u32(region.width, "width")?,
        to_u32(region.height, "height")?,
    ))
}

/// Pack RGBA pixels as 0x00RRGGBB; alpha is dropped.
pub fn rgba_to_frame(img: &RgbaImage) -> FrameBuffer {
    let (w, h) = img.dimensions();
    let mut out = Vec::with_capacity((w as usize) * (h as usize));
    for pixel in img.pixels() {
        let r = pixel[0] as u32;
        let g = pixel[1] as u32;
        let b = pixel[2] as u32;
        out.push((r << 16) | (g << 8) | b);
    }
    FrameBuffer { width: w as usize, height: h as usize, pixels: out }
}
