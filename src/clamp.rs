// Keeps the capture square on screen.
// Visual: near an edge the magnified view stops following the pointer
// instead of showing pixels from beyond the screen.

use crate::config::ViewportConfig;
use crate::types::{CaptureRegion, CursorPosition, ScreenGeometry};

/// Push a desired origin back inside the screen.
/// Floor first, then ceiling: if the region is wider than the screen the
/// result goes negative, which `ViewportConfig::check_fits` rules out at startup.
pub fn clamp(
    desired_x: i32,
    desired_y: i32,
    region_w: i32,
    region_h: i32,
    screen: &ScreenGeometry,
) -> CaptureRegion {
    let x = desired_x.max(0).min(screen.width - region_w);
    let y = desired_y.max(0).min(screen.height - region_h);
    CaptureRegion { x, y, width: region_w, height: region_h }
}

/// Square of `capture_side()` centred on the cursor, then clamped.
pub fn derive_region(
    cursor: CursorPosition,
    config: &ViewportConfig,
    screen: &ScreenGeometry,
) -> CaptureRegion {
    let side = config.capture_side();
    clamp(cursor.x - side / 2, cursor.y - side / 2, side, side, screen)
}
