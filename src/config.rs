// Viewport settings: how much to zoom and how big the window is.
// Validated once at startup; nothing here changes while the loop runs.

use crate::error::ConfigError;
use crate::types::ScreenGeometry;

pub const DEFAULT_ZOOM_LEVEL: i32 = 2;
pub const DEFAULT_WINDOW_SIZE: i32 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportConfig {
    zoom_level: i32,
    output_size: i32,
}

impl ViewportConfig {
    /// Check raw user input. Zoom is checked before size.
    pub fn validate(zoom_level: i32, output_size: i32) -> Result<Self, ConfigError> {
        if zoom_level <= 0 {
            return Err(ConfigError::NonPositiveZoom(zoom_level));
        }
        if output_size <= 0 {
            return Err(ConfigError::NonPositiveSize(output_size));
        }
        Ok(Self { zoom_level, output_size })
    }

    pub fn zoom_level(&self) -> i32 {
        self.zoom_level
    }

    pub fn output_size(&self) -> i32 {
        self.output_size
    }

    /// Side of the square read off the screen each frame.
    /// Visual: bigger zoom -> smaller patch of desktop fills the window.
    pub fn capture_side(&self) -> i32 {
        self.output_size / self.zoom_level
    }

    /// Reject viewports whose capture square cannot sit fully on `screen`.
    pub fn check_fits(&self, screen: &ScreenGeometry) -> Result<(), ConfigError> {
        let side = self.capture_side();
        if side == 0 {
            return Err(ConfigError::EmptyRegion {
                zoom: self.zoom_level,
                size: self.output_size,
            });
        }
        if side > screen.width || side > screen.height {
            return Err(ConfigError::RegionExceedsScreen {
                side,
                screen_w: screen.width,
                screen_h: screen.height,
            });
        }
        Ok(())
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { zoom_level: DEFAULT_ZOOM_LEVEL, output_size: DEFAULT_WINDOW_SIZE }
    }
}
