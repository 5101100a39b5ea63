// Error types for the magnifier.
// Every variant states *where* things went wrong; `is_recoverable` splits the
// per-tick glitches (skip a frame) from everything that ends the program.
use thiserror::Error;

/// Rejected viewport settings. Always fatal, always before the window opens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("non-positive zoom ({0}); zoom level must be positive")]
    NonPositiveZoom(i32),

    #[error("non-positive size ({0}); window size must be positive")]
    NonPositiveSize(i32),

    #[error("capture region {side}x{side} does not fit the {screen_w}x{screen_h} screen")]
    RegionExceedsScreen { side: i32, screen_w: i32, screen_h: i32 },

    #[error("zoom {zoom} is larger than window size {size}; nothing to capture")]
    EmptyRegion { zoom: i32, size: i32 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("cannot open display: {0}")]
    DisplayConnect(String),

    #[error("screen capture unavailable: {0}")]
    CaptureUnavailable(String),

    #[error("window init error: {0}")]
    WindowInit(String),

    #[error("cursor position unavailable: {0}")]
    CursorUnavailable(String),

    #[error("screen capture failed: {0}")]
    CaptureFailed(String),

    #[error("scale error: {0}")]
    Scale(String),

    #[error("render target lost: {0}")]
    RenderTargetLost(String),
}

impl Error {
    /// Per-tick failures: the tick is skipped, the loop keeps going.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::CursorUnavailable(_) | Error::CaptureFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_tick_glitches_are_recoverable() {
        assert!(Error::CursorUnavailable("off screen".into()).is_recoverable());
        assert!(Error::CaptureFailed("disconnect".into()).is_recoverable());
        assert!(!Error::RenderTargetLost("closed".into()).is_recoverable());
        assert!(!Error::from(ConfigError::NonPositiveZoom(0)).is_recoverable());
    }

    #[test]
    fn config_reasons_read_well() {
        let msg = Error::from(ConfigError::NonPositiveZoom(0)).to_string();
        assert!(msg.contains("non-positive zoom"));
        let msg = ConfigError::NonPositiveSize(-4).to_string();
        assert!(msg.contains("non-positive size"));
    }
}
