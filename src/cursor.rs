// Where is the pointer right now?
// Visual expectation: each tick the magnified patch is centred on this point.

use crate::error::Error;
use crate::types::{CursorPosition, ScreenGeometry};
use device_query::{DeviceQuery, DeviceState};

/// Anything that can report the pointer in screen-relative pixels.
pub trait CursorSource {
    fn current_position(&mut self) -> Result<CursorPosition, Error>;
}

/// Pointer tracking through `device_query`, relative to one screen.
pub struct DeviceCursor {
    state: DeviceState,
    screen: ScreenGeometry,
}

impl DeviceCursor {
    /// Fails instead of panicking when there is no X connection to ask
    /// (e.g. a Wayland session without XWayland).
    pub fn new(screen: ScreenGeometry) -> Result<Self, Error> {
        let state = require_pointer(DeviceState::checked_new())?;
        Ok(Self { state, screen })
    }
}

fn require_pointer(state: Option<DeviceState>) -> Result<DeviceState, Error> {
    state.ok_or_else(|| Error::DisplayConnect("pointer: cannot query the pointer device".into()))
}

impl CursorSource for DeviceCursor {
    fn current_position(&mut self) -> Result<CursorPosition, Error> {
        let (x, y) = self.state.get_mouse().coords;
        to_screen_relative(x, y, &self.screen)
    }
}

/// Desktop coordinates -> coordinates on `screen`.
/// A pointer sitting on some other monitor cannot be tracked here.
fn to_screen_relative(x: i32, y: i32, screen: &ScreenGeometry) -> Result<CursorPosition, Error> {
    let (rx, ry) = (x - screen.origin_x, y - screen.origin_y);
    if !screen.contains(rx, ry) {
        return Err(Error::CursorUnavailable(format!(
            "pointer at ({x}, {y}) is outside the magnified screen"
        )));
    }
    Ok(CursorPosition { x: rx, y: ry })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracts_monitor_origin() {
        let screen = ScreenGeometry::new(1920, 1080).with_origin(1920, 0);
        let pos = to_screen_relative(2000, 40, &screen).unwrap();
        assert_eq!(pos, CursorPosition { x: 80, y: 40 });
    }

    #[test]
    fn missing_pointer_device_is_a_connect_error() {
        let err = require_pointer(None).err().unwrap();
        assert!(matches!(err, Error::DisplayConnect(ref msg) if msg.starts_with("pointer")));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn pointer_on_another_monitor_is_unavailable() {
        let screen = ScreenGeometry::new(1920, 1080);
        let err = to_screen_relative(2500, 10, &screen).unwrap_err();
        assert!(matches!(err, Error::CursorUnavailable(_)));
        assert!(err.is_recoverable());
    }
}
