// Window side of the pipeline.
// Visual effects provided here:
// 1) A fixed-size window that shows the magnified patch.
// 2) Key presses from that window, handed to the input handler.

use crate::error::Error;
use crate::input::KeyEvent;
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

pub const WINDOW_TITLE: &str = "Screen Magnifier";

/// Where finished frames go, and where key presses come from.
pub trait RenderTarget {
    /// Blit at (0,0) and flush so the frame becomes visible.
    fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error>;

    /// Flush pending window events without new pixels; the last frame stays up.
    fn refresh(&mut self) -> Result<(), Error>;

    /// Everything pressed since the last flush. Never blocks.
    fn drain_events(&mut self) -> Vec<KeyEvent>;
}

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a square window of `size` pixels.
    /// Visual: a new empty window appears titled "Screen Magnifier".
    pub fn new(size: usize) -> Result<Self, Error> {
        let window = Window::new(WINDOW_TITLE, size, size, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    fn ensure_open(&self) -> Result<(), Error> {
        if self.window.is_open() {
            Ok(())
        } else {
            Err(Error::RenderTargetLost("window was closed".into()))
        }
    }

    fn shift_down(&self) -> bool {
        self.window.is_key_down(Key::LeftShift) || self.window.is_key_down(Key::RightShift)
    }
}

impl RenderTarget for Drawer {
    /// Visual: the window immediately displays the new magnified image.
    fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.ensure_open()?;
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::RenderTargetLost(e.to_string()))
    }

    /// Visual: nothing changes on screen (frozen frame), but keys still register.
    fn refresh(&mut self) -> Result<(), Error> {
        self.ensure_open()?;
        self.window.update();
        Ok(())
    }

    fn drain_events(&mut self) -> Vec<KeyEvent> {
        let shift = self.shift_down();
        self.window
            .get_keys_pressed(KeyRepeat::No)
            .into_iter()
            .map(|key| translate_key(key, shift))
            .collect()
    }
}

/// minifb reports physical keys; shift decides which case of a letter it was.
fn translate_key(key: Key, shift: bool) -> KeyEvent {
    match key {
        Key::Escape => KeyEvent::Escape,
        Key::Q if shift => KeyEvent::Char('Q'),
        Key::Q => KeyEvent::Char('q'),
        _ => KeyEvent::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_quit_keys() {
        assert_eq!(translate_key(Key::Escape, false), KeyEvent::Escape);
        assert_eq!(translate_key(Key::Q, false), KeyEvent::Char('q'));
        assert_eq!(translate_key(Key::Q, true), KeyEvent::Char('Q'));
        assert_eq!(translate_key(Key::A, false), KeyEvent::Other);
    }
}
