// The tick loop: input -> cursor -> clamp -> capture -> magnify -> present -> sleep.
// Everything the loop touches lives in one `Magnifier` value; there are no globals.
// Visual: the window follows the pointer at roughly 60 frames per second; a
// failed tick leaves the previous frame on screen.

use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::capture::RegionReader;
use crate::clamp::derive_region;
use crate::config::ViewportConfig;
use crate::cursor::CursorSource;
use crate::draw::RenderTarget;
use crate::error::Error;
use crate::input::{InputHandler, KeyEvent, RunState};
use crate::scale::magnify_into;
use crate::types::{FrameBuffer, ScreenGeometry};

/// ~60 FPS. Frame production time adds on top, so the real rate is a bit lower.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    Cursor,
    Capture,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Rendered,
    Skipped(SkipReason),
    Stopped,
}

pub struct Magnifier<C, R, T> {
    config: ViewportConfig,
    screen: ScreenGeometry,
    cursor: C,
    reader: R,
    target: T,
    input: InputHandler,
    frame: FrameBuffer, // reused every tick, sized once
    stats: FrameStats,
}

impl<C: CursorSource, R: RegionReader, T: RenderTarget> Magnifier<C, R, T> {
    pub fn new(config: ViewportConfig, screen: ScreenGeometry, cursor: C, reader: R, target: T) -> Self {
        let size = config.output_size() as usize;
        Self {
            config,
            screen,
            cursor,
            reader,
            target,
            input: InputHandler::new(),
            frame: FrameBuffer::new(size, size),
            stats: FrameStats::new(Instant::now()),
        }
    }

    #[cfg(test)]
    pub fn run_state(&self) -> RunState {
        self.input.state()
    }

    /// Input hook; exit keys stop the loop before the next frame.
    pub fn on_key_event(&mut self, event: &KeyEvent) {
        self.input.on_key_event(event);
    }

    /// One tick. Recoverable failures skip the frame; anything else is returned.
    pub fn render_frame(&mut self) -> Result<TickOutcome, Error> {
        if !self.input.is_running() {
            return Ok(TickOutcome::Stopped);
        }

        // 1) Drain input first: a quit key means no more capture work.
        for event in self.target.drain_events() {
            self.on_key_event(&event);
        }
        if self.input.state() == RunState::Terminated {
            info!("exit key pressed");
            return Ok(TickOutcome::Stopped);
        }

        // 2) Where is the pointer?
        let cursor = match self.cursor.current_position() {
            Ok(pos) => pos,
            Err(e) => return self.skip(SkipReason::Cursor, e),
        };

        // 3) Square around it, kept on screen.
        let region = derive_region(cursor, &self.config, &self.screen);

        // 4) Grab those pixels. The source buffer dies with this tick.
        let source = match self.reader.capture(&region) {
            Ok(fb) => fb,
            Err(e) => return self.skip(SkipReason::Capture, e),
        };

        // 5) Blow it up into the pooled window buffer, then show it.
        magnify_into(&source, self.config.zoom_level() as usize, &mut self.frame)?;
        self.target.present(&self.frame)?;

        self.stats.rendered += 1;
        Ok(TickOutcome::Rendered)
    }

    /// Tick until an exit key arrives or the window goes away.
    pub fn run(&mut self, interval: Duration) -> Result<(), Error> {
        info!(
            zoom = self.config.zoom_level(),
            size = self.config.output_size(),
            side = self.config.capture_side(),
            "magnifier running"
        );
        while self.input.is_running() {
            self.render_frame()?;
            self.stats.maybe_report(Instant::now());
            thread::sleep(interval);
        }
        info!(
            rendered = self.stats.total_rendered + self.stats.rendered as u64,
            skipped = self.stats.total_skipped + self.stats.skipped as u64,
            "magnifier stopped"
        );
        Ok(())
    }

    fn skip(&mut self, reason: SkipReason, err: Error) -> Result<TickOutcome, Error> {
        if !err.is_recoverable() {
            return Err(err);
        }
        warn!("skipping frame: {err}");
        // Keep the window responsive; the old frame stays visible.
        self.target.refresh()?;
        self.stats.skipped += 1;
        Ok(TickOutcome::Skipped(reason))
    }
}

/// Frames rendered/skipped, reported once per second.
struct FrameStats {
    window_start: Instant,
    rendered: u32,
    skipped: u32,
    total_rendered: u64,
    total_skipped: u64,
}

impl FrameStats {
    fn new(now: Instant) -> Self {
        Self { window_start: now, rendered: 0, skipped: 0, total_rendered: 0, total_skipped: 0 }
    }

    fn maybe_report(&mut self, now: Instant) {
        let elapsed = now.duration_since(self.window_start);
        if elapsed < Duration::from_secs(1) {
            return;
        }
        let fps = self.rendered as f32 / elapsed.as_secs_f32();
        debug!("FPS: {fps:.1} ({} skipped)", self.skipped);
        self.total_rendered += self.rendered as u64;
        self.total_skipped += self.skipped as u64;
        self.rendered = 0;
        self.skipped = 0;
        self.window_start = now;
    }
}
