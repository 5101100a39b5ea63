// Key handling and the run/stop state.
// Visual: ESC, q or Q closes the magnifier; every other key does nothing.

/// A key press as the core sees it, independent of the window backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEvent {
    Escape,
    Char(char),
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Terminated,
}

pub const QUIT_LETTER: char = 'q';

#[derive(Debug)]
pub struct InputHandler {
    state: RunState,
}

impl InputHandler {
    pub fn new() -> Self {
        Self { state: RunState::Running }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// One-way: once terminated, nothing brings the loop back.
    pub fn on_key_event(&mut self, event: &KeyEvent) {
        if is_exit_key(event) {
            self.state = RunState::Terminated;
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn is_exit_key(event: &KeyEvent) -> bool {
    match event {
        KeyEvent::Escape => true,
        KeyEvent::Char(c) => c.eq_ignore_ascii_case(&QUIT_LETTER),
        KeyEvent::Other => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_and_both_cases_of_q_quit() {
        for key in [KeyEvent::Escape, KeyEvent::Char('q'), KeyEvent::Char('Q')] {
            let mut input = InputHandler::new();
            input.on_key_event(&key);
            assert_eq!(input.state(), RunState::Terminated, "{key:?}");
        }
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut input = InputHandler::new();
        for key in [KeyEvent::Char('a'), KeyEvent::Other, KeyEvent::Char('w')] {
            input.on_key_event(&key);
        }
        assert_eq!(input.state(), RunState::Running);
    }

    #[test]
    fn terminated_is_terminal() {
        let mut input = InputHandler::new();
        for key in [KeyEvent::Other, KeyEvent::Escape, KeyEvent::Char('x')] {
            input.on_key_event(&key);
        }
        assert_eq!(input.state(), RunState::Terminated);
        input.on_key_event(&KeyEvent::Other);
        assert!(!input.is_running());
    }
}
