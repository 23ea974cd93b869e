//! The frame-loop state machine.
//!
//! Input handling in the samples recognizes exactly one thing: the request
//! to quit. Keeping the transition in a plain value (instead of the global
//! flag the original C samples mutate) makes the one interesting property —
//! the loop ends if and only if a quit event arrives — testable without a
//! window.

use glutin::event::WindowEvent;

/// The discriminated input record the loop consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The user asked to close the window.
    Quit,
    /// Anything else; ignored.
    Other,
}

impl InputEvent {
    /// Maps a raw window event onto the loop's input vocabulary.
    pub fn from_window_event(event: &WindowEvent) -> InputEvent {
        match event {
            WindowEvent::CloseRequested => InputEvent::Quit,
            _ => InputEvent::Other,
        }
    }
}

/// Whether the loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    Running,
    Quitting,
}

impl FrameState {
    pub fn new() -> FrameState {
        FrameState::Running
    }

    /// Folds one input event into the state. `Quitting` is terminal: once
    /// entered it is never left, whatever arrives afterwards.
    pub fn observe(&mut self, event: InputEvent) {
        if let InputEvent::Quit = event {
            *self = FrameState::Quitting;
        }
    }

    /// Forces the terminal state; used when presenting a frame fails.
    pub fn quit(&mut self) {
        *self = FrameState::Quitting;
    }

    pub fn is_running(&self) -> bool {
        matches!(self, FrameState::Running)
    }

    pub fn should_quit(&self) -> bool {
        !self.is_running()
    }
}

impl Default for FrameState {
    fn default() -> FrameState {
        FrameState::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starts_running() {
        assert!(FrameState::new().is_running());
    }

    #[test]
    fn quit_event_stops_the_loop() {
        let mut state = FrameState::new();
        state.observe(InputEvent::Quit);
        assert!(state.should_quit());
    }

    #[test]
    fn other_events_never_stop_the_loop() {
        let mut state = FrameState::new();
        for _ in 0..1000 {
            state.observe(InputEvent::Other);
        }
        assert!(state.is_running());
    }

    #[test]
    fn quitting_is_terminal() {
        let mut state = FrameState::new();
        state.observe(InputEvent::Quit);
        state.observe(InputEvent::Other);
        assert!(state.should_quit());
    }

    #[test]
    fn close_requested_maps_to_quit() {
        assert_eq!(
            InputEvent::from_window_event(&WindowEvent::CloseRequested),
            InputEvent::Quit
        );
    }

    #[test]
    fn unrelated_window_events_map_to_other() {
        assert_eq!(
            InputEvent::from_window_event(&WindowEvent::Focused(true)),
            InputEvent::Other
        );
    }
}
