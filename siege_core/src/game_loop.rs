use crate::{
    common::{config::GameConfig, events::GameEvent, gamestate::GameState, input::InputState},
    render::{render, StatusSink, Surface},
};

/// Owns the game and runs one frame at a time.
///
/// The caller decides when frames happen, e.g. from `requestAnimationFrame`.
/// Nothing here ever stops the loop, after victory only firing is disabled.
#[derive(Debug, Default)]
pub struct GameLoop {
    state: GameState,
    frames: u64,
}

impl GameLoop {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// How many frames have been run
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Update with the current keys, then draw and refresh the status line.
    ///
    /// The update always happens, even if drawing fails.
    pub fn frame<S: Surface, T: StatusSink>(
        &mut self,
        input: &InputState,
        surface: &S,
        status: &T,
    ) -> Result<Vec<GameEvent>, S::Error> {
        let events = self.state.tick(input);
        self.frames += 1;

        render(&self.state, surface)?;
        status.set_status(&self.state.status_text());

        Ok(events)
    }

    /// Current state as JSON, handy when debugging from the console
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::{common::input::Key, render::tests::RecordingSurface};

    use super::*;

    #[derive(Default)]
    struct StatusLine(RefCell<String>);

    impl StatusSink for StatusLine {
        fn set_status(&self, text: &str) {
            *self.0.borrow_mut() = text.to_string();
        }
    }

    #[test]
    fn frame_updates_then_renders() {
        let mut game = GameLoop::default();
        let surface = RecordingSurface::default();
        let status = StatusLine::default();

        let mut input = InputState::default();
        input.press(Key::Right);

        let events = game.frame(&input, &surface, &status).unwrap();

        assert!(events.is_empty());
        assert_eq!(game.frames(), 1);
        assert_eq!(game.state().tank.position.x, 405.0);
        assert_eq!(*status.0.borrow(), "Hits: 0/3");
        assert!(!surface.calls.borrow().is_empty());
    }

    #[test]
    fn snapshot_contains_state() {
        let game = GameLoop::new(&GameConfig::default());
        let json = game.snapshot_json().unwrap();

        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, game.state());
    }
}
