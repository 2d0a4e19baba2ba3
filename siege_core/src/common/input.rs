//! Keyboard state polled by the game once per frame

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Fire,
}

impl Key {
    /// Directional keys in the order they are applied to the Tank.
    /// The last pressed one in this order decides the heading
    pub const DIRECTIONS: [Key; 4] = [Key::Left, Key::Right, Key::Up, Key::Down];

    /// Map a DOM `KeyboardEvent.key` value onto a game key
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            " " => Some(Key::Fire),
            _ => None,
        }
    }
}

/// Which keys are currently held down
///
/// Written by key events whenever they arrive and read at the start of each tick.
/// A held key keeps acting every frame, there is no debouncing.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    keys_down: HashSet<Key>,
}

impl InputState {
    pub fn press(&mut self, key: Key) {
        self.keys_down.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.keys_down.remove(&key);
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Apply a raw key event, returning the key when it is one the game uses
    pub fn handle_key_name(&mut self, name: &str, pressed: bool) -> Option<Key> {
        let key = Key::from_key_name(name)?;
        match pressed {
            true => self.press(key),
            false => self.release(key),
        }
        Some(key)
    }

    /// Release everything, e.g. when the window loses focus
    pub fn clear(&mut self) {
        self.keys_down.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_and_space_names_are_recognized() {
        assert_eq!(Key::from_key_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_key_name("ArrowDown"), Some(Key::Down));
        assert_eq!(Key::from_key_name(" "), Some(Key::Fire));
        assert_eq!(Key::from_key_name("w"), None);
        assert_eq!(Key::from_key_name("Enter"), None);
    }

    #[test]
    fn press_and_release_track_state() {
        let mut input = InputState::default();

        assert_eq!(input.handle_key_name("ArrowUp", true), Some(Key::Up));
        assert!(input.is_pressed(Key::Up));

        // pressing twice is the same as once
        input.handle_key_name("ArrowUp", true);
        input.handle_key_name("ArrowUp", false);
        assert!(!input.is_pressed(Key::Up));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut input = InputState::default();
        assert_eq!(input.handle_key_name("Shift", true), None);
        assert!(Key::DIRECTIONS.iter().all(|key| !input.is_pressed(*key)));
        assert!(!input.is_pressed(Key::Fire));
    }

    #[test]
    fn clear_releases_everything() {
        let mut input = InputState::default();
        input.press(Key::Left);
        input.press(Key::Fire);
        input.clear();
        assert!(!input.is_pressed(Key::Left));
        assert!(!input.is_pressed(Key::Fire));
    }
}
