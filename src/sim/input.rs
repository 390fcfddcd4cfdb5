//! Polled keyboard state
//!
//! The simulation never listens for input events itself. An input collaborator
//! updates a [`KeyState`] from raw key events before each tick and the tick
//! polls it through the [`InputState`] capability.

use serde::{Deserialize, Serialize};

/// Control keys the game recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Space,
}

impl Key {
    /// Map a DOM-style key code (37 = left arrow, 39 = right arrow, 32 = space)
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Key::Left),
            39 => Some(Key::Right),
            32 => Some(Key::Space),
            _ => None,
        }
    }

    pub fn key_code(&self) -> u32 {
        match self {
            Key::Left => 37,
            Key::Right => 39,
            Key::Space => 32,
        }
    }
}

/// Capability: which control keys are currently held
pub trait InputState {
    fn is_down(&self, key: Key) -> bool;
}

/// Held state of the three control keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub space: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with exactly the given keys held
    pub fn holding(keys: &[Key]) -> Self {
        let mut state = Self::default();
        for &key in keys {
            state.press(key);
        }
        state
    }

    pub fn set(&mut self, key: Key, down: bool) {
        match key {
            Key::Left => self.left = down,
            Key::Right => self.right = down,
            Key::Space => self.space = down,
        }
    }

    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    /// Apply a raw key event; unrecognized codes are ignored
    pub fn handle_key_code(&mut self, code: u32, down: bool) {
        if let Some(key) = Key::from_key_code(code) {
            self.set(key, down);
        }
    }
}

impl InputState for KeyState {
    fn is_down(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Space => self.space,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release() {
        let mut keys = KeyState::new();
        assert!(!keys.is_down(Key::Left));
        keys.press(Key::Left);
        assert!(keys.is_down(Key::Left));
        assert!(!keys.is_down(Key::Right));
        keys.release(Key::Left);
        assert!(!keys.is_down(Key::Left));
    }

    #[test]
    fn test_key_codes() {
        let mut keys = KeyState::new();
        keys.handle_key_code(39, true);
        keys.handle_key_code(32, true);
        // Up arrow is not a control key
        keys.handle_key_code(38, true);
        assert_eq!(keys, KeyState::holding(&[Key::Right, Key::Space]));

        for key in [Key::Left, Key::Right, Key::Space] {
            assert_eq!(Key::from_key_code(key.key_code()), Some(key));
        }
    }
}
