//! Pressed-keys snapshot
//!
//! Key press/release callbacks flip three boolean intents; the step function
//! reads them once per tick via [`InputState::snapshot`]. The flags are
//! atomics so hosts that deliver input on another thread still get a
//! consistent snapshot. Unrecognized key codes map to `None` and are
//! silently ignored.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::sim::TickInput;

/// The three designated game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
}

/// Map a DOM `KeyboardEvent.code` to a game key
pub fn key_for_code(code: &str) -> Option<Key> {
    match code {
        "ArrowLeft" => Some(Key::Left),
        "ArrowRight" => Some(Key::Right),
        "Space" => Some(Key::Jump),
        _ => None,
    }
}

/// Live boolean key state, updated on press (true) and release (false)
#[derive(Debug, Default)]
pub struct InputState {
    left: AtomicBool,
    right: AtomicBool,
    jump: AtomicBool,
}

impl InputState {
    pub fn set(&self, key: Key, pressed: bool) {
        let flag = match key {
            Key::Left => &self.left,
            Key::Right => &self.right,
            Key::Jump => &self.jump,
        };
        flag.store(pressed, Ordering::Relaxed);
    }

    /// Consistent snapshot of the three intents for one tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.left.load(Ordering::Relaxed),
            right: self.right.load(Ordering::Relaxed),
            jump: self.jump.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let input = InputState::default();
        assert_eq!(input.snapshot(), TickInput::default());

        input.set(Key::Right, true);
        input.set(Key::Jump, true);
        let snap = input.snapshot();
        assert!(snap.right);
        assert!(snap.jump);
        assert!(!snap.left);

        input.set(Key::Right, false);
        assert!(!input.snapshot().right);
        assert!(input.snapshot().jump);
    }

    #[test]
    fn test_key_codes() {
        assert_eq!(key_for_code("ArrowLeft"), Some(Key::Left));
        assert_eq!(key_for_code("ArrowRight"), Some(Key::Right));
        assert_eq!(key_for_code("Space"), Some(Key::Jump));
        // Anything else is silently ignored
        assert_eq!(key_for_code("KeyQ"), None);
        assert_eq!(key_for_code("Escape"), None);
        assert_eq!(key_for_code(""), None);
    }
}
