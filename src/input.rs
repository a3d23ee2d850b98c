//! Held-key input state fed by the host
//!
//! The host translates its keyboard events into `Key` values and calls
//! `press`/`release`; the simulation reads the set once per tick. Keys
//! are monotonic per key (press adds, release removes) and there is no
//! compound invariant across keys, so no further synchronization is
//! needed in the cooperative single-threaded loop.

use std::collections::HashSet;

/// Logical input actions the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    /// Fire a bullet while held; its key-down edge doubles as the
    /// confirm action on the menu and game-over screens
    Fire,
}

impl Key {
    /// Map a browser-style key name (`KeyboardEvent.key`) to a logical key.
    ///
    /// WASD and the arrow keys alias the four directions. Space fires
    /// (and doubles as confirm on key-down). Unknown keys map to `None`.
    pub fn from_event_key(key: &str) -> Option<Key> {
        match key.to_lowercase().as_str() {
            "a" | "arrowleft" => Some(Key::Left),
            "d" | "arrowright" => Some(Key::Right),
            "w" | "arrowup" => Some(Key::Up),
            "s" | "arrowdown" => Some(Key::Down),
            " " => Some(Key::Fire),
            _ => None,
        }
    }
}

/// Snapshot of host input, sampled once per tick.
///
/// Held keys are level-triggered; `confirm` is a one-shot edge that the
/// driver clears after the tick that consumed it.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    /// One-shot confirm edge (menu start / game-over restart)
    pub confirm: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down event.
    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
        // Space doubles as the confirm action on key-down
        if key == Key::Fire {
            self.confirm = true;
        }
    }

    /// Record a key-up event.
    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Drop all held keys (host focus loss).
    pub fn clear(&mut self) {
        self.held.clear();
        self.confirm = false;
    }

    /// Signed horizontal movement axis: -1 (left), 0, or +1 (right).
    pub fn axis_x(&self) -> f32 {
        let mut x = 0.0;
        if self.is_held(Key::Left) {
            x -= 1.0;
        }
        if self.is_held(Key::Right) {
            x += 1.0;
        }
        x
    }

    /// Signed vertical movement axis: -1 (up), 0, or +1 (down).
    pub fn axis_y(&self) -> f32 {
        let mut y = 0.0;
        if self.is_held(Key::Up) {
            y -= 1.0;
        }
        if self.is_held(Key::Down) {
            y += 1.0;
        }
        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping_aliases() {
        assert_eq!(Key::from_event_key("a"), Some(Key::Left));
        assert_eq!(Key::from_event_key("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_event_key("D"), Some(Key::Right));
        assert_eq!(Key::from_event_key("w"), Some(Key::Up));
        assert_eq!(Key::from_event_key("ArrowDown"), Some(Key::Down));
        assert_eq!(Key::from_event_key(" "), Some(Key::Fire));
        assert_eq!(Key::from_event_key("q"), None);
    }

    #[test]
    fn test_press_release_is_monotonic_per_key() {
        let mut input = InputState::new();
        input.press(Key::Left);
        input.press(Key::Left);
        assert!(input.is_held(Key::Left));
        input.release(Key::Left);
        assert!(!input.is_held(Key::Left));
    }

    #[test]
    fn test_axes_cancel_out() {
        let mut input = InputState::new();
        input.press(Key::Left);
        input.press(Key::Right);
        assert_eq!(input.axis_x(), 0.0);
        input.release(Key::Right);
        assert_eq!(input.axis_x(), -1.0);
        assert_eq!(input.axis_y(), 0.0);
    }

    #[test]
    fn test_space_sets_confirm_edge() {
        let mut input = InputState::new();
        input.press(Key::Fire);
        assert!(input.confirm);
        input.confirm = false;
        assert!(input.is_held(Key::Fire));
    }
}
