//! Logical key state
//!
//! Hosts translate physical keys into [`Keys`] and keep them in an
//! [`InputState`]. The simulation only ever sees a snapshot.

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Logical keys the simulation understands
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Keys: u8 {
        const JUMP    = 1 << 0;
        const DOWN    = 1 << 1;
        const START   = 1 << 2;
        const RESTART = 1 << 3;
    }
}

/// Level-triggered held-key set
///
/// Keys stay held until released, except that the driver clears keys a
/// tick consumed as one-shot presses (see [`InputState::consume`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    held: Keys,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, keys: Keys) {
        self.held.insert(keys);
    }

    pub fn release(&mut self, keys: Keys) {
        self.held.remove(keys);
    }

    /// Forget one-shot presses so a single physical press acts once
    pub fn consume(&mut self, keys: Keys) {
        self.held.remove(keys);
    }

    /// Immutable view for one tick
    pub fn snapshot(&self) -> Keys {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release() {
        let mut input = InputState::new();
        input.press(Keys::JUMP | Keys::DOWN);
        assert_eq!(input.snapshot(), Keys::JUMP | Keys::DOWN);

        input.release(Keys::DOWN);
        assert_eq!(input.snapshot(), Keys::JUMP);
    }

    #[test]
    fn test_consumed_press_stays_cleared_until_pressed_again() {
        let mut input = InputState::new();
        input.press(Keys::JUMP | Keys::DOWN);
        input.consume(Keys::JUMP);
        assert!(!input.snapshot().contains(Keys::JUMP));
        assert!(input.snapshot().contains(Keys::DOWN));

        input.press(Keys::JUMP);
        assert!(input.snapshot().contains(Keys::JUMP));
    }
}
