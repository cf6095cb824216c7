//! Graceful-shutdown key sequence.
//!
//! When the host wants the game gone, it cannot just kill the consumer
//! thread: the game loop advances one key at a time and may be sitting in
//! any number of nested menus. [`ExitSignal`] feeds it a fixed, repeating
//! escape → confirm cadence instead of real input, walking it out to a
//! confirmed quit no matter how deep it is.
//!
//! The signal lives inside the queue's mutex; [`ExitSignal::next_step`] is
//! only ever called under that lock.

use crate::types::{KEY_NONE, KeyCode};

/// First step of the cycle: back out of the current menu.
pub const EXIT_ESCAPE: KeyCode = 24;

/// Third step of the cycle: confirm the quit prompt.
pub const EXIT_CONFIRM_QUIT: KeyCode = 96;

/// Armed-once shutdown flag plus a 4-step cyclic code generator.
///
/// Once armed it never disarms: the process is expected to end via the
/// sequence, not by clearing the flag.
#[derive(Debug, Default)]
pub struct ExitSignal {
    armed: bool,
    step: u8,
}

impl ExitSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the sequence and rewind it to the first step.
    pub fn arm(&mut self) {
        self.armed = true;
        self.step = 0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Next code of the cycle: escape, filler, confirm-quit, filler,
    /// repeating every four calls.
    ///
    /// Consulted by the queue ahead of normal delivery on every take while
    /// armed.
    pub fn next_step(&mut self) -> KeyCode {
        let key = match self.step {
            0 => EXIT_ESCAPE,
            2 => EXIT_CONFIRM_QUIT,
            _ => KEY_NONE,
        };
        self.step = (self.step + 1) % 4;
        key
    }
}

// =============================================================================
// Tests
// =============================================================================
