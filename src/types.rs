//! Core key-code types and flag constants.
//!
//! A [`KeyCode`] is a plain signed integer so it can travel through the
//! queue and into a game loop that only understands numbers:
//!
//! - `0..=127` are character codes
//! - `>= 0x200` are synthetic button/drag/cursor codes
//! - [`KEY_SAVE`] (`-1`) aborts a blocking read ("save and quit now")
//! - [`KEY_NONE`] (`0`) means "no key" / filler
//!
//! Modifier bits from [`ModFlags`] may be OR'd onto a base code.

// =============================================================================
// Key codes
// =============================================================================

/// A key code as delivered to the consumer loop.
pub type KeyCode = i32;

/// "No key" / filler. Returned by non-blocking takes on an empty queue.
pub const KEY_NONE: KeyCode = 0;

/// Sentinel that aborts a blocking read: the host is about to terminate
/// the process and the game loop must save and quit now.
pub const KEY_SAVE: KeyCode = -1;

/// The '.' run command, prefixed before a direction in the default keyset
/// when always-run is active.
pub const RUN_COMMAND: KeyCode = 46;

// Synthetic (non-character) codes.
pub const LEFT_BUTTON: KeyCode = 0x200;
pub const MIDDLE_BUTTON: KeyCode = 0x201;
pub const RIGHT_BUTTON: KeyCode = 0x202;
pub const LEFT_DRAG: KeyCode = 0x203;
pub const LEFT_RELEASE: KeyCode = 0x206;
pub const CURSOR_UP: KeyCode = 0x209;
pub const CURSOR_DOWN: KeyCode = 0x20a;
pub const CURSOR_LEFT: KeyCode = 0x20b;
pub const CURSOR_RIGHT: KeyCode = 0x20c;

// =============================================================================
// Modifier flags
// =============================================================================

bitflags::bitflags! {
    /// Modifier bits OR'd onto an outgoing [`KeyCode`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ModFlags: i32 {
        const CTRL = 0x1000;
        const SHIFT = 0x2000;
        const NUM_KEYPAD = 0x4000;
    }
}

bitflags::bitflags! {
    /// Meta bits fed to a [`Keymap`](crate::keymap::Keymap) lookup.
    ///
    /// These come from the *logical* (toggled) modifier state, not from
    /// physically held keys.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Meta: u8 {
        const SHIFT = 0b01;
        const ALT = 0b10;
    }
}

// =============================================================================
// Physical keys
// =============================================================================

/// Physical key identifiers, as reported by the event source.
///
/// Values are stable scan-code-style constants; front ends map their native
/// codes onto these before calling into the translator.
pub mod keys {
    pub const BACK: u16 = 4;
    pub const DIGIT_0: u16 = 7;
    pub const DIGIT_1: u16 = 8;
    pub const DIGIT_2: u16 = 9;
    pub const DIGIT_3: u16 = 10;
    pub const DIGIT_4: u16 = 11;
    pub const DIGIT_5: u16 = 12;
    pub const DIGIT_6: u16 = 13;
    pub const DIGIT_7: u16 = 14;
    pub const DIGIT_8: u16 = 15;
    pub const DIGIT_9: u16 = 16;
    pub const DPAD_UP: u16 = 19;
    pub const DPAD_DOWN: u16 = 20;
    pub const DPAD_LEFT: u16 = 21;
    pub const DPAD_RIGHT: u16 = 22;
    pub const DPAD_CENTER: u16 = 23;
    pub const VOLUME_UP: u16 = 24;
    pub const VOLUME_DOWN: u16 = 25;
    pub const CAMERA: u16 = 27;
    pub const A: u16 = 29;
    pub const B: u16 = 30;
    pub const C: u16 = 31;
    pub const D: u16 = 32;
    pub const E: u16 = 33;
    pub const F: u16 = 34;
    pub const G: u16 = 35;
    pub const H: u16 = 36;
    pub const I: u16 = 37;
    pub const J: u16 = 38;
    pub const K: u16 = 39;
    pub const L: u16 = 40;
    pub const M: u16 = 41;
    pub const N: u16 = 42;
    pub const O: u16 = 43;
    pub const P: u16 = 44;
    pub const Q: u16 = 45;
    pub const R: u16 = 46;
    pub const S: u16 = 47;
    pub const T: u16 = 48;
    pub const U: u16 = 49;
    pub const V: u16 = 50;
    pub const W: u16 = 51;
    pub const X: u16 = 52;
    pub const Y: u16 = 53;
    pub const Z: u16 = 54;
    pub const ALT_LEFT: u16 = 57;
    pub const ALT_RIGHT: u16 = 58;
    pub const SHIFT_LEFT: u16 = 59;
    pub const SHIFT_RIGHT: u16 = 60;
    pub const SPACE: u16 = 62;
    pub const ENTER: u16 = 66;
    pub const DEL: u16 = 67;
    pub const FOCUS: u16 = 80;
    pub const MENU: u16 = 82;
    pub const SEARCH: u16 = 84;
    pub const EMOTICON: u16 = 97;
}

// =============================================================================
// Raw key event
// =============================================================================

/// A physical key-down/key-up event as seen by the translator.
///
/// `shift_held` / `alt_held` report the *physical* state of those keys on
/// the source device; the logical toggle state lives in the modifier
/// state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKeyEvent {
    /// Physical key identifier (see [`keys`]).
    pub key: u16,
    /// Key-repeat event (held key auto-repeating).
    pub repeat: bool,
    /// A shift key is physically down.
    pub shift_held: bool,
    /// An alt key is physically down.
    pub alt_held: bool,
}

impl RawKeyEvent {
    /// A plain event with no repeat and no held modifiers.
    pub fn new(key: u16) -> Self {
        Self {
            key,
            repeat: false,
            shift_held: false,
            alt_held: false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_flags_disjoint() {
        assert_eq!(ModFlags::CTRL.bits() & ModFlags::SHIFT.bits(), 0);
        assert_eq!(ModFlags::SHIFT.bits() & ModFlags::NUM_KEYPAD.bits(), 0);
    }

    #[test]
    fn test_mod_flags_or_onto_char() {
        let key = 'a' as KeyCode | ModFlags::SHIFT.bits();
        assert_eq!(key & 0x7f, 'a' as KeyCode);
        assert_ne!(key & ModFlags::SHIFT.bits(), 0);
    }

    #[test]
    fn test_sentinels_distinct() {
        assert_ne!(KEY_SAVE, KEY_NONE);
        assert!(KEY_SAVE < 0);
    }

    #[test]
    fn test_raw_event_new() {
        let ev = RawKeyEvent::new(keys::A);
        assert_eq!(ev.key, keys::A);
        assert!(!ev.repeat);
        assert!(!ev.shift_held);
        assert!(!ev.alt_held);
    }
}
