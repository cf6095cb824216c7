//! Physical-key to code-point lookup.
//!
//! The translator resolves unclaimed key-downs to characters through a
//! [`Keymap`], with meta bits derived from the logical modifier toggles.
//! Platforms with their own layout tables implement the trait; the bundled
//! [`QwertyKeymap`] covers a plain US layout and is what tests and the
//! terminal adapter use.

use crate::types::{KeyCode, Meta, keys};

/// Code-point lookup for a physical key under the given meta bits.
pub trait Keymap: Send {
    /// Resolve `key` to a character code, or `<= 0` when the key produces
    /// no character (the event is then left unclaimed).
    fn unicode_char(&self, key: u16, meta: Meta) -> KeyCode;
}

// =============================================================================
// Bundled US layout
// =============================================================================

/// Plain US QWERTY lookup.
///
/// Shift uppercases letters and picks the symbol row for digits. Alt
/// combinations resolve to the base character: alt has no character-level
/// effect in this layout, its meaning comes from the modifier bits OR'd
/// onto the outgoing code.
#[derive(Debug, Default, Clone, Copy)]
pub struct QwertyKeymap;

const SHIFTED_DIGITS: [char; 10] = [')', '!', '@', '#', '$', '%', '^', '&', '*', '('];

impl Keymap for QwertyKeymap {
    fn unicode_char(&self, key: u16, meta: Meta) -> KeyCode {
        let shift = meta.contains(Meta::SHIFT);
        match key {
            keys::A..=keys::Z => {
                let c = (b'a' + (key - keys::A) as u8) as char;
                if shift {
                    c.to_ascii_uppercase() as KeyCode
                } else {
                    c as KeyCode
                }
            }
            keys::DIGIT_0..=keys::DIGIT_9 => {
                let i = (key - keys::DIGIT_0) as usize;
                if shift {
                    SHIFTED_DIGITS[i] as KeyCode
                } else {
                    (b'0' + i as u8) as KeyCode
                }
            }
            keys::ENTER => '\r' as KeyCode,
            keys::SPACE | keys::FOCUS => ' ' as KeyCode,
            keys::DEL => 0x08,
            _ => 0,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
