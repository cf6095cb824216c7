//! Crossterm bridge.
//!
//! Converts crossterm key events into the crate's [`RawKeyEvent`] shape so
//! a terminal front end can drive a [`Session`](crate::session::Session)
//! directly:
//!
//! ```ignore
//! use crossterm::event::{read, Event};
//! use keywell::{convert_key_event, KeyEdge, Session};
//!
//! let mut session = Session::with_defaults();
//! loop {
//!     if let Ok(Event::Key(key)) = read() {
//!         if let Some((ev, edge)) = convert_key_event(&key) {
//!             match edge {
//!                 KeyEdge::Down => session.key_down(&ev),
//!                 KeyEdge::Up => session.key_up(&ev),
//!             };
//!         }
//!     }
//! }
//! ```

use crossterm::event::{KeyCode as CtKeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::{RawKeyEvent, keys};

/// Whether a converted event is the press or the release edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEdge {
    Down,
    Up,
}

/// Convert a crossterm key event. Returns `None` for keys the translator
/// has no physical identifier for.
pub fn convert_key_event(event: &KeyEvent) -> Option<(RawKeyEvent, KeyEdge)> {
    let key = match event.code {
        CtKeyCode::Char(c) => char_key(c)?,
        CtKeyCode::Enter => keys::ENTER,
        CtKeyCode::Backspace => keys::DEL,
        CtKeyCode::Esc => keys::BACK,
        CtKeyCode::Up => keys::DPAD_UP,
        CtKeyCode::Down => keys::DPAD_DOWN,
        CtKeyCode::Left => keys::DPAD_LEFT,
        CtKeyCode::Right => keys::DPAD_RIGHT,
        _ => return None,
    };

    let edge = match event.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => KeyEdge::Down,
        KeyEventKind::Release => KeyEdge::Up,
    };

    Some((
        RawKeyEvent {
            key,
            repeat: event.kind == KeyEventKind::Repeat,
            shift_held: event.modifiers.contains(KeyModifiers::SHIFT),
            alt_held: event.modifiers.contains(KeyModifiers::ALT),
        },
        edge,
    ))
}

/// Physical identifier for a character key. Case folds to the same key;
/// shift state travels separately in the modifiers.
fn char_key(c: char) -> Option<u16> {
    match c {
        'a'..='z' => Some(keys::A + (c as u16 - 'a' as u16)),
        'A'..='Z' => Some(keys::A + (c as u16 - 'A' as u16)),
        '0'..='9' => Some(keys::DIGIT_0 + (c as u16 - '0' as u16)),
        ' ' => Some(keys::SPACE),
        _ => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
