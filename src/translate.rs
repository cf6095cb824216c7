//! Physical key-event resolution.
//!
//! Turns raw key-down/key-up events into either a control action consumed
//! internally (modifier toggles, zoom, virtual keyboard), a character code
//! pushed onto the queue, or "not ours" (the event is forwarded to the
//! surrounding system). Also hosts the context-sensitive direction
//! translator used by on-screen dpads.
//!
//! All of this state belongs to the producer (UI) thread; only the queue
//! it pushes into is shared.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use crate::config::{KeyAction, Preferences};
use crate::keymap::Keymap;
use crate::modifier::ModifierState;
use crate::queue::KeyQueue;
use crate::types::{KeyCode, Meta, ModFlags, RUN_COMMAND, RawKeyEvent, keys};

// =============================================================================
// Side channel
// =============================================================================

/// Fire-and-forget notification to the presentation layer. These never
/// enter the key queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiNotice {
    ZoomIn,
    ZoomOut,
    ToggleKeyboard,
}

// =============================================================================
// Translator
// =============================================================================

/// Stateful key-event translator feeding one [`KeyQueue`].
pub struct KeyTranslator {
    queue: Arc<KeyQueue>,
    prefs: Preferences,
    keymap: Box<dyn Keymap>,
    mods: ModifierState,
    notices: Option<Sender<UiNotice>>,
}

impl KeyTranslator {
    pub fn new(
        queue: Arc<KeyQueue>,
        prefs: Preferences,
        keymap: Box<dyn Keymap>,
        notices: Option<Sender<UiNotice>>,
    ) -> Self {
        Self {
            queue,
            prefs,
            keymap,
            mods: ModifierState::new(),
            notices,
        }
    }

    /// Resolve a physical key-down. Returns true when the event was
    /// claimed (consumed internally or enqueued), false when it should be
    /// forwarded to the surrounding system.
    pub fn key_down(&mut self, ev: &RawKeyEvent) -> bool {
        let mut key: KeyCode = 0;
        let mut act = self.prefs.action_for(ev.key);

        if act == KeyAction::Ctrl {
            if ev.repeat {
                return true;
            }
            self.mods.ctrl.key_down();
            if self.mods.overload_armed() {
                // Second tap of an unused toggle: redirect to the
                // configured alternate action and keep resolving.
                act = self.prefs.ctrl_double_tap;
            } else {
                return true;
            }
        }

        match act {
            KeyAction::Alt => {
                if ev.repeat {
                    return true;
                }
                self.mods.alt.key_down();
                key = -1;
            }
            KeyAction::Shift => {
                if ev.repeat {
                    return true;
                }
                self.mods.shift.key_down();
                key = -1;
            }
            KeyAction::Enter => key = '\r' as KeyCode,
            KeyAction::Space => key = ' ' as KeyCode,
            KeyAction::Escape => key = '`' as KeyCode,
            KeyAction::ZoomIn => {
                self.notify(UiNotice::ZoomIn);
                return true;
            }
            KeyAction::ZoomOut => {
                self.notify(UiNotice::ZoomOut);
                return true;
            }
            // Toggling the keyboard is deferred to key-up.
            KeyAction::VirtualKeyboard => return true,
            KeyAction::ForwardToSystem => return false,
            KeyAction::None | KeyAction::Ctrl => {}
        }

        match ev.key {
            keys::DPAD_UP => key = self.direction_key('8'),
            keys::DPAD_DOWN => key = self.direction_key('2'),
            keys::DPAD_LEFT => key = self.direction_key('4'),
            keys::DPAD_RIGHT => key = self.direction_key('6'),
            keys::ENTER => key = '\r' as KeyCode,
            keys::FOCUS | keys::SPACE => key = ' ' as KeyCode,
            keys::DEL => key = 0x08,
            _ => {}
        }

        if key == 0 {
            let mut meta = Meta::empty();
            if self.mods.alt.apply() {
                meta |= Meta::ALT;
            }
            if self.mods.shift.apply() {
                meta |= Meta::SHIFT;
            }
            key = self.keymap.unicode_char(ev.key, meta);
            if (('a' as KeyCode)..=('z' as KeyCode)).contains(&key) && self.mods.ctrl.apply() {
                key = key - 'a' as KeyCode + 1;
            }
        }

        // The overload is valid for at most one subsequent key-down,
        // whatever that key-down resolved to.
        self.mods.clear_overload();

        if key <= 0 {
            log::trace!("key {} unclaimed", ev.key);
            return false;
        }
        self.mods.mark_all_used();

        if ev.shift_held {
            key |= ModFlags::SHIFT.bits();
        }
        if ev.alt_held {
            // A physically held alt maps to the ctrl bit.
            key |= ModFlags::CTRL.bits();
        }

        self.queue.offer(key);
        true
    }

    /// Resolve a physical key-up. Modifier releases and the deferred
    /// virtual-keyboard toggle live here.
    pub fn key_up(&mut self, ev: &RawKeyEvent) -> bool {
        match self.prefs.action_for(ev.key) {
            KeyAction::Alt => {
                self.mods.alt.key_up();
            }
            KeyAction::Ctrl => {
                self.mods.ctrl_key_up();
            }
            KeyAction::Shift => {
                self.mods.shift.key_up();
            }
            KeyAction::VirtualKeyboard => {
                self.notify(UiNotice::ToggleKeyboard);
                return true;
            }
            // Zoom fired on key-down; claim the matching release.
            KeyAction::ZoomIn | KeyAction::ZoomOut => return true,
            KeyAction::ForwardToSystem => return false,
            _ => {}
        }
        false
    }

    /// Enqueue a direction from an on-screen dpad digit ('1'..'9',
    /// numpad layout).
    ///
    /// Remaps to the roguelike letter keyset when active. With always-run
    /// enabled and the consumer parked (the game loop is idle awaiting a
    /// command), the direction becomes a run: uppercase letter in the
    /// roguelike keyset, run-command prefix in the default one.
    pub fn add_direction(&self, digit: char) {
        let rogue = self.prefs.roguelike_keys;
        let key = if rogue { roguelike_direction(digit) } else { digit };

        if self.prefs.always_run && self.queue.is_parked() {
            if rogue {
                self.queue.offer(key.to_ascii_uppercase() as KeyCode);
            } else {
                self.queue.offer_many(&[RUN_COMMAND, key as KeyCode]);
            }
        } else {
            self.queue.offer(key as KeyCode);
        }
    }

    /// Plain direction code for the active keyset, as used by the
    /// hardware dpad (no run handling).
    fn direction_key(&self, digit: char) -> KeyCode {
        if self.prefs.roguelike_keys {
            roguelike_direction(digit) as KeyCode
        } else {
            digit as KeyCode
        }
    }

    /// Modifier state, for the owning session and for tests.
    pub fn modifiers(&self) -> &ModifierState {
        &self.mods
    }

    fn notify(&self, notice: UiNotice) {
        if let Some(tx) = &self.notices {
            let _ = tx.send(notice);
        }
    }
}

/// Numpad digit to roguelike movement letter. '5' rests, '0' has no
/// letter and passes through.
fn roguelike_direction(digit: char) -> char {
    match digit {
        '1' => 'b',
        '2' => 'j',
        '3' => 'n',
        '4' => 'h',
        '5' => ' ',
        '6' => 'l',
        '7' => 'y',
        '8' => 'k',
        '9' => 'u',
        other => other,
    }
}

// =============================================================================
// Tests
// =============================================================================
