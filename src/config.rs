//! Session preferences: button bindings, keyset and startup behavior.
//!
//! Plain-data configuration consumed at session construction. Hosts load
//! and persist these however they like (the serde derives exist for that);
//! the core only reads them.

use serde::{Deserialize, Serialize};

use crate::types::{KeyCode, keys};

// =============================================================================
// Logical actions
// =============================================================================

/// What a configured device button does on key-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// No binding; resolution falls through to the keymap.
    #[default]
    None,
    /// Toggle/hold the ctrl modifier.
    Ctrl,
    /// Toggle/hold the alt modifier.
    Alt,
    /// Toggle/hold the shift modifier.
    Shift,
    /// Fixed carriage return.
    Enter,
    /// Fixed space.
    Space,
    /// Fixed backtick, the in-game escape.
    Escape,
    /// Ask the presentation layer to zoom in. Not enqueued.
    ZoomIn,
    /// Ask the presentation layer to zoom out. Not enqueued.
    ZoomOut,
    /// Toggle the on-screen keyboard, deferred to key-up.
    VirtualKeyboard,
    /// Leave the event to the surrounding system.
    ForwardToSystem,
}

// =============================================================================
// Startup injection
// =============================================================================

/// Keys auto-injected into the queue when a session is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartupMode {
    #[default]
    Normal,
    /// Advance past the welcome screen: space.
    SkipWelcome,
    /// Boot straight into the borg: space, ctrl-v, v.
    AutoBorg,
}

impl StartupMode {
    pub fn startup_keys(self) -> &'static [KeyCode] {
        match self {
            StartupMode::Normal => &[],
            StartupMode::SkipWelcome => &[32],
            StartupMode::AutoBorg => &[32, 26, 122],
        }
    }
}

// =============================================================================
// Preferences
// =============================================================================

/// Per-session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub back_button: KeyAction,
    pub camera_button: KeyAction,
    pub dpad_center: KeyAction,
    pub search_button: KeyAction,
    pub menu_button: KeyAction,
    pub emoticon_key: KeyAction,
    pub left_alt: KeyAction,
    pub right_alt: KeyAction,
    pub left_shift: KeyAction,
    pub right_shift: KeyAction,
    pub volume_up: KeyAction,
    pub volume_down: KeyAction,
    /// Alternate action fired by the second tap of an unused ctrl toggle.
    pub ctrl_double_tap: KeyAction,
    /// Directions use the roguelike letter keyset (hjkl + diagonals).
    pub roguelike_keys: bool,
    /// Prefix directions with the run command while the game loop is idle.
    pub always_run: bool,
    pub startup: StartupMode,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            back_button: KeyAction::Escape,
            camera_button: KeyAction::None,
            dpad_center: KeyAction::Enter,
            search_button: KeyAction::Ctrl,
            menu_button: KeyAction::VirtualKeyboard,
            emoticon_key: KeyAction::Ctrl,
            left_alt: KeyAction::Alt,
            right_alt: KeyAction::Alt,
            left_shift: KeyAction::Shift,
            right_shift: KeyAction::Shift,
            volume_up: KeyAction::ZoomIn,
            volume_down: KeyAction::ZoomOut,
            ctrl_double_tap: KeyAction::Escape,
            roguelike_keys: false,
            always_run: false,
            startup: StartupMode::Normal,
        }
    }
}

impl Preferences {
    /// Binding lookup for a physical key. Unbound keys resolve to
    /// [`KeyAction::None`].
    pub fn action_for(&self, key: u16) -> KeyAction {
        match key {
            keys::BACK => self.back_button,
            keys::CAMERA => self.camera_button,
            keys::DPAD_CENTER => self.dpad_center,
            keys::SEARCH => self.search_button,
            keys::MENU => self.menu_button,
            keys::EMOTICON => self.emoticon_key,
            keys::ALT_LEFT => self.left_alt,
            keys::ALT_RIGHT => self.right_alt,
            keys::SHIFT_LEFT => self.left_shift,
            keys::SHIFT_RIGHT => self.right_shift,
            keys::VOLUME_UP => self.volume_up,
            keys::VOLUME_DOWN => self.volume_down,
            _ => KeyAction::None,
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
    fn test_default_bindings() {
        let prefs = Preferences::default();
        assert_eq!(prefs.action_for(keys::BACK), KeyAction::Escape);
        assert_eq!(prefs.action_for(keys::ALT_LEFT), KeyAction::Alt);
        assert_eq!(prefs.action_for(keys::SHIFT_RIGHT), KeyAction::Shift);
        assert_eq!(prefs.action_for(keys::VOLUME_UP), KeyAction::ZoomIn);
        assert_eq!(prefs.action_for(keys::A), KeyAction::None);
    }

    #[test]
    fn test_startup_keys() {
        assert!(StartupMode::Normal.startup_keys().is_empty());
        assert_eq!(StartupMode::SkipWelcome.startup_keys(), &[32]);
        assert_eq!(StartupMode::AutoBorg.startup_keys(), &[32, 26, 122]);
    }

    #[test]
    fn test_startup_keys_are_characters() {
        for key in StartupMode::AutoBorg.startup_keys() {
            assert!((1..=127).contains(key));
        }
    }
}
