//! Sticky / held / double-tap disambiguation for ctrl, alt and shift.
//!
//! On devices without a full keyboard the modifier keys double as toggles:
//! a tap arms the modifier for the next character, holding it works like a
//! regular keyboard, and a second tap with nothing consumed in between
//! cancels the toggle. Ctrl additionally carries a one-shot "overload":
//! when a release leaves its toggle armed, the next ctrl key-down fires a
//! configured alternate action instead of toggling.
//!
//! Each of the three tracks is the same small state struct; only ctrl has
//! the extra overload flag, kept on [`ModifierState`]. All of this state is
//! touched exclusively from the producer (UI) thread and needs no locking.

// =============================================================================
// Single track
// =============================================================================

/// Toggle/hold state for one modifier key.
///
/// `held` mirrors the physical key; `toggled` is the logical "modifier
/// active for the next character" state. They are independent: a track can
/// be toggled with the key long released (sticky mode).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModifierTrack {
    toggled: bool,
    held: bool,
    used: bool,
}

impl ModifierTrack {
    /// Physical key-down of the modifier key itself.
    ///
    /// Callers must filter key-repeat events; a repeating modifier must not
    /// re-toggle.
    pub fn key_down(&mut self) {
        self.toggled = !self.toggled;
        // A second tap with nothing consumed in between reads as a cancel,
        // not as toggle-on-then-off.
        self.used = !self.toggled;
        self.held = true;
    }

    /// Physical key-up. An unused toggle survives release, armed for the
    /// next character; one that already modified a character while held is
    /// cleared (momentary-hold semantics).
    pub fn key_up(&mut self) {
        self.held = false;
        self.toggled = !self.used;
    }

    /// Consume the toggle for one outgoing character.
    ///
    /// Returns true when the modifier applies. Sticky delivery continues
    /// only while the key is still physically down; a tap-and-release
    /// toggle is spent by this call.
    pub fn apply(&mut self) -> bool {
        if !self.toggled {
            return false;
        }
        self.toggled = self.held;
        true
    }

    /// Sync the used flag to the physical state. Called once per enqueued
    /// character, for every track.
    pub fn mark_used(&mut self) {
        self.used = self.held;
    }

    pub fn is_toggled(&self) -> bool {
        self.toggled
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

// =============================================================================
// Three tracks + ctrl overload
// =============================================================================

/// The full modifier state machine: one track per modifier key plus the
/// ctrl overload escape.
#[derive(Debug, Default)]
pub struct ModifierState {
    pub ctrl: ModifierTrack,
    pub alt: ModifierTrack,
    pub shift: ModifierTrack,
    overload: bool,
}

impl ModifierState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ctrl key-up also decides the overload: it arms exactly when the
    /// release leaves the toggle active.
    pub fn ctrl_key_up(&mut self) {
        self.ctrl.key_up();
        self.overload = self.ctrl.is_toggled();
    }

    /// Whether the next ctrl key-down should fire the alternate
    /// double-tap action instead of the plain toggle handling.
    pub fn overload_armed(&self) -> bool {
        self.overload
    }

    /// Any resolved key-down spends the overload, ctrl-related or not.
    pub fn clear_overload(&mut self) {
        self.overload = false;
    }

    /// Sync all used flags after a character was produced.
    pub fn mark_all_used(&mut self) {
        self.ctrl.mark_used();
        self.alt.mark_used();
        self.shift.mark_used();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_arms_toggle() {
        let mut track = ModifierTrack::default();
        track.key_down();
        assert!(track.is_toggled());
        assert!(track.is_held());
        track.key_up();
        // Unused toggle persists past release (sticky mode).
        assert!(track.is_toggled());
        assert!(!track.is_held());
    }

    #[test]
    fn test_double_tap_cancels() {
        let mut track = ModifierTrack::default();
        track.key_down();
        track.key_up();
        track.key_down();
        track.key_up();
        assert!(!track.is_toggled());
    }

    #[test]
    fn test_apply_spends_released_toggle() {
        let mut track = ModifierTrack::default();
        track.key_down();
        track.key_up();
        assert!(track.apply());
        assert!(!track.is_toggled());
        assert!(!track.apply());
    }

    #[test]
    fn test_apply_sticky_while_held() {
        let mut track = ModifierTrack::default();
        track.key_down();
        assert!(track.apply());
        // Key still physically down: the toggle keeps applying.
        assert!(track.is_toggled());
        assert!(track.apply());
    }

    #[test]
    fn test_use_while_held_clears_toggle_on_release() {
        let mut track = ModifierTrack::default();
        track.key_down();
        assert!(track.apply());
        track.mark_used();
        track.key_up();
        assert!(!track.is_toggled());
    }

    #[test]
    fn test_sticky_across_characters_while_held() {
        let mut track = ModifierTrack::default();
        track.key_down();
        assert!(track.apply());
        track.mark_used();
        assert!(track.apply());
        track.mark_used();
        assert!(track.is_toggled());
    }

    #[test]
    fn test_ctrl_release_with_unused_toggle_arms_overload() {
        let mut mods = ModifierState::new();
        mods.ctrl.key_down();
        mods.ctrl_key_up();
        assert!(mods.ctrl.is_toggled());
        assert!(mods.overload_armed());
    }

    #[test]
    fn test_ctrl_full_double_tap_leaves_untoggled() {
        let mut mods = ModifierState::new();
        // First tap arms the toggle and, on release, the overload.
        mods.ctrl.key_down();
        mods.ctrl_key_up();
        assert!(mods.overload_armed());
        // Second tap: the toggle transition runs, the caller fires the
        // double-tap action and clears the overload during resolution.
        mods.ctrl.key_down();
        mods.clear_overload();
        mods.mark_all_used();
        mods.ctrl_key_up();
        assert!(!mods.ctrl.is_toggled());
        assert!(!mods.overload_armed());
    }

    #[test]
    fn test_clear_overload_is_global() {
        let mut mods = ModifierState::new();
        mods.ctrl.key_down();
        mods.ctrl_key_up();
        assert!(mods.overload_armed());
        // A stray alt/shift resolution also disarms it.
        mods.clear_overload();
        assert!(!mods.overload_armed());
    }
}
