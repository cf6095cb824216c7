//! Per-game-session owner of the queue and translator state.
//!
//! One [`Session`] per running game. The producer (UI) thread drives the
//! session directly; the consumer thread takes a [`KeyQueue`] handle from
//! [`Session::queue`] and blocks on it from its read loop. Nothing here is
//! process-global, so sessions and tests run in isolation.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use crate::config::Preferences;
use crate::keymap::{Keymap, QwertyKeymap};
use crate::modifier::ModifierState;
use crate::queue::KeyQueue;
use crate::translate::{KeyTranslator, UiNotice};
use crate::types::{KeyCode, RawKeyEvent};

/// A single game session's input core.
///
/// Owns the shared key queue and the producer-side translator state. The
/// session itself lives on the producer thread; only the queue handle
/// crosses threads.
pub struct Session {
    queue: Arc<KeyQueue>,
    translator: KeyTranslator,
}

impl Session {
    /// Build a session and auto-inject the configured startup keys.
    pub fn new(
        prefs: Preferences,
        keymap: Box<dyn Keymap>,
        notices: Option<Sender<UiNotice>>,
    ) -> Self {
        let queue = Arc::new(KeyQueue::new());
        queue.offer_many(prefs.startup.startup_keys());
        let translator = KeyTranslator::new(queue.clone(), prefs, keymap, notices);
        Self { queue, translator }
    }

    /// Default preferences, bundled QWERTY keymap, no side channel.
    pub fn with_defaults() -> Self {
        Self::new(Preferences::default(), Box::new(QwertyKeymap), None)
    }

    /// Queue handle for the consumer thread. Exactly one thread may call
    /// blocking takes on it.
    pub fn queue(&self) -> Arc<KeyQueue> {
        self.queue.clone()
    }

    /// Resolve a physical key-down. See [`KeyTranslator::key_down`].
    pub fn key_down(&mut self, ev: &RawKeyEvent) -> bool {
        self.translator.key_down(ev)
    }

    /// Resolve a physical key-up. See [`KeyTranslator::key_up`].
    pub fn key_up(&mut self, ev: &RawKeyEvent) -> bool {
        self.translator.key_up(ev)
    }

    /// Enqueue an on-screen dpad direction.
    pub fn add_direction(&self, digit: char) {
        self.translator.add_direction(digit);
    }

    /// Push a pre-resolved key code straight onto the queue.
    pub fn offer(&self, key: KeyCode) {
        self.queue.offer(key);
    }

    /// Force the blocked game loop to return the save sentinel.
    pub fn signal_save(&self) {
        self.queue.signal_save();
    }

    /// Start the graceful-shutdown key sequence.
    pub fn arm_exit(&self) {
        self.queue.arm_exit();
    }

    pub fn modifiers(&self) -> &ModifierState {
        self.translator.modifiers()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StartupMode;
    use crate::types::{KEY_NONE, KEY_SAVE, keys};

    fn session_with_startup(startup: StartupMode) -> Session {
        let prefs = Preferences {
            startup,
            ..Preferences::default()
        };
        Session::new(prefs, Box::new(QwertyKeymap), None)
    }

    #[test]
    fn test_no_startup_injection_by_default() {
        let session = Session::with_defaults();
        assert_eq!(session.queue().take(false), KEY_NONE);
    }

    #[test]
    fn test_skip_welcome_injection() {
        let session = session_with_startup(StartupMode::SkipWelcome);
        let queue = session.queue();
        assert_eq!(queue.take(false), 32);
        assert_eq!(queue.take(false), KEY_NONE);
    }

    #[test]
    fn test_auto_borg_injection() {
        let session = session_with_startup(StartupMode::AutoBorg);
        let queue = session.queue();
        assert_eq!(queue.take(false), 32);
        assert_eq!(queue.take(false), 26);
        assert_eq!(queue.take(false), 122);
        assert_eq!(queue.take(false), KEY_NONE);
    }

    #[test]
    fn test_producer_to_consumer_flow() {
        let mut session = Session::with_defaults();
        let queue = session.queue();
        assert!(session.key_down(&RawKeyEvent::new(keys::A)));
        session.key_up(&RawKeyEvent::new(keys::A));
        assert_eq!(queue.take(false), 'a' as i32);
    }

    #[test]
    fn test_signal_save_delegation() {
        let session = Session::with_defaults();
        session.offer(42);
        session.signal_save();
        assert_eq!(session.queue().take(false), KEY_SAVE);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let a = Session::with_defaults();
        let b = Session::with_defaults();
        a.offer(1);
        assert_eq!(b.queue().take(false), KEY_NONE);
        assert_eq!(a.queue().take(false), 1);
    }
}
