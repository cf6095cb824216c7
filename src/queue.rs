//! Thread-safe pending-key buffer with a single blocking consumer.
//!
//! Producers (UI callbacks) push key codes with [`KeyQueue::offer`]; the one
//! consumer thread drains them with [`KeyQueue::take`], optionally blocking
//! until a key arrives. Two interrupt paths cut through normal delivery:
//!
//! - [`KeyQueue::signal_save`] replaces the buffer with the [`KEY_SAVE`]
//!   sentinel so a blocked game loop returns immediately and saves.
//! - [`KeyQueue::arm_exit`] switches every subsequent take over to the
//!   deterministic exit sequence (see [`crate::exit`]).
//!
//! All buffer access and the parked flag share one mutex. A blocking take
//! checks the exit signal, then the buffer, and only then parks, all inside
//! the same critical section. A producer therefore either sees `parked == true`
//! and notifies, or its key is already in the buffer when the consumer
//! peeks. That peek-before-park ordering is what makes lost wakeups
//! impossible.

use std::collections::VecDeque;

use parking_lot::{Condvar, Mutex};

use crate::exit::ExitSignal;
use crate::types::{KEY_NONE, KEY_SAVE, KeyCode};

// =============================================================================
// Queue
// =============================================================================

/// FIFO key buffer shared between producer threads and one consumer.
pub struct KeyQueue {
    inner: Mutex<Inner>,
    cond: Condvar,
}

struct Inner {
    buf: VecDeque<KeyCode>,
    parked: bool,
    exit: ExitSignal,
}

impl KeyQueue {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                buf: VecDeque::new(),
                parked: false,
                exit: ExitSignal::new(),
            }),
            cond: Condvar::new(),
        }
    }

    /// Append a key and wake the consumer if it is parked. Never blocks.
    pub fn offer(&self, key: KeyCode) {
        let mut inner = self.inner.lock();
        inner.buf.push_back(key);
        log::trace!("offer {key}");
        self.wake_locked(&inner);
    }

    /// Append several keys as one atomic batch, with a single wake at the
    /// end. Used for run-prefix pairs that must not interleave with other
    /// producers.
    pub fn offer_many(&self, keys: &[KeyCode]) {
        if keys.is_empty() {
            return;
        }
        let mut inner = self.inner.lock();
        inner.buf.extend(keys.iter().copied());
        log::trace!("offer batch {keys:?}");
        self.wake_locked(&inner);
    }

    /// Pop the next key.
    ///
    /// While the exit signal is armed this returns its next step value and
    /// never touches the buffer. Otherwise the head of the buffer is
    /// returned, or [`KEY_NONE`] when empty and `blocking` is false. With
    /// `blocking` set, the calling thread parks until a producer wakes it;
    /// a wake that finds no data (sentinel already consumed, or a spurious
    /// signal) also yields [`KEY_NONE`], which the caller treats as "no key
    /// yet, try again".
    ///
    /// Exactly one thread per queue may call this with `blocking = true`;
    /// concurrent blocking takes from several threads are a protocol
    /// violation and behavior is unspecified.
    pub fn take(&self, blocking: bool) -> KeyCode {
        let mut inner = self.inner.lock();

        if inner.exit.is_armed() {
            return inner.exit.next_step();
        }
        if let Some(key) = inner.buf.pop_front() {
            return key;
        }
        if !blocking {
            return KEY_NONE;
        }

        // Peek above came up empty inside the same critical section that
        // parks, so a key offered since our caller last looked cannot be
        // missed: the producer either beat us to the lock (pop above finds
        // it) or sees parked == true and notifies.
        inner.parked = true;
        self.cond.wait(&mut inner);
        inner.parked = false;

        inner.buf.pop_front().unwrap_or(KEY_NONE)
    }

    /// Empty the buffer. Does not disturb a parked consumer.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.buf.clear();
    }

    /// Replace everything pending with the [`KEY_SAVE`] sentinel and wake
    /// the consumer. Called when the host is about to terminate the
    /// process: the blocked game loop returns `-1` and saves instead of
    /// waiting forever for a key that will never come.
    pub fn signal_save(&self) {
        let mut inner = self.inner.lock();
        inner.buf.clear();
        inner.buf.push_back(KEY_SAVE);
        log::debug!("signal save");
        self.wake_locked(&inner);
    }

    /// Arm the exit sequence and wake the consumer so it starts receiving
    /// the escape → confirm cadence.
    pub fn arm_exit(&self) {
        let mut inner = self.inner.lock();
        inner.exit.arm();
        log::debug!("exit sequence armed");
        self.wake_locked(&inner);
    }

    /// Wake the parked consumer, if any. No-op otherwise.
    pub fn wake(&self) {
        let inner = self.inner.lock();
        self.wake_locked(&inner);
    }

    /// Whether the consumer is currently suspended in a blocking take.
    ///
    /// Doubles as an idle signal: a parked consumer means the game loop is
    /// awaiting its next command.
    pub fn is_parked(&self) -> bool {
        self.inner.lock().parked
    }

    fn wake_locked(&self, inner: &Inner) {
        if inner.parked {
            self.cond.notify_one();
        }
    }
}

impl Default for KeyQueue {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
