//! # keywell
//!
//! Key-event buffering and sticky-modifier disambiguation for blocking
//! game loops.
//!
//! Synchronous roguelike engines read input one key at a time from a
//! blocking "next key" call. keywell sits between that loop and whatever
//! thread produces input events:
//!
//! ```text
//! UI thread → KeyTranslator (modifier state machine) → KeyQueue.offer
//!                                                          │
//! game loop thread ←──────────── KeyQueue.take(blocking) ──┘
//! ```
//!
//! The queue hands integer key codes across threads without loss or
//! duplication and keeps the blocked consumer responsive to two interrupt
//! conditions: the save sentinel ([`KeyQueue::signal_save`]) and the
//! graceful-shutdown exit sequence ([`KeyQueue::arm_exit`]). The
//! translator resolves the awkward parts of phone/terminal input: sticky
//! modifier toggles, momentary holds, double-tap overloads and the
//! context-sensitive direction keyset.
//!
//! ## Modules
//!
//! - [`types`] - Key codes, modifier flags, physical key identifiers
//! - [`queue`] - Cross-thread key buffer with one blocking consumer
//! - [`exit`] - Graceful-shutdown key sequence
//! - [`modifier`] - Sticky/held/double-tap modifier tracks
//! - [`keymap`] - Physical-key to code-point lookup seam
//! - [`translate`] - Key-event resolution and direction translation
//! - [`config`] - Button bindings, keyset and startup preferences
//! - [`session`] - Per-game-session owner object
//! - [`profile`] - Save-slot profile records
//! - [`input`] - Crossterm front-end bridge

pub mod config;
pub mod exit;
pub mod input;
pub mod keymap;
pub mod modifier;
pub mod profile;
pub mod queue;
pub mod session;
pub mod translate;
pub mod types;

pub use config::{KeyAction, Preferences, StartupMode};
pub use exit::{EXIT_CONFIRM_QUIT, EXIT_ESCAPE, ExitSignal};
pub use input::{KeyEdge, convert_key_event};
pub use keymap::{Keymap, QwertyKeymap};
pub use modifier::{ModifierState, ModifierTrack};
pub use profile::{Profile, ProfileParseError};
pub use queue::KeyQueue;
pub use session::Session;
pub use translate::{KeyTranslator, UiNotice};
pub use types::*;
