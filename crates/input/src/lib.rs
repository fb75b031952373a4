//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Only key
//! presses are translated; each press yields at most one action, which the
//! caller queues on the session.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, translate_event, Input};
