//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Quitting is a
//! host concern and has its own predicate, [`should_quit`].

pub mod map;

pub use tetris_classic_types as types;

pub use map::{handle_key_event, should_quit};
