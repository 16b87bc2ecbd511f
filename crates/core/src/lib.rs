//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state. It performs no I/O and
//! never reads the clock: the host calls [`Engine::advance`] once per fixed tick
//! and [`Engine::apply_action`] for each request, then reads the state back
//! through accessors or a [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`board`]: 12x22 grid of colored cells, full-row detection and compaction
//! - [`pieces`]: tetromino shape matrices and clockwise rotation with x kicks
//! - [`collision`]: wall/floor/stack checks and ghost projection
//! - [`rng`]: seeded uniform piece generator
//! - [`gravity`]: automatic falling and the long-run speed-up
//! - [`line_clear`]: the clear animation timer
//! - [`scoring`]: points per clear
//! - [`game_state`]: the [`Engine`] phase machine tying it all together
//! - [`snapshot`]: a read-only copy of the state for renderers
//!
//! # Game Rules
//!
//! - Pieces are drawn uniformly at random, one preview slot
//! - Rotation is clockwise only; after rotating, x offsets 0, +1, -1 are tried
//! - A piece locks on the first blocked downward step (no lock delay)
//! - Full rows flash for a short animation before they are removed
//! - Clearing `k` rows scores `100 * 2^(k-1)`
//! - One hold per lock; the held piece keeps its rotation
//!
//! # Example
//!
//! ```
//! use tetris_classic_core::Engine;
//! use tetris_classic_types::{GameAction, GamePhase};
//!
//! let mut engine = Engine::new(12345, 0);
//! assert_eq!(engine.phase(), GamePhase::Menu);
//!
//! engine.apply_action(GameAction::Start);
//! engine.apply_action(GameAction::MoveRight);
//! engine.apply_action(GameAction::Rotate);
//! engine.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(engine.board().occupied_count(), 4);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod gravity;
pub mod line_clear;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tetris_classic_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, RowList};
pub use collision::{collides, collides_at, project_ghost};
pub use game_state::{Engine, EngineEvent};
pub use pieces::{try_rotate, Piece, Shape};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::line_clear_score;
pub use snapshot::GameSnapshot;
