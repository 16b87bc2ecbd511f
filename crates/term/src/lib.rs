//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders a
//! [`GameSnapshot`](crate::core::GameSnapshot) into a simple framebuffer that
//! is diffed and flushed to the terminal.
//!
//! - [`fb`]: styled character cells
//! - [`game_view`]: snapshot to framebuffer (board, ghost, side panel, overlays)
//! - [`renderer`]: crossterm output with changed-run diffing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_classic_core as core;
pub use tetris_classic_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{block_rgb, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
