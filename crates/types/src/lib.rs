//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be shared
//! by the engine, the terminal view and the input mapping alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 22 rows (indexed 0-21, row 0 is the top)
//!
//! # Timing Constants
//!
//! All engine timing is expressed in ticks (calls to `Engine::advance`), not in
//! wall-clock time. The host decides how long a tick is.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_FALL_DELAY` | 60 | Ticks between automatic falls at game start |
//! | `MIN_FALL_DELAY` | 5 | Fall delay floor |
//! | `FALL_DELAY_STEP` | 5 | Fall delay decrease per speed-up |
//! | `SPEED_INCREASE_INTERVAL` | 18000 | Playing ticks between speed-ups |
//! | `LINE_CLEAR_ANIMATION_TICKS` | 20 | Clear animation expires once its timer exceeds this |
//! | `FLASH_PERIOD` | 10 | Pending rows flash for the first half of every period |
//!
//! # Examples
//!
//! ```
//! use tetris_classic_types::{BlockColor, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.color(), BlockColor::Magenta);
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 12);
//! assert_eq!(BOARD_HEIGHT, 22);
//! ```

/// Board width in cells (12 columns)
pub const BOARD_WIDTH: u8 = 12;

/// Board height in cells (22 rows)
pub const BOARD_HEIGHT: u8 = 22;

/// Host tick length in milliseconds (16ms ≈ 60 ticks per second)
pub const TICK_MS: u32 = 16;

/// Fall delay (ticks between automatic falls) at the start of a game
pub const INITIAL_FALL_DELAY: u32 = 60;

/// Fall delay never drops below this many ticks
pub const MIN_FALL_DELAY: u32 = 5;

/// Amount the fall delay shrinks at every speed-up
pub const FALL_DELAY_STEP: u32 = 5;

/// Number of elapsed playing ticks between two speed-ups
pub const SPEED_INCREASE_INTERVAL: u64 = 18_000;

/// The clear animation expires on the first tick its timer exceeds this value
pub const LINE_CLEAR_ANIMATION_TICKS: u32 = 20;

/// Pending rows are highlighted while `phase % FLASH_PERIOD < FLASH_PERIOD / 2`
pub const FLASH_PERIOD: u32 = 10;

/// Base score for a single cleared row; doubled for every extra simultaneous row
pub const LINE_CLEAR_BASE_SCORE: u32 = 100;

/// The seven tetromino piece kinds, in generator order
///
/// Each piece has a fixed color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **L**: Orange, L-shaped
/// - **J**: Blue, J-shaped (mirror of L)
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, indexed the way the piece generator draws them
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Default color of the kind
    pub fn color(&self) -> BlockColor {
        match self {
            PieceKind::I => BlockColor::Cyan,
            PieceKind::O => BlockColor::Yellow,
            PieceKind::T => BlockColor::Magenta,
            PieceKind::L => BlockColor::Orange,
            PieceKind::J => BlockColor::Blue,
            PieceKind::S => BlockColor::Green,
            PieceKind::Z => BlockColor::Red,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_classic_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter, as written in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// Color tag stored in occupied board cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Cyan,
    Yellow,
    Magenta,
    Orange,
    Blue,
    Green,
    Red,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(BlockColor)`: Cell filled with a block of that color
pub type Cell = Option<BlockColor>;

/// Discrete requests forwarded by the input collaborator
///
/// Every action is safe to send at any time: the engine ignores actions that do
/// not apply to its current [`GamePhase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down, locking it if it cannot move
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece to its ghost position and lock it
    HardDrop,
    /// Swap with (or stash into) the hold slot
    Hold,
    /// Pause when playing, resume when paused
    TogglePause,
    /// Start a new game from the menu or the game-over screen
    Start,
}

impl GameAction {
    pub const ALL: [GameAction; 8] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::Hold,
        GameAction::TogglePause,
        GameAction::Start,
    ];

    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_classic_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("togglepause"), Some(GameAction::TogglePause));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" => Some(GameAction::HardDrop),
            "hold" => Some(GameAction::Hold),
            "togglepause" => Some(GameAction::TogglePause),
            "start" => Some(GameAction::Start),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Hold => "hold",
            GameAction::TogglePause => "togglePause",
            GameAction::Start => "start",
        }
    }
}

/// Top-level state of the engine; exactly one holds at any time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Title screen, waiting for `Start`
    #[default]
    Menu,
    /// A piece is falling
    Playing,
    /// Frozen until `TogglePause`
    Paused,
    /// Spawn was blocked, waiting for `Start`
    GameOver,
    /// Full rows are flashing before they are removed
    LineClearAnimation,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Menu => "menu",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "gameOver",
            GamePhase::LineClearAnimation => "lineClearAnimation",
        }
    }

    /// Whether the board should be drawn (everything except the menu)
    pub fn shows_board(&self) -> bool {
        !matches!(self, GamePhase::Menu)
    }
}
