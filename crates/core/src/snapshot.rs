use crate::board::RowList;
use crate::pieces::Piece;
use crate::types::{Cell, GamePhase, BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only copy of everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub current: Option<Piece>,
    pub ghost: Option<Piece>,
    pub next: Option<Piece>,
    pub hold: Option<Piece>,
    pub can_hold: bool,
    pub score: u32,
    pub high_score: u32,
    pub fall_delay: u32,
    pub pending_rows: RowList,
    pub animation_phase: u32,
    pub flash_on: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.phase = GamePhase::Menu;
        self.board = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.current = None;
        self.ghost = None;
        self.next = None;
        self.hold = None;
        self.can_hold = true;
        self.score = 0;
        self.high_score = 0;
        self.fall_delay = 0;
        self.pending_rows.clear();
        self.animation_phase = 0;
        self.flash_on = false;
    }

    /// Whether row `y` should be drawn highlighted this frame
    pub fn row_flashing(&self, y: usize) -> bool {
        self.flash_on && self.pending_rows.contains(&y)
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            phase: GamePhase::Menu,
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: None,
            ghost: None,
            next: None,
            hold: None,
            can_hold: true,
            score: 0,
            high_score: 0,
            fall_delay: 0,
            pending_rows: RowList::new(),
            animation_phase: 0,
            flash_on: false,
        };
        s.clear();
        s
    }
}
