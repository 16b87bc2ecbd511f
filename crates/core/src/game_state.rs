//! Game state module - the engine aggregate
//!
//! This module ties together all core components: board, pieces, generator,
//! fall timing, line clears and scoring. The host drives it with two calls:
//! [`Engine::advance`] once per tick and [`Engine::apply_action`] for every
//! discrete request. Which actions do anything depends on the current
//! [`GamePhase`]; the rest are ignored.

use tracing::{debug, info};

use crate::board::{Board, RowList};
use crate::collision::{collides, project_ghost};
use crate::gravity::FallTimer;
use crate::line_clear::LineClear;
use crate::pieces::{try_rotate, Piece};
use crate::rng::PieceGenerator;
use crate::scoring::line_clear_score;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Facts the host may want to act on, drained with [`Engine::take_events`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// A new game began
    GameStarted,
    /// The current piece was written into the grid
    PieceLocked { full_rows: u8 },
    /// Pending rows were removed at the end of the clear animation
    LinesCleared { count: u8, points: u32 },
    /// A spawn was blocked; `score` is the final score
    GameOver { score: u32 },
    /// The finished game beat the stored high score; persist it
    NewHighScore(u32),
}

/// The falling-block rules engine
#[derive(Debug, Clone)]
pub struct Engine {
    phase: GamePhase,
    board: Board,
    current: Option<Piece>,
    next: Option<Piece>,
    hold: Option<Piece>,
    ghost: Option<Piece>,
    can_hold: bool,
    generator: PieceGenerator,
    fall: FallTimer,
    line_clear: LineClear,
    score: u32,
    high_score: u32,
    events: Vec<EngineEvent>,
}

impl Engine {
    /// Create an engine sitting in the menu.
    ///
    /// `high_score` is whatever the persistence layer loaded (0 if nothing).
    pub fn new(seed: u32, high_score: u32) -> Self {
        Self {
            phase: GamePhase::Menu,
            board: Board::new(),
            current: None,
            next: None,
            hold: None,
            ghost: None,
            can_hold: true,
            generator: PieceGenerator::new(seed),
            fall: FallTimer::new(),
            line_clear: LineClear::new(),
            score: 0,
            high_score,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn next_piece(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    pub fn held(&self) -> Option<&Piece> {
        self.hold.as_ref()
    }

    pub fn ghost(&self) -> Option<&Piece> {
        self.ghost.as_ref()
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn fall_delay(&self) -> u32 {
        self.fall.fall_delay()
    }

    /// Rows waiting to be removed (empty unless animating)
    pub fn pending_rows(&self) -> &[usize] {
        self.line_clear.rows()
    }

    /// Ticks since the clear animation started
    pub fn animation_phase(&self) -> u32 {
        self.line_clear.phase()
    }

    /// Take every event produced since the last call
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);

        out.phase = self.phase;
        out.current = self.current;
        out.ghost = self.ghost;
        out.next = self.next;
        out.hold = self.hold;
        out.can_hold = self.can_hold;
        out.score = self.score;
        out.high_score = self.high_score;
        out.fall_delay = self.fall.fall_delay();
        out.pending_rows.clear();
        out.pending_rows
            .extend(self.line_clear.rows().iter().copied());
        out.animation_phase = self.line_clear.phase();
        out.flash_on = self.line_clear.flash_on();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// One fixed tick: automatic falling while playing, the clear timer while
    /// animating, nothing otherwise.
    pub fn advance(&mut self) {
        match self.phase {
            GamePhase::Playing => {
                if self.fall.tick() {
                    self.step_down();
                }
            }
            GamePhase::LineClearAnimation => {
                if self.line_clear.tick() {
                    self.finish_line_clear();
                }
            }
            GamePhase::Menu | GamePhase::Paused | GamePhase::GameOver => {}
        }
    }

    /// Apply a discrete action.
    ///
    /// Returns true if the action was accepted. Actions that do not apply to the
    /// current phase (or are blocked by the board) return false and change nothing.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match (self.phase, action) {
            (GamePhase::Menu | GamePhase::GameOver, GameAction::Start) => {
                self.start();
                true
            }
            (GamePhase::Playing, GameAction::TogglePause) => {
                self.phase = GamePhase::Paused;
                true
            }
            (GamePhase::Paused, GameAction::TogglePause) => {
                self.phase = GamePhase::Playing;
                true
            }
            (GamePhase::Playing, GameAction::MoveLeft) => self.try_shift(-1),
            (GamePhase::Playing, GameAction::MoveRight) => self.try_shift(1),
            (GamePhase::Playing, GameAction::SoftDrop) => self.step_down(),
            (GamePhase::Playing, GameAction::Rotate) => self.rotate(),
            (GamePhase::Playing, GameAction::HardDrop) => self.hard_drop(),
            (GamePhase::Playing, GameAction::Hold) => self.hold(),
            _ => false,
        }
    }

    /// Reset everything but the high score and deal the first two pieces
    fn start(&mut self) {
        self.board.clear();
        self.score = 0;
        self.fall.reset();
        self.line_clear.reset();
        self.current = None;
        self.next = None;
        self.hold = None;
        self.ghost = None;
        self.can_hold = true;
        self.phase = GamePhase::Playing;
        self.events.push(EngineEvent::GameStarted);
        info!(seed = self.generator.seed(), high_score = self.high_score, "game started");

        // First call only fills `next`; the second promotes it to current.
        self.spawn_piece();
        self.spawn_piece();
    }

    /// Promote the next piece to current and draw a new next piece.
    ///
    /// Ends the game if the new current piece collides at its spawn position.
    fn spawn_piece(&mut self) {
        let incoming = self.generator.next();
        let Some(mut piece) = self.next.replace(incoming) else {
            return;
        };

        piece.home();
        self.current = Some(piece);
        self.refresh_ghost();
        debug!(kind = piece.kind.as_str(), x = piece.x, "spawned piece");

        if collides(&self.board, &piece) {
            self.end_game();
        }
    }

    fn refresh_ghost(&mut self) {
        self.ghost = self.current.map(|piece| project_ghost(&self.board, &piece));
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        let Some(current) = self.current else {
            return false;
        };

        let moved = current.at(current.x + dx, current.y);
        if collides(&self.board, &moved) {
            return false;
        }

        self.current = Some(moved);
        self.refresh_ghost();
        true
    }

    /// Move down one row, or lock in place when the row below is blocked
    fn step_down(&mut self) -> bool {
        let Some(current) = self.current else {
            return false;
        };

        let lowered = current.at(current.x, current.y + 1);
        if collides(&self.board, &lowered) {
            self.lock_current();
        } else {
            self.current = Some(lowered);
        }
        true
    }

    fn rotate(&mut self) -> bool {
        let Some(current) = self.current else {
            return false;
        };

        let rotated = try_rotate(&current, |candidate| collides(&self.board, candidate));
        if let Some(piece) = rotated {
            self.current = Some(piece);
        }
        self.refresh_ghost();
        rotated.is_some()
    }

    fn hard_drop(&mut self) -> bool {
        let Some(current) = self.current else {
            return false;
        };

        let landed = project_ghost(&self.board, &current);
        self.current = Some(landed);
        self.lock_current();
        true
    }

    /// Stash the current piece, or swap it with the held one. Once per lock.
    fn hold(&mut self) -> bool {
        if !self.can_hold {
            return false;
        }
        let Some(current) = self.current else {
            return false;
        };

        match self.hold.replace(current.detached()) {
            None => self.spawn_piece(),
            Some(mut held) => {
                held.home();
                self.current = Some(held);
                self.refresh_ghost();
                if collides(&self.board, &held) {
                    self.end_game();
                }
            }
        }

        self.can_hold = false;
        true
    }

    /// Write the current piece into the grid and look for full rows
    fn lock_current(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };
        self.ghost = None;

        for (x, y) in piece.cells() {
            // Cells still above the board are dropped.
            if y >= 0 {
                self.board.set_cell(x, y, piece.color);
            }
        }
        self.can_hold = true;

        let full_rows: RowList = self.board.full_rows();
        debug!(kind = piece.kind.as_str(), x = piece.x, y = piece.y, full = full_rows.len(), "locked piece");
        self.events.push(EngineEvent::PieceLocked {
            full_rows: full_rows.len() as u8,
        });

        if full_rows.is_empty() {
            self.spawn_piece();
        } else {
            self.line_clear.start(full_rows);
            self.phase = GamePhase::LineClearAnimation;
        }
    }

    /// Clear timer expired: drop the pending rows, score them, resume play
    fn finish_line_clear(&mut self) {
        let rows = self.line_clear.finish();
        let removed = self.board.compact_after_removing(&rows);
        let points = line_clear_score(removed);
        self.score = self.score.saturating_add(points);
        self.events.push(EngineEvent::LinesCleared {
            count: removed as u8,
            points,
        });
        debug!(removed, points, score = self.score, "cleared lines");

        self.phase = GamePhase::Playing;
        self.spawn_piece();
    }

    fn end_game(&mut self) {
        self.phase = GamePhase::GameOver;
        if self.score > self.high_score {
            self.high_score = self.score;
            self.events.push(EngineEvent::NewHighScore(self.score));
        }
        self.events.push(EngineEvent::GameOver { score: self.score });
        info!(score = self.score, high_score = self.high_score, "game over");
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(1, 0)
    }
}
