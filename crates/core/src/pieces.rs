//! Pieces module - tetromino shape matrices and the rotation rule
//!
//! Every shape is a small boolean matrix (at most 4x4) describing one rotation
//! state. Rotation turns the matrix 90° clockwise and then tries three x offsets
//! (0, +1, -1); nothing else is attempted.

use crate::types::{BlockColor, PieceKind, BOARD_WIDTH};

/// Largest bounding box of any tetromino rotation state
pub const MAX_SHAPE_DIM: usize = 4;

/// X offsets tried, in order, after a rotation. All are relative to the original x.
pub const ROTATION_KICKS: [i8; 3] = [0, 1, -1];

/// One rotation state of a tetromino as a filled/empty matrix
///
/// Shapes are plain values: copying a shape into another slot never shares
/// storage with the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from `0`/`1` rows. All rows must have the same length.
    ///
    /// # Panics
    ///
    /// Panics on ragged rows or a matrix larger than 4x4; shapes come from
    /// static tables so this is a programming error.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM, "bad shape height");
        let cols = rows[0].len();
        assert!(cols > 0 && cols <= MAX_SHAPE_DIM, "bad shape width");

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "ragged shape row {r}");
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }

        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        }
    }

    /// Home orientation of a canonical kind
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            PieceKind::L => Self::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
            PieceKind::J => Self::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether matrix cell (row, col) is filled; false outside the matrix
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.cells[row][col]
    }

    /// `(dx, dy)` offsets of every filled cell, row by row
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows()).flat_map(move |r| {
            (0..self.cols())
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// The matrix turned 90° clockwise: `new[r][c] = old[rows - 1 - c][r]`.
    ///
    /// The result has `cols` rows and `rows` columns.
    pub fn rotated_cw(&self) -> Self {
        let rows = self.rows();
        let cols = self.cols();
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (c, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - c][r];
            }
        }

        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// A tetromino with its current rotation matrix, color and anchor position
///
/// `(x, y)` is the board coordinate of the top-left corner of the shape's
/// bounding box. `y` may be negative while the piece pokes out above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: BlockColor,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A piece in home orientation with its default color, not yet placed
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: Shape::of(kind),
            color: kind.color(),
            x: 0,
            y: 0,
        }
    }

    /// Column where this piece appears: centered on the board by its width
    pub fn spawn_x(&self) -> i8 {
        (BOARD_WIDTH / 2) as i8 - (self.shape.cols() / 2) as i8
    }

    /// Move the piece to the spawn position (spawn column, row 0)
    pub fn home(&mut self) {
        self.x = self.spawn_x();
        self.y = 0;
    }

    /// Copy of this piece at another position
    pub fn at(&self, x: i8, y: i8) -> Self {
        Self { x, y, ..*self }
    }

    /// Copy of this piece with its position discarded (for the hold slot)
    pub fn detached(&self) -> Self {
        self.at(0, 0)
    }

    /// Board coordinates of every filled cell at the current position
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Rotate `piece` clockwise, resolving collisions with the fixed kick list.
///
/// `collides` is asked about each candidate (rotated shape, same y, x shifted by
/// 0, then +1, then -1 from the original x). Returns the first free candidate, or
/// `None` when all three collide and the rotation is rejected.
pub fn try_rotate(piece: &Piece, collides: impl Fn(&Piece) -> bool) -> Option<Piece> {
    let rotated = Piece {
        shape: piece.shape.rotated_cw(),
        ..*piece
    };

    ROTATION_KICKS
        .iter()
        .map(|&dx| rotated.at(piece.x + dx, piece.y))
        .find(|candidate| !collides(candidate))
}
