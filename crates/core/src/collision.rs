//! Collision probing and ghost projection
//!
//! Columns outside the board and rows past the bottom always collide. Rows above
//! the top never do: a piece may spawn or rotate partially above row 0, and only
//! the part inside the grid is checked against occupied cells.

use crate::board::Board;
use crate::pieces::Piece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether `piece`'s shape placed with its anchor at (x, y) hits a wall, the floor
/// or an occupied cell.
pub fn collides_at(board: &Board, piece: &Piece, x: i8, y: i8) -> bool {
    piece.shape.filled_cells().any(|(dx, dy)| {
        let bx = x + dx;
        let by = y + dy;

        if bx < 0 || bx >= BOARD_WIDTH as i8 || by >= BOARD_HEIGHT as i8 {
            return true;
        }
        if by < 0 {
            return false;
        }
        board.is_occupied(bx, by)
    })
}

/// Whether `piece` collides at its own position
pub fn collides(board: &Board, piece: &Piece) -> bool {
    collides_at(board, piece, piece.x, piece.y)
}

/// Row the piece would come to rest on if dropped straight down from where it is.
///
/// The result is never above `piece.y`; the floor guarantees termination.
pub fn landing_y(board: &Board, piece: &Piece) -> i8 {
    let mut y = piece.y;
    while !collides_at(board, piece, piece.x, y + 1) {
        y += 1;
    }
    y
}

/// Ghost copy of `piece` at its landing row
pub fn project_ghost(board: &Board, piece: &Piece) -> Piece {
    piece.at(piece.x, landing_y(board, piece))
}
