//! Board module - manages the game grid
//!
//! The board is a 12x22 grid where each cell is either empty or filled with a block color.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..11 (left to right), y ranges 0..21 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{BlockColor, Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// A bounded list of row indices (never more rows than the board has)
pub type RowList = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 12 columns x 22 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if !Self::is_inside_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Index for a coordinate the caller guarantees to be on the board.
    ///
    /// An off-board coordinate here is a logic error in the engine, not a
    /// recoverable condition.
    #[track_caller]
    fn checked_index(x: i8, y: i8) -> usize {
        match Self::index(x, y) {
            Some(idx) => idx,
            None => panic!(
                "board coordinate ({x}, {y}) out of range {}x{}",
                BOARD_WIDTH, BOARD_HEIGHT
            ),
        }
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Whether (x, y) names a cell of the grid
    pub fn is_inside_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if the cell at (x, y) holds a block.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the grid. Callers bounds-check first.
    #[track_caller]
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.cells[Self::checked_index(x, y)].is_some()
    }

    /// Fill the cell at (x, y) with a block of `color`.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the grid.
    #[track_caller]
    pub fn set_cell(&mut self, x: i8, y: i8, color: BlockColor) {
        self.cells[Self::checked_index(x, y)] = Some(color);
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Empty every cell of row `y` without moving other rows
    pub fn clear_row(&mut self, y: usize) {
        if y >= BOARD_HEIGHT as usize {
            return;
        }
        let start = y * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize].fill(None);
    }

    /// Indices of all full rows, scanned from the bottom row upwards
    pub fn full_rows(&self) -> RowList {
        (0..BOARD_HEIGHT as usize)
            .rev()
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Remove `rows` and let everything above fall into the gaps.
    ///
    /// Each kept row moves down by the number of removed rows below it; the freed
    /// rows at the top come back empty. The order of the rows passed in does not
    /// matter, indices outside the board are ignored. Uses a two-pointer pass with
    /// zero allocation.
    ///
    /// Returns the number of rows removed.
    pub fn compact_after_removing(&mut self, rows: &[usize]) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if rows.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                let dst_start = write_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, dst_start);
            }
        }

        // Whatever is left at the top is fresh, empty space
        for y in 0..write_y {
            self.clear_row(y);
        }

        write_y
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells on the whole board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Copy the grid into a row-major 2D array (for snapshots)
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (y, dst) in out.iter_mut().enumerate() {
            let start = y * BOARD_WIDTH as usize;
            dst.copy_from_slice(&self.cells[start..start + BOARD_WIDTH as usize]);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i8, color: BlockColor) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set_cell(x, y, color);
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(11, 0), Some(11));
        assert_eq!(Board::index(0, 1), Some(12));
        assert_eq!(Board::index(11, 21), Some(263));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(12, 0), None);
        assert_eq!(Board::index(0, 22), None);
    }

    #[test]
    fn test_set_cell_and_is_occupied() {
        let mut board = Board::new();
        assert!(!board.is_occupied(5, 10));

        board.set_cell(5, 10, BlockColor::Magenta);
        assert!(board.is_occupied(5, 10));
        assert_eq!(board.get(5, 10), Some(Some(BlockColor::Magenta)));
        assert_eq!(board.cells[10 * 12 + 5], Some(BlockColor::Magenta));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_is_occupied_out_of_range_panics() {
        let board = Board::new();
        board.is_occupied(12, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_cell_out_of_range_panics() {
        let mut board = Board::new();
        board.set_cell(0, -1, BlockColor::Red);
    }

    #[test]
    fn test_clear_row_does_not_shift() {
        let mut board = Board::new();
        fill_row(&mut board, 21, BlockColor::Blue);
        board.set_cell(3, 20, BlockColor::Red);

        board.clear_row(21);

        assert!(board.row(21).unwrap().iter().all(|c| c.is_none()));
        assert!(board.is_occupied(3, 20));
    }

    #[test]
    fn test_full_rows_scan_bottom_up() {
        let mut board = Board::new();
        fill_row(&mut board, 21, BlockColor::Cyan);
        fill_row(&mut board, 19, BlockColor::Cyan);
        board.set_cell(0, 20, BlockColor::Cyan);

        assert_eq!(board.full_rows().as_slice(), &[21, 19]);
    }

    #[test]
    fn test_compact_non_adjacent_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 21, BlockColor::Cyan);
        board.set_cell(1, 20, BlockColor::Red);
        fill_row(&mut board, 19, BlockColor::Cyan);
        board.set_cell(2, 18, BlockColor::Green);

        let removed = board.compact_after_removing(&[19, 21]);

        assert_eq!(removed, 2);
        assert_eq!(board.get(1, 21), Some(Some(BlockColor::Red)));
        assert_eq!(board.get(2, 20), Some(Some(BlockColor::Green)));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_compact_adjacent_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 21, BlockColor::Cyan);
        fill_row(&mut board, 20, BlockColor::Cyan);
        board.set_cell(4, 19, BlockColor::Orange);

        board.compact_after_removing(&[21, 20]);

        assert_eq!(board.get(4, 21), Some(Some(BlockColor::Orange)));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_compact_ignores_out_of_range_rows() {
        let mut board = Board::new();
        board.set_cell(0, 21, BlockColor::Red);
        let before = board.clone();

        assert_eq!(board.compact_after_removing(&[22, 100]), 0);
        assert_eq!(board, before);
    }
}
