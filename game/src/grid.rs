use serde::{Deserialize, Serialize};

use crate::piece::{Shape, Vec2i};

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

pub const CELL_EMPTY: u8 = 0;

pub type Row = [u8; BOARD_WIDTH];

/// The settled blocks. Each cell is `CELL_EMPTY` or `color_index + 1`.
/// Row 0 is the top of the well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Row; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[CELL_EMPTY; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    pub fn from_rows(cells: [Row; BOARD_HEIGHT]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[Row; BOARD_HEIGHT] {
        &self.cells
    }

    /// Returns `CELL_EMPTY` for positions outside the board.
    pub fn cell(&self, col: usize, row: usize) -> u8 {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(CELL_EMPTY)
    }

    pub fn set_cell(&mut self, col: usize, row: usize, value: u8) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = value;
        }
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        self.cells
            .get(row)
            .is_some_and(|r| r.iter().all(|&c| c != CELL_EMPTY))
    }

    pub fn filled_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c != CELL_EMPTY)
            .count()
    }

    /// True if `shape` placed at `origin` leaves the well through a side or the floor, or
    /// overlaps a settled block. Cells above the top edge (negative rows) are allowed.
    pub fn collides(&self, shape: &Shape, origin: Vec2i) -> bool {
        shape.filled_cells().any(|(dx, dy)| {
            let x = origin.x + dx as i32;
            let y = origin.y + dy as i32;

            if x < 0 || x >= BOARD_WIDTH as i32 || y >= BOARD_HEIGHT as i32 {
                return true;
            }
            y >= 0 && self.cells[y as usize][x as usize] != CELL_EMPTY
        })
    }

    /// Writes `color_index + 1` into every cell covered by `shape` at `origin`.
    ///
    /// Callers check `collides` first; cells that fall outside the board are dropped.
    pub fn lock(&mut self, shape: &Shape, origin: Vec2i, color_index: usize) {
        let value = u8::try_from(color_index + 1).unwrap_or(u8::MAX);
        for (dx, dy) in shape.filled_cells() {
            let x = origin.x + dx as i32;
            let y = origin.y + dy as i32;
            if x < 0 || y < 0 {
                continue;
            }
            self.set_cell(x as usize, y as usize, value);
        }
    }

    /// Removes every full row, lets the rest settle to the bottom in their original order,
    /// and refills the top with empty rows. Returns how many rows were removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut write = BOARD_HEIGHT;
        for read in (0..BOARD_HEIGHT).rev() {
            if self.is_row_full(read) {
                continue;
            }
            write -= 1;
            if write != read {
                self.cells[write] = self.cells[read];
            }
        }

        for row in &mut self.cells[..write] {
            *row = [CELL_EMPTY; BOARD_WIDTH];
        }
        write
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_reads_outside_board_as_empty() {
        let board = Board::new();
        assert_eq!(board.cell(BOARD_WIDTH, 0), CELL_EMPTY);
        assert_eq!(board.cell(0, BOARD_HEIGHT), CELL_EMPTY);
    }

    #[test]
    fn lock_skips_cells_above_the_top() {
        let mut board = Board::new();
        let bar = Shape::from_rows(&[&[1], &[1], &[1], &[1]]);
        board.lock(&bar, Vec2i::new(0, -2), 0);

        assert_eq!(board.filled_cells(), 2);
        assert_eq!(board.cell(0, 0), 1);
        assert_eq!(board.cell(0, 1), 1);
    }

    #[test]
    fn clear_with_no_full_rows_is_a_no_op() {
        let mut board = Board::new();
        board.set_cell(3, 19, 2);
        let before = board.clone();

        assert_eq!(board.clear_full_rows(), 0);
        assert_eq!(board, before);
    }
}
