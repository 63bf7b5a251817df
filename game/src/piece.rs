//! Shape and color catalogs, rotation, and the falling piece.

use std::ops::Add;

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    pub const ZERO: Vec2i = Vec2i { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2i {
    type Output = Vec2i;

    fn add(self, rhs: Vec2i) -> Self::Output {
        Vec2i::new(self.x + rhs.x, self.y + rhs.y)
    }
}

pub type Rgb = [u8; 3];

/// Piece colors. Chosen independently of the shape; board cells store `index + 1`.
pub const PIECE_COLORS: [Rgb; 5] = [
    [255, 80, 80],
    [80, 255, 80],
    [80, 80, 255],
    [255, 255, 80],
    [255, 80, 255],
];

const SHAPE_I: &[&[u8]] = &[&[1, 1, 1, 1]];
const SHAPE_O: &[&[u8]] = &[&[1, 1], &[1, 1]];
const SHAPE_T: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1]];
const SHAPE_J: &[&[u8]] = &[&[1, 0, 0], &[1, 1, 1]];
const SHAPE_L: &[&[u8]] = &[&[0, 0, 1], &[1, 1, 1]];

pub const SHAPE_CATALOG: [&[&[u8]]; 5] = [SHAPE_I, SHAPE_O, SHAPE_T, SHAPE_J, SHAPE_L];

/// Every piece enters the board with its top-left matrix cell here.
pub const SPAWN_ORIGIN: Vec2i = Vec2i::new(4, 0);

/// An immutable boolean matrix, stored row-major. Row 0 is the top row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Shape {
    /// Builds a shape from rows of 0/1. Rows shorter than the first are padded empty.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut cells = vec![false; width * height];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().take(width).enumerate() {
                cells[y * width + x] = v != 0;
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn catalog(index: usize) -> Option<Self> {
        SHAPE_CATALOG.get(index).map(|rows| Self::from_rows(rows))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        col < self.width && row < self.height && self.cells[row * self.width + col]
    }

    /// `(col, row)` of every filled cell, relative to the matrix origin.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(|(i, _)| (i % self.width, i / self.width))
    }

    /// Returns a copy turned 90 degrees counter-clockwise.
    ///
    /// The rightmost column becomes the top row: `new[i][j] = old[j][w - 1 - i]`.
    pub fn rotated(&self) -> Shape {
        let (new_w, new_h) = (self.height, self.width);
        let mut cells = vec![false; self.cells.len()];
        for i in 0..new_h {
            for j in 0..new_w {
                cells[i * new_w + j] = self.is_filled(self.width - 1 - i, j);
            }
        }
        Shape {
            width: new_w,
            height: new_h,
            cells,
        }
    }
}

/// Picks a uniformly random shape and, independently, a uniformly random color index.
pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> (Shape, usize) {
    let shape_index = rng.gen_range(0..SHAPE_CATALOG.len());
    let color_index = rng.gen_range(0..PIECE_COLORS.len());
    (Shape::from_rows(SHAPE_CATALOG[shape_index]), color_index)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePiece {
    pub shape: Shape,
    pub origin: Vec2i,
    pub color: usize,
}

impl ActivePiece {
    pub fn new(shape: Shape, color: usize) -> Self {
        Self {
            shape,
            origin: SPAWN_ORIGIN,
            color,
        }
    }

    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let (shape, color) = spawn(rng);
        Self::new(shape, color)
    }

    /// Absolute board positions of the filled cells.
    pub fn cells(&self) -> impl Iterator<Item = Vec2i> + '_ {
        let origin = self.origin;
        self.shape
            .filled_cells()
            .map(move |(x, y)| origin + Vec2i::new(x as i32, y as i32))
    }

    pub fn rgb(&self) -> Rgb {
        PIECE_COLORS[self.color % PIECE_COLORS.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotating_the_bar_stands_it_up() {
        let bar = Shape::catalog(0).unwrap();
        let upright = bar.rotated();
        assert_eq!((upright.width(), upright.height()), (1, 4));
        assert_eq!(upright.filled_cells().count(), 4);
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        // T pointing up turns to point left.
        let t = Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]);
        let expected = Shape::from_rows(&[&[0, 1], &[1, 1], &[0, 1]]);
        assert_eq!(t.rotated(), expected);
    }

    #[test]
    fn short_rows_are_padded_empty() {
        let s = Shape::from_rows(&[&[1, 1, 1], &[1]]);
        assert!(s.is_filled(0, 1));
        assert!(!s.is_filled(2, 1));
    }

    #[test]
    fn piece_cells_are_offset_by_origin() {
        let mut piece = ActivePiece::new(Shape::catalog(1).unwrap(), 0);
        piece.origin = Vec2i::new(2, 3);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(
            cells,
            vec![
                Vec2i::new(2, 3),
                Vec2i::new(3, 3),
                Vec2i::new(2, 4),
                Vec2i::new(3, 4),
            ]
        );
    }
}
