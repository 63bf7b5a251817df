use std::collections::HashSet;

use game::piece::{ActivePiece, PIECE_COLORS, SHAPE_CATALOG, SPAWN_ORIGIN, Shape, spawn};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn four_rotations_are_identity() {
    for rows in SHAPE_CATALOG {
        let shape = Shape::from_rows(rows);
        let spun = shape.rotated().rotated().rotated().rotated();
        assert_eq!(spun, shape);
    }
}

#[test]
fn rotation_swaps_dimensions_and_keeps_cell_count() {
    for rows in SHAPE_CATALOG {
        let shape = Shape::from_rows(rows);
        let turned = shape.rotated();
        assert_eq!(turned.width(), shape.height());
        assert_eq!(turned.height(), shape.width());
        assert_eq!(turned.filled_cells().count(), shape.filled_cells().count());
    }
}

#[test]
fn rotation_does_not_touch_the_original() {
    let shape = Shape::catalog(3).unwrap();
    let copy = shape.clone();
    let _ = shape.rotated();
    assert_eq!(shape, copy);
}

#[test]
fn catalog_holds_only_tetrominoes() {
    for rows in SHAPE_CATALOG {
        assert_eq!(Shape::from_rows(rows).filled_cells().count(), 4);
    }
    assert!(Shape::catalog(SHAPE_CATALOG.len()).is_none());
}

#[test]
fn spawn_covers_every_shape_color_pair() {
    let mut rng = StdRng::seed_from_u64(11);
    let catalog: Vec<Shape> = SHAPE_CATALOG.iter().map(|r| Shape::from_rows(r)).collect();

    let mut seen = HashSet::new();
    for _ in 0..2_000 {
        let (shape, color) = spawn(&mut rng);
        assert!(color < PIECE_COLORS.len());
        let shape_index = catalog
            .iter()
            .position(|s| *s == shape)
            .expect("spawned shape comes from the catalog");
        seen.insert((shape_index, color));
    }

    // Shape and color are drawn independently, so every combination shows up.
    assert_eq!(seen.len(), SHAPE_CATALOG.len() * PIECE_COLORS.len());
}

#[test]
fn spawned_piece_starts_at_spawn_origin() {
    let mut rng = StdRng::seed_from_u64(3);
    let piece = ActivePiece::spawn(&mut rng);
    assert_eq!(piece.origin, SPAWN_ORIGIN);
    assert_eq!(piece.rgb(), PIECE_COLORS[piece.color]);
}

#[test]
fn same_seed_spawns_same_sequence() {
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        assert_eq!(spawn(&mut a), spawn(&mut b));
    }
}
