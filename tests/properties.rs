//! Property tests for the rotation transform, line clearing and placement.
//!
//! Invariants covered:
//! - Four rotations in one direction restore any mask.
//! - A second `clear_full_rows` with nothing locked in between clears nothing.
//! - Surviving rows keep their order and content, packed at the bottom.
//! - Placement rejects any cell outside `[0, cols)`, above the grid or not.
use proptest::prelude::*;

use blockfall::core::{rotate, shape_of, Anchor, EngineConfig, GameState, Grid, Mask};
use blockfall::types::{Cell, PieceKind};

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    (0usize..7).prop_map(|i| PieceKind::ALL[i])
}

fn mask_strategy() -> impl Strategy<Value = Mask> {
    (1usize..=4, 1usize..=4)
        .prop_flat_map(|(w, h)| prop::collection::vec(prop::collection::vec(0u8..=7, w), h))
        .prop_map(|rows| Mask::from_rows(&rows).unwrap())
}

/// Grid with each cell filled with probability ~`density`%, some rows forced full.
fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1usize..=12, 1usize..=8)
        .prop_flat_map(|(rows, cols)| {
            (
                Just(rows),
                Just(cols),
                prop::collection::vec(0u8..100, rows * cols),
                prop::collection::vec(any::<bool>(), rows),
                50u8..100,
            )
        })
        .prop_map(|(rows, cols, rolls, force_full, density)| {
            let mut grid = Grid::new(rows, cols).unwrap();
            for row in 0..rows {
                for col in 0..cols {
                    let filled = force_full[row] || rolls[row * cols + col] < density;
                    if filled {
                        grid.set(row as i32, col as i32, Some(PieceKind::ALL[col % 7]));
                    }
                }
            }
            grid
        })
}

proptest! {
    #[test]
    fn four_rotations_restore_any_mask(mask in mask_strategy(), clockwise in any::<bool>()) {
        let mut m = mask.clone();
        for _ in 0..4 {
            m = rotate(&m, clockwise);
        }
        prop_assert_eq!(m, mask);
    }

    #[test]
    fn four_rotations_restore_every_shape(kind in kind_strategy(), clockwise in any::<bool>()) {
        let mask = shape_of(kind);
        let once = rotate(&mask, clockwise);
        prop_assert_eq!((once.width(), once.height()), (mask.height(), mask.width()));
        let back = rotate(&rotate(&rotate(&once, clockwise), clockwise), clockwise);
        prop_assert_eq!(back, mask);
    }

    #[test]
    fn second_clear_is_a_no_op(mut grid in grid_strategy()) {
        grid.clear_full_rows();
        let after = grid.clone();
        prop_assert_eq!(grid.clear_full_rows(), 0);
        prop_assert_eq!(grid, after);
    }

    #[test]
    fn clear_preserves_surviving_rows(mut grid in grid_strategy()) {
        let rows = grid.rows();
        let full = (0..rows).filter(|&r| grid.is_row_full(r)).count();
        let survivors: Vec<Vec<Cell>> = (0..rows)
            .filter(|&r| !grid.is_row_full(r))
            .map(|r| grid.row(r).to_vec())
            .collect();

        prop_assert_eq!(grid.clear_full_rows(), full);

        for (i, row) in survivors.iter().enumerate() {
            prop_assert_eq!(grid.row(full + i), row.as_slice());
        }
        for r in 0..full {
            prop_assert!(grid.row(r).iter().all(|c| c.is_none()));
        }
    }

    #[test]
    fn placement_enforces_horizontal_bounds(
        kind in kind_strategy(),
        rotations in 0usize..4,
        col in -6i32..16,
        row in -6i32..24,
    ) {
        let mut game = GameState::with_seed(EngineConfig::default(), 1).unwrap();
        game.start();

        let mut mask = shape_of(kind);
        for _ in 0..rotations {
            mask = rotate(&mask, true);
        }
        let anchor = Anchor::new(col, row);

        let expected = mask.occupied().all(|(x, y, _)| {
            let c = col + x as i32;
            let r = row + y as i32;
            (0..10).contains(&c) && r < 20
        });
        prop_assert_eq!(game.can_place(&mask, anchor), expected);
    }
}
