//! Piece catalog and rotation tests

use blockfall::core::{rotate, shape_of, Anchor, EngineConfig, GameState, Mask};
use blockfall::types::PieceKind;

fn rows(mask: &Mask) -> Vec<Vec<u8>> {
    mask.to_rows()
}

#[test]
fn test_canonical_shapes() {
    assert_eq!(rows(&shape_of(PieceKind::I)), vec![vec![1, 1, 1, 1]]);
    assert_eq!(rows(&shape_of(PieceKind::O)), vec![vec![2, 2], vec![2, 2]]);
    assert_eq!(rows(&shape_of(PieceKind::T)), vec![vec![0, 3, 0], vec![3, 3, 3]]);
    assert_eq!(rows(&shape_of(PieceKind::S)), vec![vec![4, 4, 0], vec![0, 4, 4]]);
    assert_eq!(rows(&shape_of(PieceKind::Z)), vec![vec![0, 5, 5], vec![5, 5, 0]]);
    assert_eq!(rows(&shape_of(PieceKind::J)), vec![vec![6, 0, 0], vec![6, 6, 6]]);
    assert_eq!(rows(&shape_of(PieceKind::L)), vec![vec![0, 0, 7], vec![7, 7, 7]]);
}

#[test]
fn test_rotation_swaps_dimensions() {
    for kind in PieceKind::ALL {
        let mask = shape_of(kind);
        for clockwise in [true, false] {
            let rotated = rotate(&mask, clockwise);
            assert_eq!(rotated.width(), mask.height(), "{:?}", kind);
            assert_eq!(rotated.height(), mask.width(), "{:?}", kind);
            assert_eq!(rotated.count(), 4);
        }
    }
}

#[test]
fn test_i_rotates_to_column() {
    let i = shape_of(PieceKind::I);
    let column = vec![vec![1], vec![1], vec![1], vec![1]];
    assert_eq!(rows(&rotate(&i, true)), column);
    assert_eq!(rows(&rotate(&i, false)), column);
    assert_eq!(rotate(&rotate(&i, true), true), i);
}

#[test]
fn test_o_rotation_is_identity() {
    let o = shape_of(PieceKind::O);
    assert_eq!(rotate(&o, true), o);
    assert_eq!(rotate(&o, false), o);
}

#[test]
fn test_t_rotation_index_mapping() {
    let t = shape_of(PieceKind::T);
    // new[x][R-1-y] = old[y][x]
    assert_eq!(rows(&rotate(&t, true)), vec![vec![3, 0], vec![3, 3], vec![3, 0]]);
    // new[C-1-x][y] = old[y][x]
    assert_eq!(rows(&rotate(&t, false)), vec![vec![0, 3], vec![3, 3], vec![0, 3]]);
}

#[test]
fn test_j_clockwise() {
    let j = shape_of(PieceKind::J);
    assert_eq!(rows(&rotate(&j, true)), vec![vec![6, 6], vec![6, 0], vec![6, 0]]);
}

#[test]
fn test_opposite_rotations_cancel() {
    for kind in PieceKind::ALL {
        let mask = shape_of(kind);
        assert_eq!(rotate(&rotate(&mask, true), false), mask, "{:?}", kind);
        assert_eq!(rotate(&rotate(&mask, false), true), mask, "{:?}", kind);
    }
}

#[test]
fn test_two_rotations_agree() {
    for kind in PieceKind::ALL {
        let mask = shape_of(kind);
        let cw = rotate(&rotate(&mask, true), true);
        let ccw = rotate(&rotate(&mask, false), false);
        assert_eq!(cw, ccw, "{:?}", kind);
    }
}

#[test]
fn test_mask_from_rows_validation() {
    assert!(Mask::from_rows(&[[0u8, 3, 0], [3, 3, 3]]).is_ok());
    assert!(Mask::from_rows::<[u8; 0]>(&[]).is_err());
    assert!(Mask::from_rows(&[vec![1u8, 1], vec![1]]).is_err());
    assert!(Mask::from_rows(&[[9u8]]).is_err());
}

#[test]
fn test_t_rotated_in_top_left_corner() {
    let mut game = GameState::with_seed(EngineConfig::default(), 5).unwrap();
    game.start();
    assert!(game.spawn_kind(PieceKind::T));
    while game.try_move(-1, 0) {}

    let piece = game.active().unwrap();
    assert_eq!(piece.anchor(), Anchor::new(0, 0));

    assert!(game.try_rotate(true));
    let piece = game.active().unwrap();
    assert_eq!(piece.anchor(), Anchor::new(0, 0));
    assert_eq!(
        piece.mask().to_rows(),
        vec![vec![3, 0], vec![3, 3], vec![3, 0]]
    );
}
