//! Pieces module - the seven canonical tetromino shapes
//!
//! Each kind has one canonical (spawn) orientation, stored as rows of kind ids.
//! Other orientations are produced on demand by [`crate::rotate`].

use rand::Rng;

use crate::mask::Mask;
use crate::types::PieceKind;

const I_SHAPE: &[&[u8]] = &[&[1, 1, 1, 1]];
const O_SHAPE: &[&[u8]] = &[&[2, 2], &[2, 2]];
const T_SHAPE: &[&[u8]] = &[&[0, 3, 0], &[3, 3, 3]];
const S_SHAPE: &[&[u8]] = &[&[4, 4, 0], &[0, 4, 4]];
const Z_SHAPE: &[&[u8]] = &[&[0, 5, 5], &[5, 5, 0]];
const J_SHAPE: &[&[u8]] = &[&[6, 0, 0], &[6, 6, 6]];
const L_SHAPE: &[&[u8]] = &[&[0, 0, 7], &[7, 7, 7]];

/// Canonical shape rows for a kind (nonzero = occupied, value = kind id).
pub fn shape_rows(kind: PieceKind) -> &'static [&'static [u8]] {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Get the canonical mask for a piece kind.
pub fn shape_of(kind: PieceKind) -> Mask {
    Mask::from_shape(kind, shape_rows(kind))
}

/// Pick a kind uniformly at random from the caller's entropy source.
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
}
