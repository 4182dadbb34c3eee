//! Game phase calculation based on remaining non-pawn material.

use gambit_core::{Board, PieceKind};

/// Phase value of a full starting complement of non-pawn material.
///
/// Weights: Knight=1, Bishop=1, Rook=2, Queen=4.
/// Starting totals: 4×1 + 4×1 + 4×2 + 2×4 = 24.
pub const MAX_PHASE: i32 = 24;

const fn phase_weight(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Knight | PieceKind::Bishop => 1,
        PieceKind::Rook => 2,
        PieceKind::Queen => 4,
        PieceKind::Pawn | PieceKind::King => 0,
    }
}

/// Game phase from non-pawn, non-king material of both colors.
///
/// Returns a value in `0..=MAX_PHASE`: [`MAX_PHASE`] is a full middlegame
/// set, 0 a pure king-and-pawn ending. Promoted pieces cannot push the
/// phase above the maximum.
pub fn game_phase(board: &Board) -> i32 {
    let phase: i32 = board.pieces().map(|(_, p)| phase_weight(p.kind())).sum();
    phase.min(MAX_PHASE)
}
