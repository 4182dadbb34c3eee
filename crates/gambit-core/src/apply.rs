//! Move application via copy-make.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::{Piece, PieceKind};

impl Board {
    /// Return the board after playing `mv`; `self` is left untouched.
    ///
    /// The origin is cleared and its contents written to the destination,
    /// replacing any occupant. A pawn landing on row 0 or the last row is
    /// promoted to a queen of the same color. Moves are not validated.
    pub fn apply(&self, mv: Move) -> Board {
        let mut next = *self;
        let moving = next.piece_at(mv.from()).map(|piece| {
            let last_row = self.height() - 1;
            let to_row = mv.to().row();
            if piece.kind() == PieceKind::Pawn && (to_row == 0 || to_row == last_row) {
                Piece::new(PieceKind::Queen, piece.color())
            } else {
                piece
            }
        });
        next.set(mv.from(), None);
        next.set(mv.to(), moving);
        next
    }

    /// Return `true` if `mv` lands on a piece of the other color.
    pub fn is_capture(&self, mv: Move) -> bool {
        match (self.piece_at(mv.from()), self.piece_at(mv.to())) {
            (Some(mover), Some(victim)) => mover.color() != victim.color(),
            _ => false,
        }
    }

    /// Return `true` if `mv` moves a pawn onto row 0 or the last row.
    pub fn is_promotion(&self, mv: Move) -> bool {
        let to_row = mv.to().row();
        self.piece_at(mv.from())
            .is_some_and(|p| p.kind() == PieceKind::Pawn)
            && (to_row == 0 || to_row == self.height() - 1)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::piece::{Piece, PieceKind};
    use crate::square::Square;

    fn mv(fr: u8, fc: u8, tr: u8, tc: u8) -> Move {
        Move::new(Square::new(fr, fc), Square::new(tr, tc))
    }

    #[test]
    fn quiet_move_keeps_piece_count() {
        let board: Board = "4K3/8/8/3N4/8/8/8/4k3".parse().unwrap();
        let next = board.apply(mv(3, 3, 5, 4));
        assert_eq!(next.piece_count(), board.piece_count());
        assert_eq!(next.piece_at(Square::new(3, 3)), None);
        assert_eq!(
            next.piece_at(Square::new(5, 4)),
            Some(Piece::new(PieceKind::Knight, Color::First))
        );
    }

    #[test]
    fn capture_removes_exactly_one_piece() {
        let board: Board = "4K3/8/8/3R2q1/8/8/8/4k3".parse().unwrap();
        let capture = mv(3, 3, 3, 6);
        assert!(board.is_capture(capture));
        let next = board.apply(capture);
        assert_eq!(next.piece_count(), board.piece_count() - 1);
        assert_eq!(
            next.piece_at(Square::new(3, 6)),
            Some(Piece::new(PieceKind::Rook, Color::First))
        );
    }

    #[test]
    fn input_board_is_not_mutated() {
        let board: Board = "4K3/4P3/8/8/8/8/8/4k3".parse().unwrap();
        let before = board;
        let _ = board.apply(mv(1, 4, 2, 4));
        assert_eq!(board, before);
    }

    #[test]
    fn pawn_promotes_on_last_row() {
        let board: Board = "8/8/8/8/8/8/P7/8".parse().unwrap();
        let next = board.apply(mv(6, 0, 7, 0));
        assert_eq!(
            next.piece_at(Square::new(7, 0)),
            Some(Piece::new(PieceKind::Queen, Color::First))
        );
    }

    #[test]
    fn pawn_promotes_on_row_zero() {
        let board: Board = "8/p7/8/8/8/8/8/8".parse().unwrap();
        assert!(board.is_promotion(mv(1, 0, 0, 0)));
        let next = board.apply(mv(1, 0, 0, 0));
        assert_eq!(
            next.piece_at(Square::new(0, 0)),
            Some(Piece::new(PieceKind::Queen, Color::Second))
        );
    }

    #[test]
    fn hash_matches_fresh_parse() {
        let board: Board = "4K3/8/8/3N4/8/8/8/4k3".parse().unwrap();
        let next = board.apply(mv(3, 3, 5, 4));
        let expected: Board = "4K3/8/8/8/8/4N3/8/4k3".parse().unwrap();
        assert_eq!(next.hash(), expected.hash());
    }

    #[test]
    fn own_piece_on_destination_is_not_a_capture() {
        let board: Board = "RR6/8/8/8/8/8/8/8".parse().unwrap();
        assert!(!board.is_capture(mv(0, 0, 0, 1)));
    }
}
