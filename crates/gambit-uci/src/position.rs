//! Game position as the GUI sees it, and its rotation into the engine's
//! frame.
//!
//! The engine's board is always oriented so the side to move advances
//! toward increasing row: with white to move `(row, col) = (rank, file)`,
//! with black to move the board is turned half a turn,
//! `(row, col) = (7 - rank, 7 - file)`. White is [`Color::First`].

use gambit_core::{Board, Color, Move, Piece, PieceKind, Square};

use crate::error::UciError;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement (indexed `rank * 8 + file`) plus side to move.
///
/// Castling rights, en passant target and move counters are not tracked:
/// UCI moves are applied as given, and castling or en passant are
/// recognised from the move itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    squares: [Option<Piece>; 64],
    side_to_move: Color,
}

/// Parse `"e4"` into `(file, rank)`.
fn parse_square(text: &str) -> Option<(u8, u8)> {
    let mut chars = text.chars();
    let file = chars.next()?;
    let rank = chars.next()?;
    if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }
    Some((file as u8 - b'a', rank as u8 - b'1'))
}

fn square_name(file: u8, rank: u8) -> String {
    format!("{}{}", (b'a' + file) as char, (b'1' + rank) as char)
}

impl Position {
    /// The standard starting position, white to move.
    pub fn startpos() -> Position {
        let mut position = Position {
            squares: [None; 64],
            side_to_move: Color::First,
        };
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            let file = file as u8;
            position.put(file, 0, Some(Piece::new(kind, Color::First)));
            position.put(file, 1, Some(Piece::new(PieceKind::Pawn, Color::First)));
            position.put(file, 6, Some(Piece::new(PieceKind::Pawn, Color::Second)));
            position.put(file, 7, Some(Piece::new(kind, Color::Second)));
        }
        position
    }

    /// Parse a FEN string. Only the placement and side-to-move fields are
    /// used; the remaining fields may be absent.
    pub fn from_fen(fen: &str) -> Result<Position, UciError> {
        let invalid = |reason| UciError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or_else(|| invalid("empty"))?;
        let side_to_move = match fields.next() {
            Some("w") => Color::First,
            Some("b") => Color::Second,
            Some(_) => return Err(invalid("side to move must be w or b")),
            None => return Err(invalid("missing side to move")),
        };

        let mut position = Position {
            squares: [None; 64],
            side_to_move,
        };
        position.load_placement(placement, fen)?;
        Ok(position)
    }

    fn load_placement(&mut self, placement: &str, fen: &str) -> Result<(), UciError> {
        let invalid = |reason| UciError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid("placement must have 8 ranks"));
        }
        for (i, rank_text) in ranks.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file: u8 = 0;
            for c in rank_text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as u8;
                } else {
                    let piece = Piece::from_letter(c).ok_or_else(|| invalid("unknown piece letter"))?;
                    if file >= 8 {
                        return Err(invalid("rank longer than 8 files"));
                    }
                    self.squares[rank as usize * 8 + file as usize] = Some(piece);
                    file += 1;
                }
                if file > 8 {
                    return Err(invalid("rank longer than 8 files"));
                }
            }
            if file != 8 {
                return Err(invalid("rank shorter than 8 files"));
            }
        }
        Ok(())
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Piece on `(file, rank)`, both zero-based.
    pub fn piece_on(&self, file: u8, rank: u8) -> Option<Piece> {
        if file < 8 && rank < 8 {
            self.squares[rank as usize * 8 + file as usize]
        } else {
            None
        }
    }

    fn take(&mut self, file: u8, rank: u8) -> Option<Piece> {
        self.squares[rank as usize * 8 + file as usize].take()
    }

    fn put(&mut self, file: u8, rank: u8, piece: Option<Piece>) {
        self.squares[rank as usize * 8 + file as usize] = piece;
    }

    /// Play a move in long algebraic notation (`e2e4`, `e7e8q`, `e1g1`).
    ///
    /// Legality is not checked. A king moving two files also moves the
    /// corner rook; a pawn moving diagonally onto an empty square removes
    /// the pawn it passed; a pawn reaching the last rank without a suffix
    /// becomes a queen.
    pub fn apply_uci(&mut self, text: &str) -> Result<(), UciError> {
        let invalid = || UciError::InvalidMove {
            uci_move: text.to_string(),
        };
        if !(4..=5).contains(&text.len()) || !text.is_ascii() {
            return Err(invalid());
        }
        let (from_file, from_rank) = parse_square(&text[0..2]).ok_or_else(invalid)?;
        let (to_file, to_rank) = parse_square(&text[2..4]).ok_or_else(invalid)?;
        let promotion = match text[4..].chars().next() {
            Some(c) => Some(
                PieceKind::from_letter(c.to_ascii_lowercase())
                    .filter(|k| !matches!(k, PieceKind::Pawn | PieceKind::King))
                    .ok_or_else(invalid)?,
            ),
            None => None,
        };

        let piece = self.take(from_file, from_rank).ok_or_else(invalid)?;
        let target_empty = self.piece_on(to_file, to_rank).is_none();

        match piece.kind() {
            PieceKind::King if from_file.abs_diff(to_file) == 2 => {
                let (rook_from, rook_to) = if to_file > from_file { (7, 5) } else { (0, 3) };
                let rook = self.take(rook_from, from_rank);
                self.put(rook_to, from_rank, rook);
            }
            PieceKind::Pawn if from_file != to_file && target_empty => {
                self.put(to_file, from_rank, None);
            }
            _ => {}
        }

        let last_rank = match piece.color() {
            Color::First => 7,
            Color::Second => 0,
        };
        let placed = match promotion {
            Some(kind) => Piece::new(kind, piece.color()),
            None if piece.kind() == PieceKind::Pawn && to_rank == last_rank => {
                Piece::new(PieceKind::Queen, piece.color())
            }
            None => piece,
        };
        self.put(to_file, to_rank, Some(placed));
        self.side_to_move = !self.side_to_move;
        Ok(())
    }

    /// Map `(file, rank)` to the engine's `(row, col)` for the side to move.
    fn to_engine(&self, file: u8, rank: u8) -> Square {
        match self.side_to_move {
            Color::First => Square::new(rank, file),
            Color::Second => Square::new(7 - rank, 7 - file),
        }
    }

    /// Inverse of [`to_engine`](Self::to_engine), as `(file, rank)`.
    fn from_engine(&self, sq: Square) -> (u8, u8) {
        match self.side_to_move {
            Color::First => (sq.col(), sq.row()),
            Color::Second => (7 - sq.col(), 7 - sq.row()),
        }
    }

    /// The engine board, rotated so the side to move advances toward
    /// increasing row.
    pub fn to_engine_board(&self) -> Board {
        let mut board = Board::new();
        for rank in 0..8 {
            for file in 0..8 {
                if let Some(piece) = self.piece_on(file, rank) {
                    board.put(self.to_engine(file, rank), piece);
                }
            }
        }
        board
    }

    /// Express an engine move in long algebraic notation, adding a `q`
    /// suffix when a pawn reaches its last rank.
    pub fn move_to_uci(&self, mv: Move) -> String {
        let (from_file, from_rank) = self.from_engine(mv.from());
        let (to_file, to_rank) = self.from_engine(mv.to());
        let mut text = square_name(from_file, from_rank);
        text.push_str(&square_name(to_file, to_rank));

        if let Some(piece) = self.piece_on(from_file, from_rank) {
            let last_rank = match piece.color() {
                Color::First => 7,
                Color::Second => 0,
            };
            if piece.kind() == PieceKind::Pawn && to_rank == last_rank {
                text.push('q');
            }
        }
        text
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}
