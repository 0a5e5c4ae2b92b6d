
use std::{
    fmt,
    ops::{Index, IndexMut},
};

use ansi_term::Colour;
use serde::{Deserialize, Serialize};

use crate::{
    error::MoveError,
    piece::{Color, Piece, PieceKind},
    record::PositionRecord,
    rules::{self, Status},
    square::{Move, Square},
};

/// The 8x8 grid. Each cell holds at most one piece, and owns it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board(pub(crate) [[Option<Piece>; 8]; 8]);

impl Board {
    pub fn empty() -> Board { Board([[None; 8]; 8]) }

    /// Places `piece` on the square given by its own coordinates.
    pub fn place(&mut self, piece: Piece) {
        self.0[piece.row as usize][piece.col as usize] = Some(piece);
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.0.iter().flatten().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| Square::at(p.row, p.col))
    }

    /// Moves the piece on `mv.from` to `mv.to`, replacing it with a fresh
    /// promoted piece if `mv` carries a promotion. Returns whatever was
    /// captured. Does nothing if the source is empty.
    pub(crate) fn make_move(&mut self, mv: Move) -> Option<Piece> {
        let mut piece = self[mv.from].take()?;
        let captured = self[mv.to].take();
        piece = match mv.promotion {
            Some(kind) => Piece::new(piece.color, kind, mv.to.row, mv.to.col).promote(),
            None => Piece { moved: true, ..piece },
        };
        piece.row = mv.to.row;
        piece.col = mv.to.col;
        self[mv.to] = Some(piece);
        captured
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output { &self.0[sq.row as usize][sq.col as usize] }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self.0[sq.row as usize][sq.col as usize]
    }
}

/// Castling rights. They are tracked as pieces move but nothing in the rules
/// consumes them.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub fn all() -> CastlingRights {
        CastlingRights {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    fn clear(&mut self, color: Color, kingside: bool, queenside: bool) {
        let (k, q) = match color {
            Color::White => (&mut self.white_kingside, &mut self.white_queenside),
            Color::Black => (&mut self.black_kingside, &mut self.black_queenside),
        };
        *k &= !kingside;
        *q &= !queenside;
    }
}

/// How a finished game ended.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    Resigned { winner: Color },
    Drawn,
}

impl Outcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } | Outcome::Resigned { winner } => Some(winner),
            Outcome::Stalemate | Outcome::Drawn => None,
        }
    }

    pub fn is_draw(self) -> bool { self.winner().is_none() }
}

/// A full game state. Positions are values: every operation that changes
/// the game returns a new `Position` and leaves the receiver alone.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(into = "PositionRecord", try_from = "PositionRecord")]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    /// Pieces captured *by* each color, in capture order
    pub(crate) captured: [Vec<Piece>; 2],
    pub(crate) last_move: Option<Move>,
    pub(crate) castling: CastlingRights,
    pub(crate) outcome: Option<Outcome>,
}

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

impl Position {
    /// The standard starting setup, white to move.
    pub fn initial() -> Position {
        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                board.place(Piece::new(color, kind, color.back_rank(), col as u8));
                board.place(Piece::new(color, PieceKind::Pawn, color.pawn_rank(), col as u8));
            }
        }
        Position::from_board(board, Color::White)
    }

    /// A fresh, non-terminal position with the given pieces. Castling rights
    /// are all set; no moves or captures are recorded.
    pub fn from_board(board: Board, side_to_move: Color) -> Position {
        Position {
            board,
            side_to_move,
            captured: [Vec::new(), Vec::new()],
            last_move: None,
            castling: CastlingRights::all(),
            outcome: None,
        }
    }

    /// Builds a position from a list of pieces, each placed at its own
    /// coordinates.
    pub fn from_pieces(pieces: impl IntoIterator<Item = Piece>, side_to_move: Color) -> Position {
        let mut board = Board::empty();
        for piece in pieces {
            board.place(piece);
        }
        Position::from_board(board, side_to_move)
    }

    pub fn board(&self) -> &Board { &self.board }

    pub fn get_side_to_move(&self) -> Color { self.side_to_move }

    pub fn last_move(&self) -> Option<Move> { self.last_move }

    pub fn castling_rights(&self) -> CastlingRights { self.castling }

    pub fn outcome(&self) -> Option<Outcome> { self.outcome }

    pub fn is_finished(&self) -> bool { self.outcome.is_some() }

    /// The pieces `color` has taken from its opponent.
    pub fn captured_by(&self, color: Color) -> &[Piece] { &self.captured[color.to_index()] }

    /// True iff `mv` moves a pawn of the side to move onto that side's
    /// promotion rank.
    pub fn is_pawn_promotion(&self, mv: Move) -> bool {
        if !mv.is_on_board() {
            return false;
        }
        match self.board[mv.from] {
            Some(p) => {
                p.kind == PieceKind::Pawn
                    && p.color == self.side_to_move
                    && mv.to.row == p.color.promotion_rank()
            }
            None => false,
        }
    }

    /// Applies `mv` and returns the resulting position. Only the promotion
    /// contract is checked here; use [`rules::is_legal_move`] or
    /// [`Position::play`] for full validation.
    pub fn apply_move(&self, mv: Move) -> Result<Position, MoveError> {
        mv.from.check_on_board()?;
        mv.to.check_on_board()?;
        if self.board[mv.from].is_none() {
            return Err(MoveError::EmptySquare(mv.from));
        }
        match (self.is_pawn_promotion(mv), mv.promotion) {
            (true, None) => return Err(MoveError::PromotionRequired),
            (false, Some(_)) => return Err(MoveError::UnexpectedPromotion),
            (true, Some(kind)) if !kind.is_promotion_kind() => {
                return Err(MoveError::InvalidPromotion(kind))
            }
            _ => {}
        }
        let mut next = self.clone();
        next.make_move(mv);
        Ok(next)
    }

    /// Applies `mv` in place without any validation. Callers must have
    /// checked the move themselves.
    pub(crate) fn make_move(&mut self, mv: Move) {
        let Some(piece) = self.board[mv.from] else { return; };

        self.last_move = Some(mv);

        let home = piece.color.back_rank();
        match piece.kind {
            PieceKind::King => self.castling.clear(piece.color, true, true),
            PieceKind::Rook if mv.from.row == home && mv.from.col == 0 => {
                self.castling.clear(piece.color, false, true)
            }
            PieceKind::Rook if mv.from.row == home && mv.from.col == 7 => {
                self.castling.clear(piece.color, true, false)
            }
            _ => {}
        }

        if let Some(captured) = self.board.make_move(mv) {
            self.captured[piece.color.to_index()].push(captured);
        }

        self.side_to_move = !self.side_to_move;
    }

    /// Plays `mv` for the side to move: validates it completely, applies it
    /// and records a checkmate or stalemate if the game has ended.
    pub fn play(&self, mv: Move) -> Result<Position, MoveError> {
        if self.is_finished() {
            return Err(MoveError::GameOver);
        }
        mv.from.check_on_board()?;
        mv.to.check_on_board()?;
        let Some(piece) = self.board[mv.from] else {
            return Err(MoveError::EmptySquare(mv.from));
        };
        if piece.color != self.side_to_move {
            return Err(MoveError::NotYourPiece(mv.from));
        }
        if !rules::is_legal_move(self, mv) {
            return Err(MoveError::Illegal(mv));
        }

        let mut next = self.apply_move(mv)?;
        next.outcome = match rules::status(&next) {
            Status::Checkmate => Some(Outcome::Checkmate { winner: piece.color }),
            Status::Stalemate => Some(Outcome::Stalemate),
            Status::Ongoing | Status::Check => None,
        };
        Ok(next)
    }

    /// `color` resigns, handing the game to the other side.
    pub fn resign(&self, color: Color) -> Result<Position, MoveError> {
        self.conclude(Outcome::Resigned { winner: !color })
    }

    /// Both players agree to a draw.
    pub fn agree_draw(&self) -> Result<Position, MoveError> { self.conclude(Outcome::Drawn) }

    fn conclude(&self, outcome: Outcome) -> Result<Position, MoveError> {
        if self.is_finished() {
            return Err(MoveError::GameOver);
        }
        Ok(Position {
            outcome: Some(outcome),
            ..self.clone()
        })
    }
}

impl Index<Square> for Position {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output { &self.board[sq] }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let highlight = |sq: Square| {
            self.last_move
                .map_or(false, |m| m.from == sq || m.to == sq)
        };
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let sq = Square::at(row, col);
                let glyph = self.board[sq].map_or(' ', |p| p.glyph());
                let bg = if highlight(sq) {
                    Colour::Yellow
                } else if (row + col) % 2 == 0 {
                    Colour::White
                } else {
                    Colour::Green
                };
                write!(f, "{}", Colour::Black.on(bg).paint(format!("{} ", glyph)))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")?;
        match self.outcome {
            Some(Outcome::Checkmate { winner }) => write!(f, "checkmate, {} wins", winner),
            Some(Outcome::Resigned { winner }) => write!(f, "{} resigned, {} wins", !winner, winner),
            Some(Outcome::Stalemate) => write!(f, "stalemate"),
            Some(Outcome::Drawn) => write!(f, "drawn by agreement"),
            None => write!(f, "{} to move", self.side_to_move),
        }
    }
}
