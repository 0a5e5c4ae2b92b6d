
use thiserror::Error;

use crate::{
    piece::{Color, PieceKind},
    square::{Move, Square},
};

/// Why a move request was turned down. A rejected request never changes
/// the position it was made against.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("coordinates ({0}, {1}) are off the board")]
    OffBoard(usize, usize),
    #[error("there is no piece on {0}")]
    EmptySquare(Square),
    #[error("the piece on {0} does not belong to the side to move")]
    NotYourPiece(Square),
    #[error("{0} is not a legal move")]
    Illegal(Move),
    #[error("a pawn reaching the last rank must name a promotion")]
    PromotionRequired,
    #[error("only a pawn reaching the last rank may promote")]
    UnexpectedPromotion,
    #[error("a pawn cannot promote to a {0}")]
    InvalidPromotion(PieceKind),
    #[error("the game is already over")]
    GameOver,
}

/// Why a serialized position could not be loaded.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("malformed position record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("piece stored at ({row}, {col}) claims to stand on ({claimed_row}, {claimed_col})")]
    PieceCoordinateMismatch {
        row: usize,
        col: usize,
        claimed_row: u8,
        claimed_col: u8,
    },
    #[error("{color} has {count} kings on the board")]
    KingCount { color: Color, count: usize },
    #[error("the board must have 8 rows of 8 cells")]
    BoardShape,
}
