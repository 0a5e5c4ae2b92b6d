
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{error::MoveError, piece::PieceKind};

/// A square on the board. Row 0 is black's back rank and row 7 is white's;
/// column 0 is the a-file.
///
/// The fields are public, so a `Square` can be built off the board by hand.
/// The rules treat such squares as unreachable rather than panicking.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

#[derive(Deserialize)]
struct RawSquare {
    row: u8,
    col: u8,
}

impl TryFrom<RawSquare> for Square {
    type Error = MoveError;

    fn try_from(raw: RawSquare) -> Result<Square, MoveError> {
        Square::new(raw.row as usize, raw.col as usize)
            .ok_or(MoveError::OffBoard(raw.row as usize, raw.col as usize))
    }
}

impl Square {
    /// Returns `None` if the coordinates are off the board.
    pub fn new(row: usize, col: usize) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    pub fn is_on_board(self) -> bool { self.row < 8 && self.col < 8 }

    pub(crate) fn check_on_board(self) -> Result<Square, MoveError> {
        if self.is_on_board() {
            Ok(self)
        } else {
            Err(MoveError::OffBoard(self.row as usize, self.col as usize))
        }
    }

    pub(crate) const fn at(row: u8, col: u8) -> Square { Square { row, col } }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square::at(row, col)))
    }

    /// The square offset by `(d_row, d_col)`, if it is still on the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::at(row as u8, col as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, 8 - self.row)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub from: Square,
    pub to: Square,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Move { Move { from, to, promotion: None } }

    pub fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Move {
        Move { from, to, promotion: Some(kind) }
    }

    pub fn is_on_board(&self) -> bool { self.from.is_on_board() && self.to.is_on_board() }

    pub(crate) fn d_row(&self) -> i8 { self.to.row as i8 - self.from.row as i8 }

    pub(crate) fn d_col(&self) -> i8 { self.to.col as i8 - self.from.col as i8 }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind)?;
        }
        Ok(())
    }
}
