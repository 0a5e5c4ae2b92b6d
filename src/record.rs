
use serde::{Deserialize, Serialize};

use crate::{
    error::RecordError,
    piece::{Color, Piece, PieceKind, ALL_COLORS},
    position::{Board, CastlingRights, Outcome, Position},
    rules::{self, Status},
    square::Move,
};

/// The shape a position takes when it is stored or sent over the wire.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    pub board: Vec<Vec<Option<Piece>>>,
    pub current_player: Color,
    pub captured_whites: Vec<Piece>,
    pub captured_blacks: Vec<Piece>,
    pub white_king_side_moved: bool,
    pub white_queen_side_moved: bool,
    pub black_king_side_moved: bool,
    pub black_queen_side_moved: bool,
    pub finished: bool,
    pub winner: Option<Color>,
    pub draw: bool,
    pub resign: Option<Color>,
    #[serde(default)]
    pub last_move: Option<Move>,
    /// Set alongside `draw`: whether the draw was a stalemate rather than an
    /// agreement. Records without it are judged from the board.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stalemate: Option<bool>,
}

impl From<Position> for PositionRecord {
    fn from(pos: Position) -> PositionRecord {
        let outcome = pos.outcome;
        let [by_white, by_black] = pos.captured;
        PositionRecord {
            board: pos.board.0.iter().map(|row| row.to_vec()).collect(),
            current_player: pos.side_to_move,
            captured_whites: by_black,
            captured_blacks: by_white,
            white_king_side_moved: !pos.castling.white_kingside,
            white_queen_side_moved: !pos.castling.white_queenside,
            black_king_side_moved: !pos.castling.black_kingside,
            black_queen_side_moved: !pos.castling.black_queenside,
            finished: outcome.is_some(),
            winner: outcome.and_then(Outcome::winner),
            draw: outcome.map_or(false, Outcome::is_draw),
            resign: match outcome {
                Some(Outcome::Resigned { winner }) => Some(!winner),
                _ => None,
            },
            last_move: pos.last_move,
            stalemate: match outcome {
                Some(Outcome::Stalemate) => Some(true),
                Some(Outcome::Drawn) => Some(false),
                _ => None,
            },
        }
    }
}

impl TryFrom<PositionRecord> for Position {
    type Error = RecordError;

    fn try_from(record: PositionRecord) -> Result<Position, RecordError> {
        if record.board.len() != 8 || record.board.iter().any(|row| row.len() != 8) {
            return Err(RecordError::BoardShape);
        }

        let mut board = Board::empty();
        for (row, cells) in record.board.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let Some(piece) = cell else { continue; };
                if (piece.row as usize, piece.col as usize) != (row, col) {
                    return Err(RecordError::PieceCoordinateMismatch {
                        row,
                        col,
                        claimed_row: piece.row,
                        claimed_col: piece.col,
                    });
                }
                board.place(*piece);
            }
        }

        for color in ALL_COLORS {
            let count = board
                .pieces_of(color)
                .filter(|p| p.kind == PieceKind::King)
                .count();
            if count != 1 {
                return Err(RecordError::KingCount { color, count });
            }
        }

        let mut pos = Position {
            board,
            side_to_move: record.current_player,
            captured: [record.captured_blacks, record.captured_whites],
            last_move: record.last_move,
            castling: CastlingRights {
                white_kingside: !record.white_king_side_moved,
                white_queenside: !record.white_queen_side_moved,
                black_kingside: !record.black_king_side_moved,
                black_queenside: !record.black_queen_side_moved,
            },
            outcome: None,
        };

        if record.finished {
            let stalemate = record
                .stalemate
                .unwrap_or_else(|| rules::status(&pos) == Status::Stalemate);
            pos.outcome = Some(match (record.resign, record.winner) {
                (Some(loser), _) => Outcome::Resigned { winner: !loser },
                (None, Some(winner)) => Outcome::Checkmate { winner },
                (None, None) if stalemate => Outcome::Stalemate,
                (None, None) => Outcome::Drawn,
            });
        }

        Ok(pos)
    }
}

impl Position {
    pub fn to_json(&self) -> Result<String, RecordError> { Ok(serde_json::to_string(self)?) }

    /// Unlike going through `Deserialize`, this keeps the reason a record
    /// was rejected.
    pub fn from_json(json: &str) -> Result<Position, RecordError> {
        let record: PositionRecord = serde_json::from_str(json)?;
        Position::try_from(record)
    }
}
