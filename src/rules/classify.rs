
use super::{legality::has_legal_move, threats::is_square_attacked};
use crate::position::Position;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Status {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl Status {
    pub fn is_terminal(self) -> bool { matches!(self, Status::Checkmate | Status::Stalemate) }
}

/// Classifies the position from the point of view of the side to move.
pub fn status(position: &Position) -> Status {
    let mover = position.get_side_to_move();
    let board = position.board();
    let in_check = board
        .king_square(mover)
        .map_or(false, |king| is_square_attacked(board, king, !mover));

    match (has_legal_move(position), in_check) {
        (true, false) => Status::Ongoing,
        (true, true) => Status::Check,
        (false, true) => Status::Checkmate,
        (false, false) => Status::Stalemate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Color, Piece, PieceKind};

    #[test]
    fn initial_position_is_ongoing() {
        assert_eq!(status(&Position::initial()), Status::Ongoing);
    }

    #[test]
    fn back_rank_mate() {
        let pos = Position::from_pieces(
            [
                Piece::new(Color::Black, PieceKind::King, 0, 6),
                Piece::new(Color::Black, PieceKind::Pawn, 1, 5),
                Piece::new(Color::Black, PieceKind::Pawn, 1, 6),
                Piece::new(Color::Black, PieceKind::Pawn, 1, 7),
                Piece::new(Color::White, PieceKind::Rook, 0, 0),
                Piece::new(Color::White, PieceKind::King, 7, 4),
            ],
            Color::Black,
        );
        assert_eq!(status(&pos), Status::Checkmate);
    }

    #[test]
    fn check_with_an_escape() {
        let pos = Position::from_pieces(
            [
                Piece::new(Color::Black, PieceKind::King, 0, 6),
                Piece::new(Color::Black, PieceKind::Pawn, 1, 5),
                Piece::new(Color::Black, PieceKind::Pawn, 1, 7),
                Piece::new(Color::White, PieceKind::Rook, 0, 0),
                Piece::new(Color::White, PieceKind::King, 7, 4),
            ],
            Color::Black,
        );
        assert_eq!(status(&pos), Status::Check);
    }

    #[test]
    fn queen_stalemate() {
        // Black king in the corner, boxed in by the queen but not attacked
        let pos = Position::from_pieces(
            [
                Piece::new(Color::Black, PieceKind::King, 0, 0),
                Piece::new(Color::White, PieceKind::Queen, 2, 1),
                Piece::new(Color::White, PieceKind::King, 7, 7),
            ],
            Color::Black,
        );
        assert_eq!(status(&pos), Status::Stalemate);
        assert!(status(&pos).is_terminal());
    }
}
