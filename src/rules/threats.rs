
use super::movement::is_pseudo_legal;
use crate::{
    piece::Color,
    position::Board,
    square::{Move, Square},
};

/// True iff some piece of `by` could move onto `target` by its movement
/// geometry alone. Own-piece occupancy and king safety are not considered,
/// which keeps this free of any recursion into the legality filter.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    board.pieces_of(by).any(|p| {
        let from = Square::at(p.row, p.col);
        from != target && is_pseudo_legal(board, Move::new(from, target))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Piece, PieceKind};

    #[test]
    fn sliders_attack_through_empty_squares_only() {
        let mut board = Board::empty();
        board.place(Piece::new(Color::Black, PieceKind::Rook, 0, 4));
        board.place(Piece::new(Color::White, PieceKind::King, 7, 4));
        assert!(is_square_attacked(&board, Square::at(7, 4), Color::Black));
        assert!(!is_square_attacked(&board, Square::at(7, 4), Color::White));

        board.place(Piece::new(Color::White, PieceKind::Pawn, 3, 4));
        assert!(!is_square_attacked(&board, Square::at(7, 4), Color::Black));
    }

    #[test]
    fn pawns_attack_diagonally_forward() {
        let mut board = Board::empty();
        board.place(Piece::new(Color::Black, PieceKind::Pawn, 3, 3));
        board.place(Piece::new(Color::White, PieceKind::King, 4, 4));
        board.place(Piece::new(Color::White, PieceKind::Knight, 4, 3));
        assert!(is_square_attacked(&board, Square::at(4, 4), Color::Black));
        // straight ahead is a push, not an attack
        assert!(!is_square_attacked(&board, Square::at(4, 3), Color::Black));
    }

    #[test]
    fn knights_attack_over_blockers() {
        let position = crate::Position::initial();
        let board = position.board();
        assert!(is_square_attacked(board, Square::at(5, 5), Color::White));
        assert!(!is_square_attacked(board, Square::at(3, 4), Color::White));
        assert!(is_square_attacked(board, Square::at(2, 2), Color::Black));
    }
}
