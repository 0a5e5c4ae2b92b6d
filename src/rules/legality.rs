
use either::Either::{Left, Right};

use super::{movement::is_pseudo_legal, threats::is_square_attacked};
use crate::{
    piece::{Color, PieceKind, PROMOTION_KINDS},
    position::{Board, Position},
    square::{Move, Square},
};

/// Whether the side to move may play `mv`. The promotion field of `mv` is
/// ignored here; see [`Position::is_pawn_promotion`].
pub fn is_legal_move(position: &Position, mv: Move) -> bool {
    if !mv.is_on_board() {
        return false;
    }
    let board = position.board();
    let Some(piece) = board[mv.from] else { return false; };

    if piece.color != position.get_side_to_move() || mv.from == mv.to {
        return false;
    }
    if board[mv.to].map_or(false, |p| p.color == piece.color) {
        return false;
    }

    is_pseudo_legal(board, mv) && keeps_king_safe(board, mv, piece.color)
}

/// Plays `mv` on a scratch copy of the board and checks that `mover`'s king
/// is not attacked afterwards.
fn keeps_king_safe(board: &Board, mv: Move, mover: Color) -> bool {
    let mut after = *board;
    after.make_move(mv);
    match after.king_square(mover) {
        Some(king) => !is_square_attacked(&after, king, !mover),
        None => true,
    }
}

fn destinations(position: &Position, from: Square) -> impl Iterator<Item = Square> + '_ {
    Square::all().filter(move |&to| is_legal_move(position, Move::new(from, to)))
}

/// The squares the piece on `from` may legally move to, in row-major order.
/// Empty if the square is empty or off the board, the piece is not the side
/// to move's, or the game is over.
pub fn legal_destinations(position: &Position, from: Square) -> Vec<Square> {
    if position.is_finished() || !from.is_on_board() {
        return Vec::new();
    }
    destinations(position, from).collect()
}

/// Every legal move for the side to move. A pawn move onto the last rank is
/// listed once for each promotion kind.
pub fn legal_moves(position: &Position) -> Vec<Move> {
    let mover = position.get_side_to_move();
    let mut moves = Vec::new();
    for piece in position.board().pieces_of(mover) {
        let from = Square::at(piece.row, piece.col);
        let promotes = piece.kind == PieceKind::Pawn;
        moves.extend(destinations(position, from).flat_map(|to| {
            if promotes && to.row == mover.promotion_rank() {
                Left(PROMOTION_KINDS.iter().map(move |&k| Move::with_promotion(from, to, k)))
            } else {
                Right(std::iter::once(Move::new(from, to)))
            }
        }));
    }
    moves
}

pub(super) fn has_legal_move(position: &Position) -> bool {
    position
        .board()
        .pieces_of(position.get_side_to_move())
        .any(|p| destinations(position, Square::at(p.row, p.col)).next().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;

    fn sq(row: u8, col: u8) -> Square { Square::at(row, col) }

    #[test]
    fn opening_moves() {
        let pos = Position::initial();
        assert_eq!(legal_moves(&pos).len(), 20);
        assert_eq!(legal_destinations(&pos, sq(6, 4)), vec![sq(4, 4), sq(5, 4)]);
        assert_eq!(legal_destinations(&pos, sq(7, 6)), vec![sq(5, 5), sq(5, 7)]);
        assert!(legal_destinations(&pos, sq(7, 3)).is_empty());
        // not white's piece
        assert!(legal_destinations(&pos, sq(1, 4)).is_empty());
        // empty square
        assert!(legal_destinations(&pos, sq(4, 4)).is_empty());
    }

    #[test]
    fn cannot_capture_own_piece_or_stand_still() {
        let pos = Position::initial();
        assert!(!is_legal_move(&pos, Move::new(sq(7, 0), sq(6, 0))));
        assert!(!is_legal_move(&pos, Move::new(sq(6, 0), sq(6, 0))));
    }

    #[test]
    fn pinned_pieces_stay_put() {
        let pos = Position::from_pieces(
            [
                Piece::new(Color::White, PieceKind::King, 7, 4),
                Piece::new(Color::White, PieceKind::Bishop, 6, 4),
                Piece::new(Color::Black, PieceKind::Rook, 0, 4),
                Piece::new(Color::Black, PieceKind::King, 0, 0),
            ],
            Color::White,
        );
        assert!(legal_destinations(&pos, sq(6, 4)).is_empty());
        assert!(is_legal_move(&pos, Move::new(sq(7, 4), sq(7, 3))));
        assert!(is_legal_move(&pos, Move::new(sq(7, 4), sq(6, 5))));
    }

    #[test]
    fn check_must_be_answered() {
        let pos = Position::from_pieces(
            [
                Piece::new(Color::White, PieceKind::King, 7, 4),
                Piece::new(Color::White, PieceKind::Rook, 7, 0),
                Piece::new(Color::White, PieceKind::Pawn, 6, 3),
                Piece::new(Color::White, PieceKind::Pawn, 6, 5),
                Piece::new(Color::Black, PieceKind::Rook, 2, 4),
                Piece::new(Color::Black, PieceKind::King, 0, 0),
            ],
            Color::White,
        );
        let moves = legal_moves(&pos);
        assert!(!moves.is_empty());
        for mv in moves {
            let after = pos.apply_move(mv).unwrap();
            let king = after.board().king_square(Color::White).unwrap();
            assert!(!is_square_attacked(after.board(), king, Color::Black), "{} leaves check", mv);
        }
    }

    #[test]
    fn promotions_are_expanded() {
        let pos = Position::from_pieces(
            [
                Piece::new(Color::White, PieceKind::King, 7, 7),
                Piece::new(Color::White, PieceKind::Pawn, 1, 3),
                Piece::new(Color::Black, PieceKind::King, 0, 0),
            ],
            Color::White,
        );
        let promotions: Vec<_> = legal_moves(&pos)
            .into_iter()
            .filter(|m| m.from == sq(1, 3))
            .collect();
        assert_eq!(promotions.len(), 4);
        assert!(promotions.iter().all(|m| m.to == sq(0, 3) && m.promotion.is_some()));
    }

    #[test]
    fn off_board_requests_are_rejected() {
        let pos = Position::initial();
        let off = Square { row: 9, col: 4 };
        assert!(!is_legal_move(&pos, Move::new(sq(6, 4), off)));
        assert!(!is_legal_move(&pos, Move::new(off, sq(6, 4))));
        assert!(legal_destinations(&pos, Square { row: 8, col: 0 }).is_empty());
        assert!(!is_square_attacked(pos.board(), off, Color::White));
    }

    #[test]
    fn finished_games_have_no_destinations() {
        let pos = Position::initial().agree_draw().unwrap();
        assert!(legal_destinations(&pos, sq(6, 4)).is_empty());
    }
}
