
use crate::{
    piece::PieceKind,
    position::Board,
    square::{Move, Square},
};

/// Whether `mv` fits the movement geometry of the piece on its source square,
/// including obstruction. False for squares off the board. Says nothing about
/// whose turn it is, what stands on the destination, or the safety of either
/// king.
pub fn is_pseudo_legal(board: &Board, mv: Move) -> bool {
    if !mv.is_on_board() {
        return false;
    }
    let Some(piece) = board[mv.from] else { return false; };
    if mv.from == mv.to {
        return false;
    }
    match piece.kind {
        PieceKind::Rook => rook_move(board, mv),
        PieceKind::Bishop => bishop_move(board, mv),
        PieceKind::Queen => rook_move(board, mv) || bishop_move(board, mv),
        PieceKind::Knight => knight_move(mv),
        PieceKind::King => king_move(mv),
        PieceKind::Pawn => pawn_move(board, mv),
    }
}

fn rook_move(board: &Board, mv: Move) -> bool {
    (mv.d_row() == 0 || mv.d_col() == 0) && path_clear(board, mv)
}

fn bishop_move(board: &Board, mv: Move) -> bool {
    mv.d_row().abs() == mv.d_col().abs() && path_clear(board, mv)
}

fn knight_move(mv: Move) -> bool {
    matches!((mv.d_row().abs(), mv.d_col().abs()), (2, 1) | (1, 2))
}

fn king_move(mv: Move) -> bool {
    mv.d_row().abs() <= 1 && mv.d_col().abs() <= 1
}

fn pawn_move(board: &Board, mv: Move) -> bool {
    let Some(pawn) = board[mv.from] else { return false; };
    let dir = pawn.color.forward();
    let target = board[mv.to];

    // Single step onto an empty square
    if mv.d_col() == 0 && mv.d_row() == dir {
        return target.is_none();
    }

    // Double step from the starting rank, both squares empty
    if mv.d_col() == 0 && mv.d_row() == 2 * dir && mv.from.row == pawn.color.pawn_rank() {
        let between = Square::at((mv.from.row as i8 + dir) as u8, mv.from.col);
        return target.is_none() && board[between].is_none();
    }

    // Diagonal capture
    mv.d_col().abs() == 1
        && mv.d_row() == dir
        && target.map_or(false, |p| p.color != pawn.color)
}

/// Every square strictly between the ends of a straight or diagonal move is
/// empty. The caller guarantees the move is on a line.
fn path_clear(board: &Board, mv: Move) -> bool {
    let (step_row, step_col) = (mv.d_row().signum(), mv.d_col().signum());
    let mut sq = mv.from;
    loop {
        sq = match sq.offset(step_row, step_col) {
            Some(next) => next,
            None => return false,
        };
        if sq == mv.to {
            return true;
        }
        if board[sq].is_some() {
            return false;
        }
    }
}
