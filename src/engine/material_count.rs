use crate::{
    piece::{PieceKind, ALL_KINDS},
    position::Position,
    Score,
};

use super::StaticEvaluator;

/// Plain material balance.
pub struct MaterialCount {
    piece_values: [Score; 6],
}

impl Default for MaterialCount {
    fn default() -> Self {
        let mut piece_values = [0; 6];
        for kind in ALL_KINDS {
            piece_values[kind.to_index()] = match kind {
                PieceKind::Pawn => 100,
                PieceKind::Knight => 280,
                PieceKind::Bishop => 320,
                PieceKind::Rook => 479,
                PieceKind::Queen => 929,
                PieceKind::King => 60000,
            };
        }
        MaterialCount { piece_values }
    }
}

impl MaterialCount {
    pub fn value(&self, kind: PieceKind) -> Score { self.piece_values[kind.to_index()] }
}

impl StaticEvaluator for MaterialCount {
    fn evaluate(&self, position: &Position) -> Score {
        let mover = position.get_side_to_move();
        position
            .board()
            .pieces()
            .map(|p| {
                let value = self.value(p.kind);
                if p.color == mover { value } else { -value }
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        piece::{Color, Piece},
        square::{Move, Square},
    };

    #[test]
    fn initial_position_is_balanced() {
        assert_eq!(MaterialCount::default().evaluate(&Position::initial()), 0);
    }

    #[test]
    fn score_is_relative_to_the_side_to_move() {
        let pieces = [
            Piece::new(Color::White, PieceKind::King, 7, 4),
            Piece::new(Color::Black, PieceKind::King, 0, 4),
            Piece::new(Color::White, PieceKind::Rook, 7, 0),
            Piece::new(Color::Black, PieceKind::Knight, 0, 1),
        ];
        let eval = MaterialCount::default();
        assert_eq!(eval.evaluate(&Position::from_pieces(pieces, Color::White)), 479 - 280);
        assert_eq!(eval.evaluate(&Position::from_pieces(pieces, Color::Black)), 280 - 479);
    }

    #[test]
    fn captures_shift_the_balance() {
        let pos = Position::initial()
            .apply_move(Move::new(Square::at(6, 4), Square::at(4, 4)))
            .and_then(|p| p.apply_move(Move::new(Square::at(1, 3), Square::at(3, 3))))
            .and_then(|p| p.apply_move(Move::new(Square::at(4, 4), Square::at(3, 3))))
            .unwrap();
        // black to move, a pawn down
        assert_eq!(MaterialCount::default().evaluate(&pos), -100);
    }
}
