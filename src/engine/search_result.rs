use crate::{square::Move, Score};

/// The outcome of searching a position.
///
/// `best_move` is `None` only when the node was scored statically, that is
/// at depth 0 or when the side to move has no legal move.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: Score,
}

impl SearchResult {
    pub fn leaf(score: Score) -> Self { SearchResult { best_move: None, score } }
}
