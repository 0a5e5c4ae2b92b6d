use crate::{position::Position, Score};

pub trait StaticEvaluator {
    /// Evaluates a given position represented by `position`, from the point
    /// of view of the side to move: positive is good for the player about to
    /// move, negative is good for their opponent.
    ///
    /// Searches that score from a fixed player's point of view negate this at
    /// nodes where that player is not the one to move.
    fn evaluate(&self, position: &Position) -> Score;
}
