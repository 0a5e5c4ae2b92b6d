
pub mod alphabeta;
mod config;
mod evaluator;
mod material_count;
pub mod minimax;
mod search_result;

pub use config::SearchConfig;
pub use evaluator::StaticEvaluator;
pub use material_count::MaterialCount;
pub use search_result::SearchResult;

use crate::{logger::Logger, position::Position, square::Move, Score};

/// Larger than any score an evaluator can produce.
pub const INFINITY: Score = Score::MAX;

pub trait Engine {
    /// Searches `position` to `depth` plies with the full window. The score
    /// is from the point of view of the side to move.
    fn search(&mut self, position: &Position, depth: u8) -> SearchResult;

    /// The search depth used by [`Engine::get_move`].
    fn depth(&self) -> u8;

    /// Picks a move for the side to move, or `None` if the game is over or
    /// there is nothing to play.
    fn get_move(&mut self, position: &Position) -> Option<Move> {
        if position.is_finished() {
            return None;
        }
        let depth = self.depth().max(1);

        self.get_logger()
            .log_lazy(5, || format!("Getting move for position:\n{}", position));

        let result = self.search(position, depth);

        self.get_logger().log_lazy(2, || match result.best_move {
            Some(mv) => format!("depth {}: move {} with score {}", depth, mv, result.score),
            None => format!("depth {}: no move, static score {}", depth, result.score),
        });
        self.log_info();

        result.best_move
    }

    fn log_info(&self) {}

    fn get_logger(&self) -> &Logger;
}
