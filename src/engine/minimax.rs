
use super::{Engine, SearchResult, StaticEvaluator};
use crate::{logger::Logger, position::Position, rules};

/// Exhaustive minimax without pruning or move shuffling. Slow, but its
/// scores are the reference that [`AlphaBeta`](super::alphabeta::AlphaBeta)
/// must reproduce.
pub struct Minimax {
    static_evaluator: Box<dyn StaticEvaluator>,
    lookahead: u8,
    logger: Logger,
    nodes: u64,
}

impl Minimax {
    pub fn new(static_evaluator: impl StaticEvaluator + 'static, lookahead: u8) -> Self {
        Minimax {
            static_evaluator: Box::new(static_evaluator),
            lookahead,
            logger: Logger::new(0),
            nodes: 0,
        }
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 { self.nodes }

    fn evaluate_with_cutoff(
        &mut self, position: &Position, cutoff: u8, maximizing: bool,
    ) -> SearchResult {
        self.nodes += 1;

        let moves = if cutoff == 0 { Vec::new() } else { rules::legal_moves(position) };

        if moves.is_empty() {
            return self.leaf(position, maximizing);
        }

        let mut best: Option<SearchResult> = None;
        for mv in moves {
            let mut child = position.clone();
            child.make_move(mv);
            let score = self.evaluate_with_cutoff(&child, cutoff - 1, !maximizing).score;

            let improves = match best {
                None => true,
                Some(b) if maximizing => score > b.score,
                Some(b) => score < b.score,
            };
            if improves {
                best = Some(SearchResult { best_move: Some(mv), score });
            }
        }

        best.unwrap_or_else(|| self.leaf(position, maximizing))
    }

    fn leaf(&self, position: &Position, maximizing: bool) -> SearchResult {
        let eval = self.static_evaluator.evaluate(position);
        SearchResult::leaf(if maximizing { eval } else { -eval })
    }
}

impl Engine for Minimax {
    fn search(&mut self, position: &Position, depth: u8) -> SearchResult {
        self.nodes = 0;
        self.evaluate_with_cutoff(position, depth, true)
    }

    fn depth(&self) -> u8 { self.lookahead }

    fn log_info(&self) { self.logger.log_lazy(6, || format!("{} nodes searched", self.nodes)); }

    fn get_logger(&self) -> &Logger { &self.logger }
}
