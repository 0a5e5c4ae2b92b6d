mod branch_info;
use branch_info::BranchInfo;


use rand::{rngs::StdRng, seq::SliceRandom, Rng};

use super::{Engine, SearchConfig, SearchResult, StaticEvaluator, INFINITY};
use crate::{logger::Logger, position::Position, rules, Score};

/// Depth-limited minimax with alpha-beta pruning.
///
/// Candidate moves are shuffled with `rng` before they are searched, so that
/// equally scored moves are not always resolved the same way. Seed the rng
/// for reproducible games.
pub struct AlphaBeta<R = StdRng> {
    static_evaluator: Box<dyn StaticEvaluator>,
    depth: u8,
    rng: R,
    logger: Logger,
    // Debug info
    branch_info: BranchInfo,
}

impl AlphaBeta {
    pub fn new(static_evaluator: impl StaticEvaluator + 'static, config: SearchConfig) -> Self {
        AlphaBeta::with_rng(static_evaluator, config.depth, config.rng(), config.log_level)
    }
}

impl<R: Rng> AlphaBeta<R> {
    /// Using a larger log level may have performance costs
    pub fn with_rng(
        static_evaluator: impl StaticEvaluator + 'static, depth: u8, rng: R, log_level: u8,
    ) -> Self {
        AlphaBeta {
            static_evaluator: Box::new(static_evaluator),
            depth,
            rng,
            logger: Logger::new(log_level),
            branch_info: BranchInfo::new(depth),
        }
    }

    /// Gets the best move for the player to move at the root, along with its
    /// score.
    ///
    /// Scores are always from the point of view of the root player, who
    /// maximizes; `maximizing` tells whether that player is the one to move
    /// in `position`. Leaves are scored with the static evaluator, negated at
    /// minimizing nodes.
    ///
    /// `position` is never modified: every candidate is played on its own
    /// copy.
    pub fn search_window(
        &mut self, position: &Position, depth: u8, mut alpha: Score, mut beta: Score,
        maximizing: bool,
    ) -> SearchResult {
        self.branch_info.visit(depth);

        if depth == 0 {
            return self.leaf(position, maximizing);
        }

        let mut moves = rules::legal_moves(position);
        moves.shuffle(&mut self.rng);

        if moves.is_empty() {
            return self.leaf(position, maximizing);
        }

        let mut best: Option<SearchResult> = None;

        for (i, &mv) in moves.iter().enumerate() {
            let mut child = position.clone();
            child.make_move(mv);

            let score = self
                .search_window(&child, depth - 1, alpha, beta, !maximizing)
                .score;

            let improves = match best {
                None => true,
                Some(b) if maximizing => score > b.score,
                Some(b) => score < b.score,
            };
            if improves {
                best = Some(SearchResult { best_move: Some(mv), score });
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }

            if alpha >= beta {
                self.branch_info.prune(depth, moves.len() - i - 1);
                break;
            }
        }

        debug_assert!(best.is_some(), "a non-empty move list always yields a result");
        best.unwrap_or_else(|| self.leaf(position, maximizing))
    }

    fn leaf(&self, position: &Position, maximizing: bool) -> SearchResult {
        let eval = self.static_evaluator.evaluate(position);
        SearchResult::leaf(if maximizing { eval } else { -eval })
    }
}

impl<R: Rng> Engine for AlphaBeta<R> {
    fn search(&mut self, position: &Position, depth: u8) -> SearchResult {
        self.branch_info.reset_statistics();
        self.logger.time_start(2, "full move calculation");
        let result = self.search_window(position, depth, -INFINITY, INFINITY, true);
        self.logger.time_end(2, "full move calculation");
        result
    }

    fn depth(&self) -> u8 { self.depth }

    fn log_info(&self) { self.logger.log_lazy(6, || self.branch_info.statistics()); }

    fn get_logger(&self) -> &Logger { &self.logger }
}
