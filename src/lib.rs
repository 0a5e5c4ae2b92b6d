mod engine;
mod error;
mod js_interface;
mod logger;
mod piece;
mod position;
mod record;
mod rules;
mod square;
mod utils;

/// Centipawn-style material score. Larger is better for whoever the score
/// is being reported for.
pub type Score = i32;

pub use engine::{
    alphabeta::AlphaBeta, minimax::Minimax, Engine, MaterialCount, SearchConfig, SearchResult,
    StaticEvaluator, INFINITY,
};
pub use error::{MoveError, RecordError};
pub use js_interface::JsGame;
pub use logger::Logger;
pub use piece::{Color, Piece, PieceKind, ALL_COLORS, ALL_KINDS, PROMOTION_KINDS};
pub use position::{Board, CastlingRights, Outcome, Position};
pub use record::PositionRecord;
pub use rules::{
    is_legal_move, is_pseudo_legal, is_square_attacked, legal_destinations, legal_moves, status,
    Status,
};
pub use square::{Move, Square};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;
