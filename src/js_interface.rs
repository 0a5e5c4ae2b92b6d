
use js_sys::{Array, JsString};
use wasm_bindgen::prelude::*;

use crate::{
    engine::{alphabeta::AlphaBeta, Engine, MaterialCount, SearchConfig},
    error::MoveError,
    piece::{Color, PieceKind},
    position::{Outcome, Position},
    rules::{self, Status},
    square::{Move, Square},
};

/// A game as seen by the browser: the current position plus the engine that
/// answers in single-player mode.
#[wasm_bindgen]
pub struct JsGame {
    position: Position,
    engine: AlphaBeta,
}

fn js_error(e: impl std::fmt::Display) -> JsValue { JsValue::from_str(&e.to_string()) }

fn square(row: usize, col: usize) -> Result<Square, MoveError> {
    Square::new(row, col).ok_or(MoveError::OffBoard(row, col))
}

impl JsGame {
    pub fn new(position: Position, config: SearchConfig) -> JsGame {
        JsGame {
            position,
            engine: AlphaBeta::new(MaterialCount::default(), config),
        }
    }

    pub fn position(&self) -> &Position { &self.position }

    fn make_move(
        &self, from_row: usize, from_col: usize, to_row: usize, to_col: usize,
        promotion: Option<String>,
    ) -> Result<Move, JsValue> {
        let promotion = match promotion {
            Some(name) => Some(
                PieceKind::from_name(&name)
                    .ok_or_else(|| js_error(format!("unknown piece kind \"{}\"", name)))?,
            ),
            None => None,
        };
        Ok(Move {
            from: square(from_row, from_col).map_err(js_error)?,
            to: square(to_row, to_col).map_err(js_error)?,
            promotion,
        })
    }

    /// `Some(true)` if `from -> to` is legal and needs a promotion,
    /// `Some(false)` if it is legal without one, `None` if it is illegal.
    pub(crate) fn check_move(&self, from: Square, to: Square) -> Option<bool> {
        let mv = Move::new(from, to);
        if self.position.is_finished() || !rules::is_legal_move(&self.position, mv) {
            None
        } else {
            Some(self.position.is_pawn_promotion(mv))
        }
    }

    pub(crate) fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        self.position = self.position.play(mv)?;
        Ok(())
    }

    pub(crate) fn play_engine_move(&mut self) -> Result<Option<Move>, MoveError> {
        let Some(mv) = self.engine.get_move(&self.position) else { return Ok(None); };
        self.play(mv)?;
        Ok(Some(mv))
    }

    pub(crate) fn status_name(&self) -> &'static str {
        match self.position.outcome() {
            Some(Outcome::Checkmate { .. }) => "checkmate",
            Some(Outcome::Stalemate) => "stalemate",
            Some(Outcome::Resigned { .. }) => "resigned",
            Some(Outcome::Drawn) => "drawn",
            None => match rules::status(&self.position) {
                Status::Ongoing => "ongoing",
                Status::Check => "check",
                Status::Checkmate => "checkmate",
                Status::Stalemate => "stalemate",
            },
        }
    }
}

#[wasm_bindgen]
impl JsGame {
    /// Starts a new game. `config` is an optional JSON search configuration,
    /// e.g. `{"depth": 3, "seed": 7}`.
    #[wasm_bindgen(constructor)]
    pub fn js_new(config: Option<String>) -> Result<JsGame, JsValue> {
        crate::utils::set_panic_hook();
        let config = match config {
            Some(json) => serde_json::from_str(&json).map_err(js_error)?,
            None => SearchConfig::default(),
        };
        Ok(JsGame::new(Position::initial(), config))
    }

    /// Restores a game from its serialized position.
    pub fn js_load(json: &str, config: Option<String>) -> Result<JsGame, JsValue> {
        let mut game = JsGame::js_new(config)?;
        game.position = Position::from_json(json).map_err(js_error)?;
        Ok(game)
    }

    pub fn js_to_json(&self) -> Result<String, JsValue> { self.position.to_json().map_err(js_error) }

    pub fn js_piece(&self, row: usize, col: usize) -> Option<JsString> {
        let sq = Square::new(row, col)?;
        self.position[sq].map(|p| p.glyph().to_string().into())
    }

    pub fn js_piece_color(&self, row: usize, col: usize) -> JsString {
        match Square::new(row, col).and_then(|sq| self.position[sq]) {
            Some(p) => p.color.to_string().into(),
            None => "empty".into(),
        }
    }

    /// The legal destinations of the piece on `(row, col)` as `[row, col]`
    /// pairs, for highlighting.
    pub fn js_moves_from(&self, row: usize, col: usize) -> Array {
        let js_moves = Array::new();
        if let Some(sq) = Square::new(row, col) {
            for dest in rules::legal_destinations(&self.position, sq) {
                let js_move = Array::new();
                js_move.push(&dest.row.into());
                js_move.push(&dest.col.into());
                js_moves.push(&js_move);
            }
        }
        js_moves
    }

    /// Returns:
    /// - `Some(true)` if the move is legal and has a promotion
    /// - `Some(false)` if the move is legal and does not have a promotion
    /// - `None` if the move is illegal
    pub fn js_check_move(
        &self, from_row: usize, from_col: usize, to_row: usize, to_col: usize,
    ) -> Option<bool> {
        let from = Square::new(from_row, from_col)?;
        let to = Square::new(to_row, to_col)?;
        self.check_move(from, to)
    }

    pub fn js_apply_move(
        &mut self, from_row: usize, from_col: usize, to_row: usize, to_col: usize,
        promotion: Option<String>,
    ) -> Result<(), JsValue> {
        let mv = self.make_move(from_row, from_col, to_row, to_col, promotion)?;
        self.play(mv).map_err(js_error)
    }

    /// Lets the engine move for the side to move. Returns
    /// `[fromRow, fromCol, toRow, toCol]`, or `undefined` if there was no
    /// move to make.
    pub fn js_engine_move(&mut self) -> Result<Option<Array>, JsValue> {
        let Some(mv) = self.play_engine_move().map_err(js_error)? else { return Ok(None); };
        let js_move = Array::new();
        for n in [mv.from.row, mv.from.col, mv.to.row, mv.to.col] {
            js_move.push(&n.into());
        }
        Ok(Some(js_move))
    }

    pub fn js_get_side_to_move(&self) -> JsString {
        self.position.get_side_to_move().to_string().into()
    }

    /// One of "ongoing", "check", "checkmate", "stalemate", "resigned" or
    /// "drawn".
    pub fn js_status(&self) -> JsString { self.status_name().into() }

    pub fn js_winner(&self) -> Option<JsString> {
        self.position
            .outcome()
            .and_then(Outcome::winner)
            .map(|c| c.to_string().into())
    }

    pub fn js_resign(&mut self, color: &str) -> Result<(), JsValue> {
        let color = Color::from_name(color)
            .ok_or_else(|| js_error(format!("unknown color \"{}\"", color)))?;
        self.position = self.position.resign(color).map_err(js_error)?;
        Ok(())
    }

    pub fn js_agree_draw(&mut self) -> Result<(), JsValue> {
        self.position = self.position.agree_draw().map_err(js_error)?;
        Ok(())
    }
}
