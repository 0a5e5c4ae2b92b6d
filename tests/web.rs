//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use rules_chess::JsGame;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn game() -> JsGame { JsGame::js_new(Some(r#"{"depth": 1, "seed": 4}"#.to_string())).unwrap() }

#[wasm_bindgen_test]
fn opening_move_round_trip() {
    let mut game = game();
    assert_eq!(game.js_check_move(6, 4, 4, 4), Some(false));
    assert_eq!(game.js_moves_from(6, 4).length(), 2);
    game.js_apply_move(6, 4, 4, 4, None).unwrap();
    assert_eq!(String::from(game.js_get_side_to_move()), "black");

    let reply = game.js_engine_move().unwrap().unwrap();
    assert_eq!(reply.length(), 4);
    assert_eq!(String::from(game.js_status()), "ongoing");

    let restored = JsGame::js_load(&game.js_to_json().unwrap(), None).unwrap();
    assert_eq!(restored.js_to_json().unwrap(), game.js_to_json().unwrap());
}

#[wasm_bindgen_test]
fn bad_input_is_an_error() {
    let mut game = game();
    assert!(game.js_apply_move(6, 4, 3, 4, None).is_err());
    assert!(game.js_apply_move(9, 4, 3, 4, None).is_err());
    assert!(JsGame::js_new(Some("{".to_string())).is_err());
}

#[wasm_bindgen_test]
fn resignation_ends_the_game() {
    let mut game = game();
    game.js_resign("white").unwrap();
    assert_eq!(String::from(game.js_status()), "resigned");
    assert_eq!(game.js_winner().map(String::from), Some("black".to_string()));
    assert!(game.js_engine_move().unwrap().is_none());
}
