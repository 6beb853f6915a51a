use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;
use wasm_bindgen::prelude::*;

use crate::game::GameSession;
use crate::rules::Rules;

/// The single session driven by the front end. The lock serialises moves.
static SESSION: Lazy<Mutex<Option<GameSession>>> = Lazy::new(|| Mutex::new(None));

fn session() -> Result<MutexGuard<'static, Option<GameSession>>, JsError> {
    SESSION
        .lock()
        .map_err(|_| JsError::new("game session lock poisoned"))
}

fn with_game<T>(f: impl FnOnce(&mut GameSession) -> Result<T, JsError>) -> Result<T, JsError> {
    let mut guard = session()?;
    let game = guard
        .as_mut()
        .ok_or_else(|| JsError::new("no game in progress; call new_game first"))?;
    f(game)
}

/// Starts a new game. `rules` may be `undefined`, `null` or an object such as
/// `{ capture: "flanking" }`.
#[wasm_bindgen]
pub fn new_game(rules: JsValue) -> Result<JsValue, JsError> {
    let rules: Rules = if rules.is_undefined() || rules.is_null() {
        Rules::default()
    } else {
        serde_wasm_bindgen::from_value(rules)?
    };

    let game = GameSession::new(rules);
    let state = serde_wasm_bindgen::to_value(&game.to_game_state())?;
    *session()? = Some(game);
    Ok(state)
}

/// Plays the current player's disc at column `x`, row `y`.
#[wasm_bindgen]
pub fn place(x: u8, y: u8) -> Result<JsValue, JsError> {
    with_game(|game| {
        game.place(x, y)?;
        Ok(serde_wasm_bindgen::to_value(&game.to_game_state())?)
    })
}

#[wasm_bindgen]
pub fn get_state() -> Result<JsValue, JsError> {
    with_game(|game| Ok(serde_wasm_bindgen::to_value(&game.to_game_state())?))
}

#[wasm_bindgen]
pub fn get_result() -> Result<JsValue, JsError> {
    with_game(|game| Ok(serde_wasm_bindgen::to_value(&game.to_game_result())?))
}
