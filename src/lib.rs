use wasm_bindgen::prelude::*;

pub mod board;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod types;
pub mod wasm;

pub use board::{Board, initial_board};
pub use engine::{Engine, Score, apply_move, play, recompute_legal, score};
pub use error::EngineError;
pub use rules::{CaptureRule, Rules};
pub use types::{CellState, Move, Player, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
