use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use board::{Board, Group};
pub use config::GameConfig;
pub use error::GameError;
pub use game::Game;
pub use types::{CellState, Color, GameResult, GameState, Notification, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
