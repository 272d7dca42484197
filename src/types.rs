use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Stone color of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Index into per-color tables such as the score.
    pub fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

/// State of a single board point.
///
/// Exported to JavaScript as named constants; callers compare against
/// `CellState.Empty` etc., never against the raw numbers.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Empty = 0,
    Black = 1,
    White = 2,
}

impl CellState {
    pub fn color(self) -> Option<Color> {
        match self {
            CellState::Empty => None,
            CellState::Black => Some(Color::Black),
            CellState::White => Some(Color::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }
}

impl From<Color> for CellState {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => CellState::Black,
            Color::White => CellState::White,
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl From<(usize, usize)> for Position {
    fn from((col, row): (usize, usize)) -> Self {
        Self { col, row }
    }
}

impl From<[usize; 2]> for Position {
    fn from([col, row]: [usize; 2]) -> Self {
        Self { col, row }
    }
}

/// Message the page shows after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Notification {
    Atari,
    Suicide,
    GameOver,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub size: usize,
    /// Column-major cells, `board[col * size + row]`, 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    pub current_color: Color,
    /// Captured stones per color, `[black, white]`.
    pub score: [u32; 2],
    pub in_atari: bool,
    pub attempted_suicide: bool,
    pub is_game_over: bool,
    pub last_move_passed: bool,
    /// Contract:
    /// - Successful play: stones removed by that play (possibly none).
    /// - Pass or rejected play: empty.
    pub captured: Vec<Position>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// `None` when both players captured the same number of stones.
    pub winner: Option<Color>,
    pub black_captures: u32,
    pub white_captures: u32,
}
