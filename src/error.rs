//! Error types for the game engine.

/// Errors raised when the engine is driven outside its contract.
///
/// Illegal and suicide moves are not errors: `Game::play` reports them by
/// returning `Ok(false)`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// `play` or `pass` was called after the game ended.
    #[error("the game is already over")]
    GameOver,

    /// A coordinate lies outside the board.
    #[error("position ({col}, {row}) is out of range for a {size}x{size} board")]
    OutOfBounds { col: usize, row: usize, size: usize },

    /// Board size must be at least 1.
    #[error("invalid board size: {0}")]
    InvalidSize(usize),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, GameError>;
