//! Error types for the game core

/// Errors reported to the driving layer.
///
/// The core has no fatal states: a rejected move leaves board and game
/// state untouched, and the driver simply re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move at ({row}, {col}): out of range or occupied")]
    InvalidMove { row: usize, col: usize },

    #[error("the game is already over")]
    GameOver,
}
