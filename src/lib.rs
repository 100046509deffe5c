//! Gobang (five in a row) game engine
//!
//! A complete Gobang implementation: board, rules, heuristic evaluation and
//! a minimax-based computer opponent.
//! - Standard 15x15 board
//! - 5-in-a-row to win (overlines allowed)
//! - Black moves first; a full board without a five is a draw
//! - Three AI difficulty levels: Easy, Medium, Hard
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection
//! - [`eval`]: Position evaluation and pattern scores
//! - [`search`]: Candidate generation and alpha-beta minimax
//! - [`engine`]: The difficulty-selectable computer opponent
//! - [`game`]: Turn order, win/draw resolution and session scores
//! - [`ui`]: Console rendering and input parsing
//!
//! # Quick Start
//!
//! ```
//! use gobang::{Ai, Difficulty, Session, Stone};
//!
//! let mut session = Session::new();
//! let mut ai = Ai::new(Difficulty::Medium, Stone::White);
//!
//! // Black (the human side) opens in the center
//! session.make_move(7, 7).unwrap();
//!
//! // The AI responds as White
//! let pos = ai.get_move(session.board_mut());
//! session.make_move(pos.row as usize, pos.col as usize).unwrap();
//! ```
//!
//! # Difficulty Levels
//!
//! 1. **Easy**: immediate win/block detection, otherwise random near stones
//! 2. **Medium**: greedy one-move evaluation with offense weighted over defense
//! 3. **Hard**: depth-3 minimax with alpha-beta pruning and candidate ordering

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use engine::{Ai, Difficulty};
pub use error::GameError;
pub use game::{GameState, GameStatus, Move, Session};
