//! Position evaluation and pattern heuristics

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_board, evaluate_position, DIRECTIONS};
pub use patterns::{run_score, PatternScore};
