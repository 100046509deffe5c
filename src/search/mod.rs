//! Move search for the computer opponent
//!
//! Contains:
//! - Candidate generation near existing stones
//! - Greedy candidate scoring shared by the Medium strategy and the
//!   minimax root ordering
//! - Fixed-depth minimax with alpha-beta pruning

pub mod minimax;

pub use minimax::{find_best_move, SearchConfig, SearchResult, WIN_SCORE};

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::eval::evaluate_position;

/// Collect empty cells within Chebyshev distance `radius` of any stone.
///
/// Returns an empty vector when the board has no stones at all; callers
/// fall back to the center cell in that case.
pub fn neighbor_moves(board: &Board, radius: i32) -> Vec<Pos> {
    let mut moves = Vec::with_capacity(64);
    let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];

    for color in [Stone::Black, Stone::White] {
        let Some(stones) = board.stones(color) else {
            continue;
        };
        for pos in stones.iter_ones() {
            for dr in -radius..=radius {
                for dc in -radius..=radius {
                    let r = i32::from(pos.row) + dr;
                    let c = i32::from(pos.col) + dc;
                    if !Pos::is_valid(r, c) {
                        continue;
                    }

                    let (ru, cu) = (r as usize, c as usize);
                    if seen[ru][cu] {
                        continue;
                    }
                    seen[ru][cu] = true;

                    let candidate = Pos::new(r as u8, c as u8);
                    if board.is_valid_move(candidate) {
                        moves.push(candidate);
                    }
                }
            }
        }
    }

    moves
}

/// Greedy candidate score with offense weighted slightly above defense.
///
/// Integer form of `1.1 * own + 1.0 * opponent`: both terms are scaled by
/// 10, which preserves the ordering and the exact tie classes of the
/// fractional weights.
pub fn weighted_score(board: &Board, pos: Pos, player: Stone) -> i32 {
    11 * evaluate_position(board, pos, player) + 10 * evaluate_position(board, pos, player.opponent())
}
