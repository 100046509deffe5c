//! Heuristic evaluation for Gobang board positions
//!
//! Two entry points share one direction-local counting core:
//! - [`evaluate_position`] scores a hypothetical stone at an empty cell,
//!   used to rank candidate moves.
//! - [`evaluate_board`] sums the same per-stone scores over every placed
//!   stone, own minus opponent, and serves as the static leaf evaluation
//!   for the minimax search.
//!
//! This is a lightweight direction-local heuristic, not a threat-space
//! search: each call probes at most 4 directions x 8 cells.

use crate::board::{Board, Pos, Stone};

use super::patterns::{run_score, PatternScore};

/// Direction vectors for line evaluation (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count consecutive `color` stones adjacent to `pos` along one axis.
///
/// Probes up to 4 cells each way, stopping at the first cell that is not
/// `color`. An empty stopping cell counts that side as an open end; an
/// opponent stone or the board edge does not. The cell at `pos` itself is
/// never inspected, so the same count works for a hypothetical stone on an
/// empty cell and for a stone already on the board.
fn count_direction(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> (i32, i32) {
    let mut count = 0;
    let mut open_ends = 0;

    // Forward
    for i in 1..=4 {
        let r = i32::from(pos.row) + dr * i;
        let c = i32::from(pos.col) + dc * i;
        if !Pos::is_valid(r, c) {
            break;
        }
        match board.get(Pos::new(r as u8, c as u8)) {
            s if s == color => count += 1,
            Stone::Empty => {
                open_ends += 1;
                break;
            }
            _ => break,
        }
    }

    // Backward
    for i in 1..=4 {
        let r = i32::from(pos.row) - dr * i;
        let c = i32::from(pos.col) - dc * i;
        if !Pos::is_valid(r, c) {
            break;
        }
        match board.get(Pos::new(r as u8, c as u8)) {
            s if s == color => count += 1,
            Stone::Empty => {
                open_ends += 1;
                break;
            }
            _ => break,
        }
    }

    (count, open_ends)
}

/// Score the value of a `color` stone at `pos` (hypothetical or actual).
///
/// For each of the 4 axes the run length is the adjacent count plus the
/// stone at `pos` itself. Runs of 5+ score the win constant; shorter runs
/// need at least one open end and at least 2 stones to contribute. The
/// board is never mutated.
pub fn evaluate_position(board: &Board, pos: Pos, color: Stone) -> i32 {
    let mut score = 0;
    for &(dr, dc) in &DIRECTIONS {
        let (count, open_ends) = count_direction(board, pos, dr, dc, color);
        let total = count + 1;
        if total >= 5 {
            score += PatternScore::FIVE;
        } else if open_ends > 0 && total >= 2 {
            score += run_score(total, open_ends);
        }
    }
    score
}

/// Static evaluation of the whole board from `color`'s perspective.
///
/// Sums per-stone scores over every placed stone: positive for `color`'s
/// stones, negative for the opponent's. Positive results mean advantage
/// for `color`.
pub fn evaluate_board(board: &Board, color: Stone) -> i32 {
    let opponent = color.opponent();
    let mut score = 0;

    if let Some(stones) = board.stones(color) {
        for pos in stones.iter_ones() {
            score += evaluate_position(board, pos, color);
        }
    }
    if let Some(stones) = board.stones(opponent) {
        for pos in stones.iter_ones() {
            score -= evaluate_position(board, pos, opponent);
        }
    }

    score
}
