//! Win condition checking
//!
//! A move wins when it completes a run of 5 or more stones of the mover's
//! color along any of the four axes (overlines count as wins).

use crate::board::{Board, Pos, Stone};
use crate::game::Move;

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check whether the most recently placed move wins.
///
/// Scans only the four lines through the move, so the cost is bounded by
/// 4 directions x 8 probes regardless of board population.
#[inline]
pub fn check_win(board: &Board, last_move: Move) -> bool {
    has_five_at(board, last_move.pos, last_move.player)
}

/// Five-in-a-row check at a specific position. No allocation; each side of
/// each axis is probed at most 4 cells, which is all a five can need.
pub fn has_five_at(board: &Board, pos: Pos, color: Stone) -> bool {
    for &(dr, dc) in &DIRECTIONS {
        let mut count = 1i32;
        // Positive direction
        for i in 1..=4 {
            let r = i32::from(pos.row) + dr * i;
            let c = i32::from(pos.col) + dc * i;
            if !Pos::is_valid(r, c) || board.get(Pos::new(r as u8, c as u8)) != color {
                break;
            }
            count += 1;
        }
        // Negative direction
        for i in 1..=4 {
            let r = i32::from(pos.row) - dr * i;
            let c = i32::from(pos.col) - dc * i;
            if !Pos::is_valid(r, c) || board.get(Pos::new(r as u8, c as u8)) != color {
                break;
            }
            count += 1;
        }
        if count >= 5 {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_line(board: &mut Board, start: (u8, u8), step: (i8, i8), len: u8, stone: Stone) {
        for i in 0..len {
            let r = (start.0 as i8 + step.0 * i as i8) as u8;
            let c = (start.1 as i8 + step.1 * i as i8) as u8;
            board.set_stone(Pos::new(r, c), stone);
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        place_line(&mut board, (7, 3), (0, 1), 5, Stone::Black);
        assert!(has_five_at(&board, Pos::new(7, 5), Stone::Black));
        assert!(!has_five_at(&board, Pos::new(7, 5), Stone::White));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        place_line(&mut board, (3, 7), (1, 0), 5, Stone::White);
        assert!(has_five_at(&board, Pos::new(3, 7), Stone::White));
    }

    #[test]
    fn test_five_in_row_diagonal_se() {
        let mut board = Board::new();
        place_line(&mut board, (4, 4), (1, 1), 5, Stone::Black);
        assert!(has_five_at(&board, Pos::new(8, 8), Stone::Black));
    }

    #[test]
    fn test_five_in_row_diagonal_sw() {
        let mut board = Board::new();
        place_line(&mut board, (4, 10), (1, -1), 5, Stone::Black);
        assert!(has_five_at(&board, Pos::new(6, 8), Stone::Black));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        place_line(&mut board, (7, 3), (0, 1), 4, Stone::Black);
        for col in 3..7 {
            assert!(!has_five_at(&board, Pos::new(7, col), Stone::Black));
        }
    }

    #[test]
    fn test_four_blocked_by_opponent_not_win() {
        let mut board = Board::new();
        place_line(&mut board, (7, 3), (0, 1), 4, Stone::Black);
        board.set_stone(Pos::new(7, 2), Stone::White);
        board.set_stone(Pos::new(7, 7), Stone::White);
        assert!(!has_five_at(&board, Pos::new(7, 4), Stone::Black));
    }

    #[test]
    fn test_overline_also_wins() {
        let mut board = Board::new();
        place_line(&mut board, (7, 3), (0, 1), 6, Stone::Black);
        assert!(has_five_at(&board, Pos::new(7, 5), Stone::Black));
    }

    #[test]
    fn test_long_run_detected_anywhere_inside() {
        // The scan probes at most 4 cells per side, which is still enough
        // to see a five from any cell of an arbitrarily long run.
        let mut board = Board::new();
        place_line(&mut board, (7, 0), (0, 1), 15, Stone::Black);
        for col in 0..15 {
            assert!(has_five_at(&board, Pos::new(7, col), Stone::Black));
        }
    }

    #[test]
    fn test_win_completed_in_middle_of_run() {
        let mut board = Board::new();
        // _BB_BB -> placing at the gap completes five
        place_line(&mut board, (7, 3), (0, 1), 2, Stone::Black);
        place_line(&mut board, (7, 6), (0, 1), 2, Stone::Black);
        board.set_stone(Pos::new(7, 5), Stone::Black);
        assert!(has_five_at(&board, Pos::new(7, 5), Stone::Black));
    }

    #[test]
    fn test_five_at_board_edge() {
        let mut board = Board::new();
        place_line(&mut board, (14, 0), (0, 1), 5, Stone::Black);
        assert!(has_five_at(&board, Pos::new(14, 0), Stone::Black));
    }

    #[test]
    fn test_five_at_corner_diagonal() {
        let mut board = Board::new();
        place_line(&mut board, (10, 10), (1, 1), 5, Stone::White);
        assert!(has_five_at(&board, Pos::new(14, 14), Stone::White));
    }

    #[test]
    fn test_check_win_uses_last_move() {
        let mut board = Board::new();
        place_line(&mut board, (7, 3), (0, 1), 5, Stone::Black);
        let mv = Move::new(Pos::new(7, 7), Stone::Black);
        assert!(check_win(&board, mv));
    }
}
