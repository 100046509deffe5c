//! Pattern scores for Gobang evaluation
//!
//! The table maps (run length, open-endedness) to a heuristic weight.
//! A completed five is scored with a single fixed constant regardless of
//! open ends; everything below is an order of magnitude apart so a longer
//! run always dominates any number of shorter ones.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - immediate win
    pub const FIVE: i32 = 100_000;

    /// Open four: _OOOO_ (both ends open)
    pub const OPEN_FOUR: i32 = 10_000;
    /// Closed four: XOOOO_ (one end blocked)
    pub const CLOSED_FOUR: i32 = 1_000;

    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 1_000;
    /// Closed three: XOOO_
    pub const CLOSED_THREE: i32 = 100;

    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 100;
    /// Closed two: XOO_
    pub const CLOSED_TWO: i32 = 10;

    /// Lone stone with room on both sides
    pub const OPEN_ONE: i32 = 10;
    /// Lone stone with one side blocked
    pub const CLOSED_ONE: i32 = 1;
}

/// Look up the score for a run of `total` stones with `open_ends` empty
/// ends (0, 1 or 2). Runs of 5+ are the fixed win score; shorter runs are
/// clamped to length 4 and scored by their open-end tier. A fully blocked
/// run scores nothing.
pub fn run_score(total: i32, open_ends: i32) -> i32 {
    if total >= 5 {
        return PatternScore::FIVE;
    }
    if open_ends <= 0 {
        return 0;
    }
    let open = open_ends >= 2;
    match total.min(4) {
        4 => {
            if open {
                PatternScore::OPEN_FOUR
            } else {
                PatternScore::CLOSED_FOUR
            }
        }
        3 => {
            if open {
                PatternScore::OPEN_THREE
            } else {
                PatternScore::CLOSED_THREE
            }
        }
        2 => {
            if open {
                PatternScore::OPEN_TWO
            } else {
                PatternScore::CLOSED_TWO
            }
        }
        1 => {
            if open {
                PatternScore::OPEN_ONE
            } else {
                PatternScore::CLOSED_ONE
            }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::CLOSED_FOUR);
        assert!(PatternScore::OPEN_THREE > PatternScore::CLOSED_THREE);
        assert!(PatternScore::OPEN_TWO > PatternScore::CLOSED_TWO);
        assert!(PatternScore::OPEN_ONE > PatternScore::CLOSED_ONE);
    }

    #[test]
    fn test_run_score_five_ignores_open_ends() {
        assert_eq!(run_score(5, 0), PatternScore::FIVE);
        assert_eq!(run_score(5, 2), PatternScore::FIVE);
        assert_eq!(run_score(7, 1), PatternScore::FIVE);
    }

    #[test]
    fn test_run_score_blocked_both_ends_is_zero() {
        for total in 1..=4 {
            assert_eq!(run_score(total, 0), 0);
        }
    }

    #[test]
    fn test_run_score_clamps_at_four() {
        // A run of 4 is the largest non-winning tier
        assert_eq!(run_score(4, 2), PatternScore::OPEN_FOUR);
        assert_eq!(run_score(4, 1), PatternScore::CLOSED_FOUR);
    }

    #[test]
    fn test_run_score_open_beats_half_open() {
        for total in 1..=4 {
            assert!(run_score(total, 2) > run_score(total, 1));
        }
    }
}
