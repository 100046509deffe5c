//! Computer opponent with selectable difficulty
//!
//! The [`Ai`] owns a fixed stone color, the derived opponent color and an
//! injected random source, all immutable for its lifetime. Strategy
//! selection happens once at construction:
//!
//! 1. **Easy**: win or block an immediate five if possible, otherwise a
//!    random cell adjacent to existing stones.
//! 2. **Medium**: greedy one-ply evaluation over candidates at radius 2,
//!    offense weighted slightly above defense, random among ties.
//! 3. **Hard**: the same greedy score orders candidates for a depth-3
//!    minimax with alpha-beta pruning.
//!
//! `get_move` mutates the board only transiently; it is restored before
//! returning. The driver must only call it while the game is undecided and
//! the board is not full.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::board::{Board, Pos, Stone, TOTAL_CELLS};
use crate::rules::has_five_at;
use crate::search::{self, neighbor_moves, weighted_score, SearchConfig};

/// AI difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// AI opponent
pub struct Ai {
    difficulty: Difficulty,
    player: Stone,
    opponent: Stone,
    config: SearchConfig,
    rng: StdRng,
}

impl Ai {
    /// Create an AI playing `player` with an entropy-seeded random source
    pub fn new(difficulty: Difficulty, player: Stone) -> Self {
        Self::with_rng(difficulty, player, StdRng::from_entropy())
    }

    /// Create an AI with a fixed seed for reproducible play
    pub fn with_seed(difficulty: Difficulty, player: Stone, seed: u64) -> Self {
        Self::with_rng(difficulty, player, StdRng::seed_from_u64(seed))
    }

    fn with_rng(difficulty: Difficulty, player: Stone, rng: StdRng) -> Self {
        debug_assert!(player != Stone::Empty);
        Self {
            difficulty,
            player,
            opponent: player.opponent(),
            config: SearchConfig::default(),
            rng,
        }
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    pub fn player(&self) -> Stone {
        self.player
    }

    /// Choose a move for the current position.
    ///
    /// The board is borrowed mutably as search scratch space but is always
    /// restored before this returns.
    pub fn get_move(&mut self, board: &mut Board) -> Pos {
        let start = Instant::now();
        let pos = match self.difficulty {
            Difficulty::Easy => self.easy_move(board),
            Difficulty::Medium => self.medium_move(board),
            Difficulty::Hard => self.hard_move(board),
        };
        debug!(
            difficulty = ?self.difficulty,
            row = pos.row,
            col = pos.col,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "ai move chosen"
        );
        pos
    }

    /// Easy: win or block if a five is one move away, otherwise random
    /// near existing stones, falling back to the center.
    fn easy_move(&mut self, board: &mut Board) -> Pos {
        if let Some(pos) = find_winning_move(board, self.player) {
            return pos;
        }
        if let Some(pos) = find_winning_move(board, self.opponent) {
            return pos;
        }

        let neighbors = neighbor_moves(board, 1);
        if let Some(&pos) = neighbors.choose(&mut self.rng) {
            return pos;
        }

        let center = Pos::center();
        if board.is_valid_move(center) {
            return center;
        }
        self.random_move(board)
    }

    /// Medium: greedy single-move evaluation, uniform among tied maxima
    fn medium_move(&mut self, board: &mut Board) -> Pos {
        let candidates = neighbor_moves(board, 2);
        if candidates.is_empty() {
            return Pos::center();
        }

        let mut best_score = i32::MIN;
        let mut best_moves: Vec<Pos> = Vec::new();
        for pos in candidates {
            let score = weighted_score(board, pos, self.player);
            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(pos);
            } else if score == best_score {
                best_moves.push(pos);
            }
        }

        best_moves
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_else(Pos::center)
    }

    /// Hard: minimax with alpha-beta pruning
    fn hard_move(&mut self, board: &mut Board) -> Pos {
        let result = search::find_best_move(board, self.player, self.config);
        debug!(
            nodes = result.nodes,
            score = result.score,
            "minimax search finished"
        );
        match result.best_move {
            Some(pos) => pos,
            None => {
                let center = Pos::center();
                if board.is_valid_move(center) {
                    center
                } else {
                    self.random_move(board)
                }
            }
        }
    }

    /// Uniformly random empty cell anywhere on the board
    fn random_move(&mut self, board: &Board) -> Pos {
        let empties: Vec<Pos> = board.empty_positions().collect();
        empties
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_else(Pos::center)
    }
}

/// Exhaustive scan for a move that completes a five for `color`.
///
/// Each empty cell is tried with a scratch placement and reverted, so the
/// board is unchanged on return.
fn find_winning_move(board: &mut Board, color: Stone) -> Option<Pos> {
    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if !board.is_empty(pos) {
            continue;
        }
        board.set_stone(pos, color);
        let wins = has_five_at(board, pos, color);
        board.remove_stone(pos);
        if wins {
            return Some(pos);
        }
    }
    None
}
