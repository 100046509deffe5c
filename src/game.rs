//! Game flow: turn order, win/draw resolution and session scores

use std::fmt;

use tracing::info;

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::error::GameError;
use crate::rules::check_win;

/// A single placed move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub player: Stone,
}

impl Move {
    #[inline]
    pub fn new(pos: Pos, player: Stone) -> Self {
        debug_assert!(player != Stone::Empty);
        Self { pos, player }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({}, {})", self.player, self.pos.row, self.pos.col)
    }
}

/// Current phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Draw,
}

/// Turn order, result and session scores.
///
/// Scores count wins per color and survive `reset`, so a session of
/// consecutive games keeps a running tally.
#[derive(Debug, Clone)]
pub struct GameState {
    current: Stone,
    status: GameStatus,
    winner: Option<Stone>,
    history: Vec<Move>,
    /// Wins per color: [black, white]
    scores: [u32; 2],
}

impl GameState {
    /// Fresh state with Black to move
    pub fn new() -> Self {
        Self {
            current: Stone::Black,
            status: GameStatus::Playing,
            winner: None,
            history: Vec::new(),
            scores: [0, 0],
        }
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Wins recorded for a color this session
    pub fn score(&self, color: Stone) -> u32 {
        match color {
            Stone::Black => self.scores[0],
            Stone::White => self.scores[1],
            Stone::Empty => 0,
        }
    }

    /// Append a move to the history
    pub fn record_move(&mut self, mv: Move) {
        self.history.push(mv);
    }

    /// Mark the game won by `winner` and bump their session score
    pub fn set_winner(&mut self, winner: Stone) {
        self.status = GameStatus::Won;
        self.winner = Some(winner);
        match winner {
            Stone::Black => self.scores[0] += 1,
            Stone::White => self.scores[1] += 1,
            Stone::Empty => {}
        }
    }

    /// Mark the game drawn. The winner stays None and no score changes.
    pub fn set_draw(&mut self) {
        self.status = GameStatus::Draw;
    }

    pub fn switch_player(&mut self) {
        self.current = self.current.opponent();
    }

    /// Start a new game, keeping the session scores
    pub fn reset(&mut self) {
        self.current = Stone::Black;
        self.status = GameStatus::Playing;
        self.winner = None;
        self.history.clear();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// A board plus its game state, driving one session of games.
#[derive(Debug, Clone, Default)]
pub struct Session {
    board: Board,
    state: GameState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play the current player's stone at (row, col).
    ///
    /// Validates bounds and occupancy, then resolves the move: a completed
    /// five ends the game won, a full board without a five ends it drawn,
    /// otherwise the turn passes to the opponent.
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        if self.state.status != GameStatus::Playing {
            return Err(GameError::GameOver);
        }
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::InvalidMove { row, col });
        }

        let pos = Pos::new(row as u8, col as u8);
        let player = self.state.current;
        self.board.place(pos, player)?;

        let mv = Move::new(pos, player);
        self.state.record_move(mv);

        if check_win(&self.board, mv) {
            info!(winner = ?player, moves = self.state.history().len(), "game won");
            self.state.set_winner(player);
        } else if self.board.is_full() {
            info!("game drawn, board full");
            self.state.set_draw();
        } else {
            self.state.switch_player();
        }
        Ok(())
    }

    /// Clear the board and start a new game; scores carry over
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.state.reset();
    }
}
