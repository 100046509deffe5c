//! Console rendering and input
//!
//! Plain line-oriented terminal front end: the board is reprinted after
//! every move with row/column indices, stones colored through crossterm.
//! Input is read from stdin one line at a time; malformed lines are
//! reported and the caller re-prompts.

use std::io::{stdin, stdout, Write};

use anyhow::Result;
use crossterm::style::Stylize;

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::game::{GameState, GameStatus};

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// A move given as `row col`
    Move(usize, usize),
    /// The player asked to leave the game
    Quit,
}

/// Print the board with row and column indices.
pub fn draw_board(board: &Board) -> Result<()> {
    let mut out = stdout();

    write!(out, "\n   ")?;
    for col in 0..BOARD_SIZE {
        write!(out, "{col:>3}")?;
    }
    writeln!(out)?;

    for row in 0..BOARD_SIZE {
        write!(out, "{row:>3}")?;
        for col in 0..BOARD_SIZE {
            let pos = Pos::new(row as u8, col as u8);
            // Width formatting does not reach through styled content, so
            // pad each 3-wide cell by hand.
            match board.get(pos) {
                Stone::Black => write!(out, "  {}", "X".dark_red().bold())?,
                Stone::White => write!(out, "  {}", "O".cyan().bold())?,
                Stone::Empty => write!(out, "  {}", ".".dark_grey())?,
            }
        }
        writeln!(out)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Print whose turn it is, or the result if the game is over.
pub fn draw_status(state: &GameState) {
    match state.status() {
        GameStatus::Playing => {
            println!("{} to move.", stone_name(state.current_player()));
        }
        GameStatus::Won => match state.winner() {
            Some(winner) => println!("{}", format!("{} wins!", stone_name(winner)).bold()),
            None => println!("Game over."),
        },
        GameStatus::Draw => println!("{}", "Board full, game drawn.".bold()),
    }
}

/// Print the session score line.
pub fn draw_scores(state: &GameState) {
    println!(
        "Score  Black {} : {} White",
        state.score(Stone::Black),
        state.score(Stone::White)
    );
}

/// Prompt for and parse one move.
///
/// Accepts `row col` (0-indexed) or `quit`/`q`. Keeps prompting until the
/// line parses; legality against the board is the caller's concern.
pub fn read_move(player: Stone) -> Result<PlayerInput> {
    let stdin = stdin();
    loop {
        print!("{} move (row col, or 'quit') > ", stone_name(player));
        stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            // stdin closed
            return Ok(PlayerInput::Quit);
        }
        match parse_move(&line) {
            Some(input) => return Ok(input),
            None => println!("Enter two numbers between 0 and {}.", BOARD_SIZE - 1),
        }
    }
}

/// Parse a single input line. None means the line was malformed.
pub fn parse_move(line: &str) -> Option<PlayerInput> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("q") {
        return Some(PlayerInput::Quit);
    }

    let mut parts = trimmed.split_whitespace();
    let row = parts.next()?.parse::<usize>().ok()?;
    let col = parts.next()?.parse::<usize>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(PlayerInput::Move(row, col))
}

/// Prompt a yes/no question; keeps prompting until the answer parses.
pub fn confirm(question: &str) -> Result<bool> {
    let stdin = stdin();
    loop {
        print!("{question} y/n: ");
        stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match line.trim().to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

/// Read one numbered menu choice in `1..=max`.
pub fn read_menu_choice(prompt: &str, max: usize) -> Result<usize> {
    let stdin = stdin();
    loop {
        print!("{prompt} [1-{max}]: ");
        stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            return Ok(1);
        }
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(n),
            _ => println!("Enter a number between 1 and {max}."),
        }
    }
}

pub fn show_error(err: &impl std::fmt::Display) {
    println!("{}", format!("{err}").dark_yellow());
}

fn stone_name(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "Black (X)",
        Stone::White => "White (O)",
        Stone::Empty => "Nobody",
    }
}
