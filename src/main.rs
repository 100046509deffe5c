use anyhow::Result;

use gobang::{
    ui::{self, PlayerInput},
    Ai, Difficulty, GameStatus, Session, Stone,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Welcome to Gobang (five in a row, 15x15)\n");

    println!("1) Two players");
    println!("2) Play against the computer");
    let mode = ui::read_menu_choice("Mode", 2)?;

    // The computer always takes White; the human moves first as Black.
    let mut ai = if mode == 2 {
        println!("\n1) Easy");
        println!("2) Medium");
        println!("3) Hard");
        let difficulty = match ui::read_menu_choice("Difficulty", 3)? {
            1 => Difficulty::Easy,
            2 => Difficulty::Medium,
            _ => Difficulty::Hard,
        };
        Some(Ai::new(difficulty, Stone::White))
    } else {
        None
    };

    let mut session = Session::new();

    loop {
        ui::draw_board(session.board())?;
        ui::draw_status(session.state());

        match session.state().status() {
            GameStatus::Playing => {
                let current = session.state().current_player();

                let (row, col) = if let Some(engine) =
                    ai.as_mut().filter(|a| a.player() == current)
                {
                    println!("Computer is thinking...");
                    let pos = engine.get_move(session.board_mut());
                    println!("Computer plays {} {}", pos.row, pos.col);
                    (pos.row as usize, pos.col as usize)
                } else {
                    match ui::read_move(current)? {
                        PlayerInput::Move(row, col) => (row, col),
                        PlayerInput::Quit => {
                            println!("Thanks for playing.");
                            return Ok(());
                        }
                    }
                };

                if let Err(err) = session.make_move(row, col) {
                    ui::show_error(&err);
                    continue;
                }
            }
            GameStatus::Won | GameStatus::Draw => {
                ui::draw_scores(session.state());
                if ui::confirm("Play again?")? {
                    session.reset();
                } else {
                    println!("Thanks for playing.");
                    return Ok(());
                }
            }
        }
    }
}
