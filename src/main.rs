mod cli;
mod config;

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use rchess::game::{Game, MoveError};
use rchess::ui::input::{parse_command, Command};
use rchess::ui::renderer::BoardRenderer;

fn main() -> ExitCode {
    // Initialize logger
    let env = Env::default().filter_or("RCHESS_LOG_LEVEL", "info");
    env_logger::Builder::from_env(env).init();

    let cli = cli::Cli::parse();
    let cfg_path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os("RCHESS_CONFIG_PATH").map(|s| s.into()));
    let cfg = match config::Config::load(cfg_path.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let renderer = BoardRenderer {
        empty: cfg.empty_square,
        show_files: cfg.show_coordinates,
    };

    let result = match cli.command {
        Some(cli::Commands::Show) => {
            print!("{}", renderer.render(&Game::new().snapshot()));
            Ok(())
        }
        Some(cli::Commands::Play { snapshot }) => play(&cfg, &renderer, snapshot),
        None => play(&cfg, &renderer, false),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn play(cfg: &config::Config, renderer: &BoardRenderer, print_snapshot: bool) -> Result<(), Box<dyn Error>> {
    let mut game = Game::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();
    info!("new game started");

    loop {
        let snapshot = game.snapshot();
        print!("{}", renderer.render(&snapshot));
        if cfg.show_captures {
            print!("{}", renderer.render_score(&snapshot));
        }
        println!("{}", renderer.render_prompt(&game));
        stdout.flush()?;

        let Some(line) = lines.next() else {
            info!("input closed");
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (from, to) = match parse_command(&line, &cfg.quit_command) {
            Ok(Command::Quit) => break,
            Ok(Command::Move(from, to)) => (from, to),
            Err(e) => {
                println!("Invalid input ({}). Try again.", e);
                continue;
            }
        };

        let mover = game.side_to_move();
        match game.attempt_move(from, to) {
            Ok(Some(captured)) => println!("{}", renderer.render_capture(mover, captured)),
            Ok(None) => {}
            Err(MoveError::InvalidSelection) => println!("Invalid move. Try again."),
            Err(MoveError::IllegalMove) => println!("Illegal move. Try again."),
            Err(e @ MoveError::GameOver) => return Err(e.into()),
        }
    }

    game.quit();
    info!("game over");
    if print_snapshot {
        print!("{}", serde_yaml::to_string(&game.snapshot())?);
    }
    Ok(())
}
