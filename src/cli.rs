use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rchess", version, about = "Two-player console chess with capture tracking")]
pub struct Cli {
    /// YAML config file; falls back to $RCHESS_CONFIG_PATH.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a game, reading moves like `e2 e4` from stdin (the default).
    Play {
        /// Print the final position as YAML when the game ends.
        #[arg(long)]
        snapshot: bool,
    },
    /// Print the starting position and exit.
    Show,
}
