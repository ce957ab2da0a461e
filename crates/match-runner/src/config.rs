//! Configuration management for the match runner.
//!
//! This module handles command-line argument parsing and validation for the
//! automated self-play match tool.

use clap::Parser;
use othello_core::board::Board;

use crate::error::{MatchRunnerError, Result};

/// Configuration for running automated matches between two search setups.
///
/// Both seats are driven by the minimax engine; they differ only in their
/// depth budgets. Colors alternate each game so neither configuration keeps
/// the first-move advantage.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Run automated Othello matches between two minimax configurations"
)]
pub struct Config {
    /// Number of games to play; colors alternate each game.
    #[arg(short, long, default_value_t = 10)]
    pub games: u32,

    /// Number of rows and columns of the board.
    #[arg(short, long, default_value_t = 8, value_parser = parse_board_size)]
    pub size: usize,

    /// Search depth for the first configuration, in placement plies.
    #[arg(long, default_value_t = 5)]
    pub depth1: u32,

    /// Search depth for the second configuration, in placement plies.
    #[arg(long, default_value_t = 5)]
    pub depth2: u32,

    /// Soft per-decision time limit in seconds for both configurations.
    #[arg(short, long)]
    pub time_limit: Option<u64>,

    /// Number of random plies played before the engines take over.
    #[arg(short, long, default_value_t = 2)]
    pub opening: u32,
}

fn parse_board_size(s: &str) -> std::result::Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    Board::new(size, size).map(|_| size)
}

impl Config {
    /// Parses the command line into a `Config`.
    ///
    /// Invalid flag values exit the process with a nonzero status before any
    /// game state exists, as clap reports them itself.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validates cross-field constraints the flag parsers cannot see.
    ///
    /// # Returns
    ///
    /// `Ok(())` when the configuration can produce a meaningful match.
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(MatchRunnerError::Config(
                "at least one game is required".to_string(),
            ));
        }

        let free_cells = (self.size * self.size - 4) as u32;
        if self.opening >= free_cells {
            return Err(MatchRunnerError::Config(format!(
                "{} opening plies leave no room for the engines on a {}x{} board",
                self.opening, self.size, self.size
            )));
        }

        Ok(())
    }

    /// Returns the display name of the first configuration.
    pub fn engine1_name(&self) -> String {
        format!("engine1-d{}", self.depth1)
    }

    /// Returns the display name of the second configuration.
    pub fn engine2_name(&self) -> String {
        format!("engine2-d{}", self.depth2)
    }
}
