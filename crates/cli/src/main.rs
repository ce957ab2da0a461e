mod game;
mod ui;

use std::process;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::game_state::GameState;
use othello_core::player::{Player, SearchPlayer};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SeatKind {
    /// Moves are typed at the prompt.
    Human,
    /// Moves are chosen by the minimax engine.
    Minimax,
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Play Othello on an NxN board between humans and minimax engines"
)]
struct Cli {
    /// Who plays the black discs (moves first).
    #[arg(value_enum)]
    player1: SeatKind,

    /// Who plays the white discs.
    #[arg(value_enum)]
    player2: SeatKind,

    /// Number of rows and columns of the board.
    #[arg(short = 's', long, default_value_t = 4, value_parser = parse_board_size)]
    size: usize,

    /// Maximum depth the minimax engine simulates to, in placement plies.
    #[arg(short = 'd', long = "depth", default_value_t = 5)]
    max_depth: u32,

    /// Soft time limit per minimax decision in seconds; 0 disables the limit.
    #[arg(short = 't', long = "time", default_value_t = 10)]
    max_time: u64,
}

fn parse_board_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    Board::new(size, size).map(|_| size)
}

fn make_player(kind: SeatKind, disc: Disc, args: &Cli) -> Box<dyn Player> {
    match kind {
        SeatKind::Human => Box::new(ui::HumanPlayer::new(disc)),
        SeatKind::Minimax => {
            let max_time = (args.max_time > 0).then(|| Duration::from_secs(args.max_time));
            Box::new(SearchPlayer::new(disc, args.max_depth, max_time))
        }
    }
}

fn main() {
    let args = Cli::parse();

    let game = match GameState::new(args.size, args.size) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    let black = make_player(args.player1, Disc::Black, &args);
    let white = make_player(args.player2, Disc::White, &args);

    game::run(game, black, white);
}
