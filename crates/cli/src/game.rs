//! Match loop for the Othello CLI.
//!
//! Alternates the two seats, announces forced passes, retries the same
//! player on an illegal move, and reports the final result together with
//! each engine seat's average decision time. The core performs no I/O of
//! its own; everything printed here is derived by querying the game state.

use std::cmp::Ordering;

use colored::Colorize;
use num_format::{Locale, ToFormattedString};
use othello_core::disc::Disc;
use othello_core::game_state::GameState;
use othello_core::player::Player;

use crate::ui;

/// Runs one game to completion.
///
/// # Arguments
/// * `game` - The game state to play out.
/// * `black` - The seat playing the black discs.
/// * `white` - The seat playing the white discs.
pub fn run(mut game: GameState, mut black: Box<dyn Player>, mut white: Box<dyn Player>) {
    loop {
        ui::print_board(&game);
        println!();

        if game.is_game_over() {
            break;
        }

        let side = game.side_to_move();
        if !game.board().has_legal_moves(side) {
            println!("{} can't move\n", ui::side_name(side));
            game.make_pass()
                .expect("pass is forced when no legal move exists");
            continue;
        }

        let player = if side == Disc::Black {
            black.as_mut()
        } else {
            white.as_mut()
        };

        loop {
            let sq = player.get_move(game.board());
            if game.make_move(sq).is_ok() {
                println!("{} plays {}", ui::side_name(side), sq.to_string().bright_cyan());
                break;
            }
            println!("{}", "Invalid move".bright_red());
        }

        if let Some(result) = player.last_search() {
            println!(
                "depth {} | score {:+} | {} nodes | {:.3}s",
                result.depth,
                result.score,
                result.n_nodes.to_formatted_string(&Locale::en),
                result.elapsed.as_secs_f64()
            );
        }
        println!();
    }

    announce_result(&game);
    report_search_times(&[black.as_ref(), white.as_ref()]);
}

fn announce_result(game: &GameState) {
    let (black_count, white_count) = game.score();
    match black_count.cmp(&white_count) {
        Ordering::Greater => println!("{}", "Black wins!".bright_green()),
        Ordering::Less => println!("{}", "White wins!".bright_yellow()),
        Ordering::Equal => println!("{}", "Draw".bright_cyan()),
    }
    println!("Final score: Black {black_count} - White {white_count}");
}

fn report_search_times(players: &[&dyn Player]) {
    // Engine seats only; human seats have no decision statistics.
    for player in players {
        if let Some(average) = player.average_search_time() {
            println!(
                "{} minimax average decision time: {:.4}s",
                ui::side_name(player.disc()),
                average.as_secs_f64()
            );
        }
    }
}
