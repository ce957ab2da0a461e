//! Terminal rendering and interactive input for the Othello CLI.
//!
//! The board printer adapts to any supported board size, highlights the
//! last move, and marks the current player's legal squares. The human
//! player reads squares in algebraic notation through a rustyline prompt;
//! legality is checked by the match loop, which re-asks on rejection.

use std::process;

use colored::Colorize;
use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::game_state::GameState;
use othello_core::player::Player;
use othello_core::square::Square;
use rustyline::{DefaultEditor, error::ReadlineError};

/// Returns the display name for a side.
pub fn side_name(disc: Disc) -> &'static str {
    match disc {
        Disc::Black => "Black",
        Disc::White => "White",
        Disc::Empty => "Nobody",
    }
}

/// Prints a colored representation of the board to the terminal.
///
/// Legal squares for the side to move are shown as dots, and the most
/// recently played square is highlighted. Score and turn information is
/// shown beside the grid.
pub fn print_board(game: &GameState) {
    let board = game.board();
    let side = game.side_to_move();
    let last_move = game.last_move();
    let (black_count, white_count) = game.score();

    // Header: column letters
    print!("     ");
    for col in 0..board.cols() {
        print!("  {} ", (b'a' + col as u8) as char);
    }
    println!();

    print_border(board, '┌', '┬', '┐');

    for row in 0..board.rows() {
        print!("  {:>2} │", row + 1);

        for col in 0..board.cols() {
            let sq = Square::new(col, row);
            let disc = board.disc_at(sq);
            let is_legal = !game.is_game_over() && board.is_legal_move(sq, side);
            let is_last_move = last_move == Some(sq);

            let black_cell = format!(" {} ", board.symbol(Disc::Black));
            let white_cell = format!(" {} ", board.symbol(Disc::White));
            let symbol = match disc {
                Disc::Black if is_last_move => black_cell.on_bright_black().bright_green(),
                Disc::White if is_last_move => white_cell.on_bright_black().bright_yellow(),
                Disc::Black => black_cell.bright_green(),
                Disc::White => white_cell.bright_yellow(),
                Disc::Empty if is_legal => " · ".bright_cyan(),
                Disc::Empty => "   ".black(),
            };
            print!("{symbol}│");
        }

        // Side information
        match row {
            0 => {
                if game.is_game_over() {
                    println!("   {}", "*** Game Over ***".bright_red());
                } else {
                    let turn = match side {
                        Disc::Black => "Black's turn".bright_green(),
                        Disc::White => "White's turn".bright_yellow(),
                        Disc::Empty => unreachable!(),
                    };
                    println!("   {turn}");
                }
            }
            1 => println!(
                "   Black: {}",
                format!("{black_count:2}").bright_green()
            ),
            2 => println!(
                "   White: {}",
                format!("{white_count:2}").bright_yellow()
            ),
            _ => println!(),
        }

        if row < board.rows() - 1 {
            print_border(board, '├', '┼', '┤');
        }
    }

    print_border(board, '└', '┴', '┘');
}

fn print_border(board: &Board, left: char, mid: char, right: char) {
    print!("     {left}");
    for col in 0..board.cols() {
        print!("───");
        if col < board.cols() - 1 {
            print!("{mid}");
        }
    }
    println!("{right}");
}

/// A player whose moves are typed at an interactive prompt.
///
/// Only notation is handled here; an in-notation but illegal square is
/// returned as-is and rejected by the match loop, which asks again.
pub struct HumanPlayer {
    disc: Disc,
    editor: DefaultEditor,
}

impl HumanPlayer {
    /// Creates an interactive player for the given side.
    pub fn new(disc: Disc) -> Self {
        Self {
            disc,
            editor: DefaultEditor::new().unwrap(),
        }
    }
}

impl Player for HumanPlayer {
    fn disc(&self) -> Disc {
        self.disc
    }

    fn get_move(&mut self, _board: &Board) -> Square {
        let prompt = format!("{} move (e.g. b3): ", side_name(self.disc));
        loop {
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let _ = self.editor.add_history_entry(&line);
                    match line.parse::<Square>() {
                        Ok(sq) => return sq,
                        Err(_) => println!("Unknown square: {}", line.trim()),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    process::exit(0);
                }
                Err(err) => {
                    eprintln!("Input error: {err}");
                    process::exit(1);
                }
            }
        }
    }
}
