//! Match execution and game management.
//!
//! This module contains the core logic for running automated self-play
//! matches between two search configurations, including game execution,
//! progress tracking and result aggregation.

use indicatif::{ProgressBar, ProgressStyle};
use othello_core::disc::Disc;
use othello_core::game_state::GameState;
use othello_core::player::{Player, SearchPlayer};
use rand::Rng;
use std::time::Duration;

use crate::config::Config;
use crate::error::{MatchRunnerError, Result};
use crate::statistics::{MatchStatistics, MatchWinner};

/// Orchestrates and executes automated matches between two configurations.
///
/// The runner handles the complete lifecycle of a match: opening
/// randomization, game execution with alternating colors, and final result
/// reporting.
pub struct MatchRunner {
    stats: MatchStatistics,
}

impl Default for MatchRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchRunner {
    /// Create a new MatchRunner instance.
    pub fn new() -> Self {
        Self {
            stats: MatchStatistics::new(),
        }
    }

    /// Execute a complete match using the provided configuration.
    ///
    /// Engine 1 plays black in even-numbered games and white in odd-numbered
    /// games, so neither configuration keeps the first-move advantage.
    ///
    /// # Arguments
    ///
    /// * `config` - Match configuration.
    ///
    /// # Returns
    ///
    /// `Ok(())` on successful match completion.
    ///
    /// # Errors
    ///
    /// Returns a configuration error before any game starts when the
    /// configuration is invalid, or a game error if the core rejects a move.
    pub fn run_match(&mut self, config: &Config) -> Result<()> {
        config.validate()?;

        let bar = ProgressBar::new(config.games as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} games {msg}")
                .expect("progress template is static")
                .progress_chars("█▓░"),
        );

        for game_index in 0..config.games {
            let engine1_is_black = game_index % 2 == 0;
            let (winner, score) = self.play_game(config, engine1_is_black)?;
            self.stats.add_result(winner, score);

            bar.set_message(format!(
                "{}W/{}D/{}L",
                self.stats.engine1_wins, self.stats.draws, self.stats.engine2_wins
            ));
            bar.inc(1);
        }
        bar.finish_and_clear();

        self.stats
            .print_final_results(&config.engine1_name(), &config.engine2_name());
        Ok(())
    }

    /// Plays a single game and reports its outcome from engine 1's
    /// perspective.
    fn play_game(&self, config: &Config, engine1_is_black: bool) -> Result<(MatchWinner, i32)> {
        let mut game =
            GameState::new(config.size, config.size).map_err(MatchRunnerError::Config)?;

        play_random_opening(&mut game, config.opening)?;

        let max_time = config.time_limit.map(Duration::from_secs);
        let (black_depth, white_depth) = if engine1_is_black {
            (config.depth1, config.depth2)
        } else {
            (config.depth2, config.depth1)
        };
        let mut black = SearchPlayer::new(Disc::Black, black_depth, max_time);
        let mut white = SearchPlayer::new(Disc::White, white_depth, max_time);

        while !game.is_game_over() {
            let side = game.side_to_move();
            if !game.board().has_legal_moves(side) {
                game.make_pass().map_err(MatchRunnerError::Game)?;
                continue;
            }

            let sq = if side == Disc::Black {
                black.get_move(game.board())
            } else {
                white.get_move(game.board())
            };
            game.make_move(sq).map_err(MatchRunnerError::Game)?;
        }

        let (black_count, white_count) = game.score();
        let engine1_score = if engine1_is_black {
            black_count as i32 - white_count as i32
        } else {
            white_count as i32 - black_count as i32
        };

        let winner = match engine1_score {
            s if s > 0 => MatchWinner::Engine1,
            s if s < 0 => MatchWinner::Engine2,
            _ => MatchWinner::Draw,
        };
        Ok((winner, engine1_score))
    }
}

/// Plays up to `plies` uniformly random legal moves to diversify the games.
///
/// Forced passes are applied without consuming a ply; the opening stops
/// early if the random moves happen to end the game.
fn play_random_opening(game: &mut GameState, plies: u32) -> Result<()> {
    let mut rng = rand::rng();

    let mut played = 0;
    while played < plies && !game.is_game_over() {
        let side = game.side_to_move();
        if !game.board().has_legal_moves(side) {
            game.make_pass().map_err(MatchRunnerError::Game)?;
            continue;
        }

        let moves = game.board().legal_moves(side);
        let sq = moves[rng.random_range(0..moves.len())];
        game.make_move(sq).map_err(MatchRunnerError::Game)?;
        played += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_opening_places_discs() {
        let mut game = GameState::new(6, 6).unwrap();
        play_random_opening(&mut game, 3).unwrap();

        let placements = game
            .move_history()
            .iter()
            .filter(|(sq, _, _)| sq.is_some())
            .count();
        assert_eq!(placements, 3);
    }
}
