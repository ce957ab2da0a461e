//! Player dispatch.
//!
//! A player is anything that can produce a move for a board. The search
//! driven variant lives here because it owns the engine and its timing
//! statistics; interactive variants live with the front-end that owns the
//! input source, and implement the same trait.

use std::time::{Duration, Instant};

use crate::board::Board;
use crate::disc::Disc;
use crate::search::{Search, SearchResult};
use crate::square::Square;
use crate::types::Depth;

/// Polymorphic move producer for one seat of a match.
///
/// The match loop validates legality and re-asks the same player on
/// rejection, so implementations may return moves without validating them.
pub trait Player {
    /// Returns the side this player plays.
    fn disc(&self) -> Disc;

    /// Produces the player's next move for the given board.
    ///
    /// # Arguments
    ///
    /// * `board` - The current board position.
    ///
    /// # Returns
    ///
    /// The move the player decided to make.
    fn get_move(&mut self, board: &Board) -> Square;

    /// Returns the result of this player's most recent search decision, when
    /// the player is search driven.
    fn last_search(&self) -> Option<&SearchResult> {
        None
    }

    /// Returns the average wall-clock time per decision, when the player is
    /// search driven and has made at least one decision.
    fn average_search_time(&self) -> Option<Duration> {
        None
    }
}

/// A player that decides its moves with the minimax search engine.
///
/// Keeps running wall-clock statistics across decisions; the statistics are
/// only reported, never consulted by the search itself.
pub struct SearchPlayer {
    search: Search,
    last_result: Option<SearchResult>,
    total_search_time: Duration,
    search_count: u32,
}

impl SearchPlayer {
    /// Creates a search-driven player.
    ///
    /// # Arguments
    ///
    /// * `disc` - The side this player plays.
    /// * `max_depth` - Depth budget per decision.
    /// * `max_time` - Optional soft wall-clock budget per decision.
    pub fn new(disc: Disc, max_depth: Depth, max_time: Option<Duration>) -> Self {
        Self {
            search: Search::new(disc, max_depth, max_time),
            last_result: None,
            total_search_time: Duration::ZERO,
            search_count: 0,
        }
    }
}

impl Player for SearchPlayer {
    fn disc(&self) -> Disc {
        self.search.disc()
    }

    /// Runs a search decision and records its wall-clock time.
    ///
    /// Precondition: this player's side has at least one legal move; the
    /// match loop checks `Board::has_legal_moves` before asking.
    fn get_move(&mut self, board: &Board) -> Square {
        let start = Instant::now();
        let result = self.search.run(board);
        self.total_search_time += start.elapsed();
        self.search_count += 1;

        let best = result
            .best_move
            .expect("move selection requires a legal move");
        self.last_result = Some(result);
        best
    }

    fn last_search(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    fn average_search_time(&self) -> Option<Duration> {
        (self.search_count > 0).then(|| self.total_search_time / self.search_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    #[test]
    fn test_search_player_plays_an_opening_move() {
        let board = Board::new(4, 4).unwrap();
        let mut player = SearchPlayer::new(Disc::Black, 1, None);

        let sq = player.get_move(&board);
        assert!(board.legal_moves(Disc::Black).contains(&sq));
        assert_eq!(sq, Square::new(1, 0));
    }

    #[test]
    fn test_statistics_accumulate() {
        let board = Board::new(4, 4).unwrap();
        let mut player = SearchPlayer::new(Disc::Black, 2, None);
        assert!(player.average_search_time().is_none());

        player.get_move(&board);
        assert_eq!(player.search_count, 1);
        assert!(player.average_search_time().is_some());
        assert!(player.last_search().is_some());
    }
}
