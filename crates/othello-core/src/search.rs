pub mod minimax_turn;
pub mod search_result;
pub mod time_budget;

use std::time::Duration;

use crate::board::Board;
use crate::disc::Disc;
use crate::types::{Depth, Score};

pub use minimax_turn::MinimaxTurn;
pub use search_result::SearchResult;
pub use time_budget::TimeBudget;

/// Plain minimax search engine for one side.
///
/// The search explores the game tree depth-first to a bounded depth,
/// alternating MIN/MAX turn roles, and evaluates leaves with the disc-count
/// differential `count(own) - count(opponent)`. Every simulated ply operates
/// on its own board copy, which is discarded once its subtree's value has
/// been folded into the parent; no state is shared across sibling branches.
pub struct Search {
    disc: Disc,
    opponent: Disc,
    max_depth: Depth,
    max_time: Option<Duration>,
    n_nodes: u64,
}

impl Search {
    /// Creates a search engine for the given side.
    ///
    /// # Arguments
    ///
    /// * `disc` - The side the engine searches for; must not be `Disc::Empty`.
    /// * `max_depth` - Depth budget, in plies where a disc is placed.
    /// * `max_time` - Optional soft wall-clock budget per decision.
    ///
    /// # Returns
    ///
    /// A new `Search` instance.
    pub fn new(disc: Disc, max_depth: Depth, max_time: Option<Duration>) -> Search {
        debug_assert!(disc != Disc::Empty, "Disc::Empty cannot search");
        Search {
            disc,
            opponent: disc.opposite(),
            max_depth,
            max_time,
            n_nodes: 0,
        }
    }

    /// Returns the side this engine searches for.
    pub fn disc(&self) -> Disc {
        self.disc
    }

    /// Returns the depth budget of this engine.
    pub fn max_depth(&self) -> Depth {
        self.max_depth
    }

    /// Selects the best move for the engine's side on the given board.
    ///
    /// Every legal move is evaluated in row-major scan order by cloning the
    /// board, applying the move and searching the reply tree with the
    /// opponent to move. The first move achieving the strictly greatest
    /// value wins; later equal-valued moves never replace the current best,
    /// which keeps decisions deterministic for a fixed depth.
    ///
    /// When a wall-clock budget is set it is consulted between top-level
    /// move evaluations once at least one move has been fully evaluated;
    /// remaining moves are then skipped and partially evaluated branches are
    /// never folded in.
    ///
    /// Precondition: the engine's side has at least one legal move. Callers
    /// check `Board::has_legal_moves` first; calling this without a legal
    /// move is a programming error.
    ///
    /// # Arguments
    ///
    /// * `board` - The position to decide on.
    ///
    /// # Returns
    ///
    /// The decision, including the chosen move, its value, and node/time
    /// statistics for this decision.
    pub fn run(&mut self, board: &Board) -> SearchResult {
        let moves = board.legal_moves(self.disc);
        debug_assert!(!moves.is_empty(), "move selection requires a legal move");

        self.n_nodes = 0;
        let clock = TimeBudget::start(self.max_time);

        let mut best_move = None;
        let mut best_value = Score::MIN;
        for sq in moves {
            if best_move.is_some() && clock.expired() {
                break;
            }

            let mut next = board.clone();
            next.make_move(sq, self.disc);
            let value = self.minimax(&next, self.max_depth, MinimaxTurn::Min, false);

            if value > best_value {
                best_move = Some(sq);
                best_value = value;
            }
        }

        SearchResult {
            score: best_value,
            best_move,
            n_nodes: self.n_nodes,
            depth: self.max_depth,
            elapsed: clock.elapsed(),
        }
    }

    /// Static evaluation: the engine's disc count minus the opponent's.
    fn evaluate(&self, board: &Board) -> Score {
        board.count_discs(self.disc) as Score - board.count_discs(self.opponent) as Score
    }

    /// Recursively plays out the position to find the value achievable under
    /// optimal adversarial play.
    ///
    /// A ply where the mover has no legal move is a forced pass: the
    /// recursion flips the turn role without consuming depth budget, since
    /// depth counts plies where a disc is placed. Two consecutive passes end
    /// the branch and return the static evaluation, as no count can change.
    ///
    /// # Arguments
    ///
    /// * `board` - The position for this ply; exclusively owned by it.
    /// * `depth` - Remaining depth budget.
    /// * `turn` - Whose perspective is optimized at this ply.
    /// * `opponent_passed` - Whether the previous ply was a forced pass.
    ///
    /// # Returns
    ///
    /// The optimal disc-count differential found below this ply.
    fn minimax(
        &mut self,
        board: &Board,
        depth: Depth,
        turn: MinimaxTurn,
        opponent_passed: bool,
    ) -> Score {
        self.n_nodes += 1;

        if depth == 0 {
            return self.evaluate(board);
        }

        let mover = match turn {
            MinimaxTurn::Max => self.disc,
            MinimaxTurn::Min => self.opponent,
        };

        if !board.has_legal_moves(mover) {
            if opponent_passed {
                return self.evaluate(board);
            }
            return self.minimax(board, depth, turn.switch(), true);
        }

        let mut value = match turn {
            MinimaxTurn::Max => Score::MIN,
            MinimaxTurn::Min => Score::MAX,
        };
        for sq in board.legal_moves(mover) {
            let mut next = board.clone();
            next.make_move(sq, mover);
            let child = self.minimax(&next, depth - 1, turn.switch(), false);
            value = match turn {
                MinimaxTurn::Max => value.max(child),
                MinimaxTurn::Min => value.min(child),
            };
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    #[test]
    fn test_depth_zero_is_static_evaluation() {
        let board = Board::new(4, 4).unwrap();
        let mut search = Search::new(Disc::Black, 0, None);
        assert_eq!(search.minimax(&board, 0, MinimaxTurn::Max, false), 0);
    }

    #[test]
    fn test_double_pass_returns_evaluation_immediately() {
        // A lone black disc: neither side can capture, so the branch is over
        // regardless of the remaining depth budget.
        let board = Board::from_string(
            4,
            4,
            "X---
             ----
             ----
             ----",
        )
        .unwrap();

        let mut search = Search::new(Disc::Black, 10, None);
        assert_eq!(search.minimax(&board, 10, MinimaxTurn::Max, false), 1);
        // Max passes, Min passes: exactly two pass plies, no move expansion.
        assert_eq!(search.n_nodes, 2);
    }

    #[test]
    fn test_forced_pass_keeps_depth_budget() {
        // Black must pass; White mops up with c1 and then neither side can
        // move. The pass plies consume no depth, so even a small budget sees
        // the final position: Black 0, White 3.
        let board = Board::from_string(
            4,
            4,
            "OX--
             ----
             ----
             ----",
        )
        .unwrap();

        let mut search = Search::new(Disc::Black, 3, None);
        assert_eq!(search.minimax(&board, 3, MinimaxTurn::Max, false), -3);
    }

    #[test]
    fn test_root_prefers_first_move_on_ties() {
        // All four opening moves on the symmetric start are equal in value,
        // so the first one in row-major scan order must win.
        let board = Board::new(4, 4).unwrap();

        let mut search = Search::new(Disc::Black, 1, None);
        let result = search.run(&board);
        assert_eq!(result.best_move, Some(Square::new(1, 0)));
        assert_eq!(result.score, 0);

        let mut shallow = Search::new(Disc::Black, 0, None);
        let result = shallow.run(&board);
        assert_eq!(result.best_move, Some(Square::new(1, 0)));
        // With no reply lookahead the value is the differential of the
        // resulting board itself: 4 black discs against 1 white.
        assert_eq!(result.score, 3);
    }

    #[test]
    fn test_zero_time_budget_still_returns_a_move() {
        let board = Board::new(4, 4).unwrap();
        let mut search = Search::new(Disc::Black, 5, Some(Duration::ZERO));
        let result = search.run(&board);
        // The first root move is always fully evaluated before the clock is
        // consulted.
        assert_eq!(result.best_move, Some(Square::new(1, 0)));
    }

    #[test]
    fn test_deeper_search_visits_more_nodes() {
        let board = Board::new(4, 4).unwrap();

        let mut shallow = Search::new(Disc::Black, 1, None);
        shallow.run(&board);
        let shallow_nodes = shallow.n_nodes;

        let mut deep = Search::new(Disc::Black, 3, None);
        deep.run(&board);
        assert!(deep.n_nodes > shallow_nodes);
    }
}
