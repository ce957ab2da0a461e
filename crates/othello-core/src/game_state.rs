//! Game state management for Othello matches.
//!
//! This module provides the `GameState` struct which maintains the current
//! game position and handles move execution, pass bookkeeping, move history
//! tracking and game termination detection. Pass detection itself belongs to
//! the match loop, which announces a forced skip before applying it.

use crate::board::Board;
use crate::disc::Disc;
use crate::square::Square;

/// Represents the state of an Othello game.
///
/// This is a core game state manager that handles move execution, move
/// history tracking and undo functionality.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The current board position.
    board: Board,
    /// Which player's turn it is to move.
    side_to_move: Disc,
    /// Move history: (move, board_before_move, side_to_move_before).
    /// None for move indicates a pass.
    history: Vec<(Option<Square>, Board, Disc)>,
}

impl GameState {
    /// Creates a new game in the initial position.
    ///
    /// The initial position has 4 discs in the centre (2 black, 2 white)
    /// with Black to move first, following standard Othello rules.
    ///
    /// # Arguments
    ///
    /// * `rows` - Number of rows on the board.
    /// * `cols` - Number of columns on the board.
    ///
    /// # Returns
    ///
    /// A new `GameState` in the starting position, or an error when the
    /// dimensions cannot hold the standard start.
    pub fn new(rows: usize, cols: usize) -> Result<Self, String> {
        Ok(Self::from_board(Board::new(rows, cols)?, Disc::Black))
    }

    /// Creates a new game state from an existing board position.
    ///
    /// This is useful for setting up specific positions for analysis
    /// or continuing a game from a known state.
    ///
    /// # Arguments
    ///
    /// * `board` - The board position to start from
    /// * `side_to_move` - Which player moves next
    ///
    /// # Returns
    ///
    /// A new `GameState` with the specified position.
    pub fn from_board(board: Board, side_to_move: Disc) -> Self {
        Self {
            board,
            side_to_move,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which player's turn it is to move.
    pub fn side_to_move(&self) -> Disc {
        self.side_to_move
    }

    /// Executes a move for the side to move and updates the game state.
    ///
    /// # Arguments
    ///
    /// * `sq` - The square to place a disc on
    ///
    /// # Returns
    ///
    /// `Ok(())` if the move was successfully executed.
    ///
    /// # Errors
    ///
    /// Returns an error string if the move is not legal on the current board.
    pub fn make_move(&mut self, sq: Square) -> Result<(), String> {
        if !self.board.is_legal_move(sq, self.side_to_move) {
            return Err(format!("Illegal move: {sq}"));
        }

        // Record history before making the move
        self.history.push((Some(sq), self.board.clone(), self.side_to_move));

        self.board.make_move(sq, self.side_to_move);
        self.side_to_move = self.side_to_move.opposite();

        Ok(())
    }

    /// Executes a pass move (switching players without placing a disc).
    ///
    /// # Returns
    ///
    /// `Ok(())` if the pass was successfully executed.
    ///
    /// # Errors
    ///
    /// Returns an error string if attempting to pass when legal moves are
    /// available.
    pub fn make_pass(&mut self) -> Result<(), String> {
        if self.board.has_legal_moves(self.side_to_move) {
            return Err("Cannot pass when legal moves are available".to_string());
        }

        self.history.push((None, self.board.clone(), self.side_to_move));
        self.side_to_move = self.side_to_move.opposite();
        Ok(())
    }

    /// Checks if the game has ended.
    ///
    /// A game ends when neither player has a legal move; a full board is a
    /// special case of that condition.
    ///
    /// # Returns
    ///
    /// `true` if the game is over, `false` otherwise
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Returns the disc count for both players.
    ///
    /// # Returns
    ///
    /// A tuple `(black_count, white_count)` representing the number of
    /// discs each player has on the board.
    pub fn score(&self) -> (u32, u32) {
        (
            self.board.count_discs(Disc::Black),
            self.board.count_discs(Disc::White),
        )
    }

    /// Returns the last move played.
    ///
    /// # Returns
    ///
    /// `Some(Square)` if a regular move was played, `None` if the last move
    /// was a pass or if no moves have been played yet
    pub fn last_move(&self) -> Option<Square> {
        self.history.last().and_then(|(sq, _, _)| *sq)
    }

    /// Returns a reference to the move history.
    ///
    /// # Returns
    ///
    /// A slice of tuples containing (move, board_before_move,
    /// side_to_move_before). `None` for the move indicates a pass.
    pub fn move_history(&self) -> &[(Option<Square>, Board, Disc)] {
        &self.history
    }

    /// Undoes the last move if possible.
    ///
    /// This restores the game state to what it was before the last move,
    /// including the board position and side to move.
    ///
    /// # Returns
    ///
    /// `true` if a move was successfully undone, `false` if there are no
    /// moves to undo
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some((_, prev_board, prev_side)) => {
                self.board = prev_board;
                self.side_to_move = prev_side;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new(4, 4).unwrap();
        assert_eq!(game.side_to_move(), Disc::Black);
        assert!(!game.is_game_over());
        assert_eq!(game.score(), (2, 2));
    }

    #[test]
    fn test_make_move_switches_side() {
        let mut game = GameState::new(4, 4).unwrap();
        game.make_move(Square::new(1, 0)).unwrap();
        assert_eq!(game.side_to_move(), Disc::White);
        assert_eq!(game.score(), (4, 1));
    }

    #[test]
    fn test_illegal_move() {
        let mut game = GameState::new(4, 4).unwrap();
        assert!(game.make_move(Square::new(0, 0)).is_err());
        assert_eq!(game.side_to_move(), Disc::Black);
    }

    #[test]
    fn test_pass_rejected_when_moves_exist() {
        let mut game = GameState::new(4, 4).unwrap();
        assert!(game.make_pass().is_err());
    }

    #[test]
    fn test_forced_pass() {
        // White's only disc is cornered; Black cannot capture anything and
        // must pass, while White still has a reply.
        let board = Board::from_string(
            4,
            4,
            "OX--
             ----
             ----
             ----",
        )
        .unwrap();
        let mut game = GameState::from_board(board, Disc::Black);

        assert!(!game.board().has_legal_moves(Disc::Black));
        game.make_pass().unwrap();
        assert_eq!(game.side_to_move(), Disc::White);
        assert!(game.board().has_legal_moves(Disc::White));
    }

    #[test]
    fn test_undo_restores_position() {
        let mut game = GameState::new(4, 4).unwrap();
        let before = game.board().clone();
        game.make_move(Square::new(1, 0)).unwrap();
        assert!(game.undo());
        assert_eq!(game.board(), &before);
        assert_eq!(game.side_to_move(), Disc::Black);
        assert!(!game.undo());
    }

    #[test]
    fn test_last_move_tracking() {
        let mut game = GameState::new(4, 4).unwrap();
        assert_eq!(game.last_move(), None);
        game.make_move(Square::new(1, 0)).unwrap();
        assert_eq!(game.last_move(), Some(Square::new(1, 0)));
    }
}
