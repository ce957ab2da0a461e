use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::game_state::GameState;
use othello_core::player::{Player, SearchPlayer};
use othello_core::search::Search;

#[test]
fn test_opening_decision_on_small_board() {
    let board = Board::new(4, 4).unwrap();
    let openings = board.legal_moves(Disc::Black);
    assert_eq!(openings.len(), 4);

    let mut search = Search::new(Disc::Black, 0, None);
    let result = search.run(&board);
    let best = result.best_move.unwrap();
    assert!(openings.contains(&best));

    // With no reply lookahead the reported value is the differential of the
    // board the move produces.
    let mut next = board.clone();
    next.make_move(best, Disc::Black);
    let direct =
        next.count_discs(Disc::Black) as i32 - next.count_discs(Disc::White) as i32;
    assert_eq!(result.score, direct);
}

#[test]
fn test_self_play_game_terminates() {
    let mut game = GameState::new(4, 4).unwrap();
    let mut black = SearchPlayer::new(Disc::Black, 3, None);
    let mut white = SearchPlayer::new(Disc::White, 3, None);

    // A 4x4 game can place at most 12 discs; with passes in between the
    // loop cannot legitimately run longer than a few plies past that.
    let mut plies = 0;
    while !game.is_game_over() {
        plies += 1;
        assert!(plies <= 32, "self-play game failed to terminate");

        let side = game.side_to_move();
        if !game.board().has_legal_moves(side) {
            game.make_pass().unwrap();
            continue;
        }

        let sq = if side == Disc::Black {
            black.get_move(game.board())
        } else {
            white.get_move(game.board())
        };
        game.make_move(sq).unwrap();
    }

    let placements = game
        .move_history()
        .iter()
        .filter(|(sq, _, _)| sq.is_some())
        .count();
    assert!(placements <= 12);

    let (black_count, white_count) = game.score();
    assert_eq!(
        black_count + white_count + game.board().empty_count(),
        16
    );
    assert!(black.average_search_time().is_some());
    assert!(white.average_search_time().is_some());
}

#[test]
fn test_search_is_deterministic() {
    let board = Board::new(6, 6).unwrap();

    let mut first = Search::new(Disc::Black, 3, None);
    let mut second = Search::new(Disc::Black, 3, None);
    let a = first.run(&board);
    let b = second.run(&board);

    assert_eq!(a.best_move, b.best_move);
    assert_eq!(a.score, b.score);
    assert_eq!(a.n_nodes, b.n_nodes);
}
