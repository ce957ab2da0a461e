use othello_core::perft::perft_root;

#[test]
fn test_perft_eight_by_eight() {
    assert_eq!(perft_root(8, 8, 1), 4);
    assert_eq!(perft_root(8, 8, 2), 12);
    assert_eq!(perft_root(8, 8, 3), 56);
    assert_eq!(perft_root(8, 8, 4), 244);
    assert_eq!(perft_root(8, 8, 5), 1_396);
    assert_eq!(perft_root(8, 8, 6), 8_200);
}

#[test]
fn test_perft_four_by_four() {
    assert_eq!(perft_root(4, 4, 1), 4);
    assert_eq!(perft_root(4, 4, 2), 12);
}
