use super::*;

#[test]
fn test_handoff_delivers_one_result() {
    let mut state = GameState::new();
    let moves = state.get_valid_moves();
    let config = SearchConfig {
        white_depth: 2,
        black_depth: 2,
    };
    let expected = find_best_move(&state, &moves, &config);

    let handle = spawn_search(state.clone(), moves, config);
    let result = handle.wait().expect("worker delivers a result");
    assert_eq!(result.best_move, expected.best_move);
    assert_eq!(result.score, expected.score);
}

#[test]
fn test_result_can_only_be_taken_once() {
    let mut state = GameState::new();
    let moves = state.get_valid_moves();
    let config = SearchConfig {
        white_depth: 1,
        black_depth: 1,
    };
    let handle = spawn_search(state, moves, config);
    while !handle.is_finished() {
        std::thread::yield_now();
    }
    assert!(handle.try_result().is_some());
    assert!(handle.try_result().is_none());
    assert!(handle.wait().is_none());
}

#[test]
fn test_empty_move_list_reports_none() {
    let state = GameState::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();
    let handle = spawn_search(state, Vec::new(), SearchConfig::default());
    let result = handle.wait().unwrap();
    assert!(result.best_move.is_none());
}
