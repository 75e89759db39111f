use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let mut state = GameState::new();
    let moves = state.get_valid_moves();

    let result = engine.search(&state, &moves);

    assert!(result.best_move.is_some());
    assert!(moves.contains(&result.best_move.unwrap()));
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::new();
    let mut state =
        GameState::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();
    let moves = state.get_valid_moves();
    assert!(state.in_check);

    let result = engine.search(&state, &moves);

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::new();
    let mut state = GameState::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();
    let moves = state.get_valid_moves();

    let result = engine.search(&state, &moves);

    assert!(result.best_move.is_none());
}

#[test]
fn seeded_choice_is_reproducible() {
    let mut state = GameState::new();
    let moves = state.get_valid_moves();
    let a = find_random_move_with(&moves, &mut StdRng::seed_from_u64(7));
    let b = find_random_move_with(&moves, &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
    assert!(find_random_move(&[]).is_none());
}

#[test]
fn every_move_can_be_picked() {
    let mut state = GameState::new();
    let moves = state.get_valid_moves();
    let mut rng = StdRng::seed_from_u64(42);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..2000 {
        seen.insert(find_random_move_with(&moves, &mut rng).unwrap());
    }
    assert_eq!(seen.len(), moves.len());
}
