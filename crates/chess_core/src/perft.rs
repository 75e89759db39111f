use crate::board::GameState;

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, leaving
/// `state` as it found it.
pub fn perft(state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.get_valid_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        state.make_move(mv);
        nodes += perft(state, depth - 1);
        state.undo_move();
    }
    nodes
}

/// Per-root-move breakdown of [`perft`], in generation order.
pub fn perft_divide(state: &mut GameState, depth: u8) -> Vec<(String, u64)> {
    let moves = state.get_valid_moves();
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        state.make_move(mv);
        out.push((mv.to_string(), perft(state, depth.saturating_sub(1))));
        state.undo_move();
    }
    out
}
