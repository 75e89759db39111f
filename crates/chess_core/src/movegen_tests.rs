use super::*;

fn sq(c: &str) -> Square {
    Square::from_coord(c).unwrap()
}

fn moves_from(moves: &[Move], from: &str) -> Vec<Move> {
    let from = sq(from);
    moves.iter().filter(|m| m.start == from).copied().collect()
}

#[test]
fn test_startpos_moves() {
    let mut state = GameState::new();
    let moves = state.get_valid_moves();
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
    assert!(!state.in_check);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let mut state =
        GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let moves = state.get_valid_moves();
    assert_eq!(moves.len(), 48);
}

#[test]
fn pinned_rook_stays_on_file() {
    let mut state = GameState::from_fen("4k3/8/8/8/4r3/8/4R3/4K3 w - - 0 1").unwrap();
    let (_, pins, _) = state.check_for_pins_and_checks();
    assert_eq!(
        pins,
        vec![Pin {
            square: sq("e2"),
            direction: (0, -1)
        }]
    );

    let moves = state.get_valid_moves();
    let rook = moves_from(&moves, "e2");
    assert_eq!(rook.len(), 2);
    assert!(rook.iter().all(|m| m.end.col == 4));
}

#[test]
fn pinned_knight_has_no_moves() {
    let mut state = GameState::from_fen("4k3/8/8/8/4r3/8/4N3/4K3 w - - 0 1").unwrap();
    let moves = state.get_valid_moves();
    assert!(moves_from(&moves, "e2").is_empty());
}

#[test]
fn pinned_bishop_slides_along_pin_ray() {
    let mut state = GameState::from_fen("4k3/8/8/8/b7/8/2B5/3K4 w - - 0 1").unwrap();
    let moves = state.get_valid_moves();
    let mut ends: Vec<String> = moves_from(&moves, "c2")
        .iter()
        .map(|m| m.end.to_string())
        .collect();
    ends.sort();
    assert_eq!(ends, vec!["a4", "b3"]);
}

#[test]
fn pinned_queen_consumes_pin_once() {
    let mut state = GameState::from_fen("4k3/8/8/8/4q3/8/4Q3/4K3 w - - 0 1").unwrap();
    let moves = state.get_valid_moves();
    let queen = moves_from(&moves, "e2");
    assert_eq!(queen.len(), 2);
    assert!(queen.iter().all(|m| m.end.col == 4));
    assert!(state.pins.is_empty());
}

#[test]
fn diagonally_pinned_pawn_may_only_capture_pinner() {
    let mut state = GameState::from_fen("4k3/8/8/8/8/6b1/5P2/4K3 w - - 0 1").unwrap();
    let moves = state.get_valid_moves();
    let pawn = moves_from(&moves, "f2");
    assert_eq!(pawn.len(), 1);
    assert_eq!(pawn[0].end, sq("g3"));
    assert!(pawn[0].is_capture());
}

#[test]
fn double_check_allows_only_king_moves() {
    let mut state = GameState::from_fen("4k3/8/8/8/8/5n2/8/r3K2R w - - 0 1").unwrap();
    let moves = state.get_valid_moves();
    assert!(state.in_check);
    assert_eq!(state.checks.len(), 2);
    assert!(!moves.is_empty());
    assert!(
        moves
            .iter()
            .all(|m| m.piece_moved.kind == PieceKind::King)
    );
}

#[test]
fn single_check_must_be_blocked_or_captured() {
    let mut state = GameState::from_fen("4r2k/8/8/8/R7/8/8/4K3 w - - 0 1").unwrap();
    let moves = state.get_valid_moves();
    assert!(state.in_check);
    let others: Vec<String> = moves
        .iter()
        .filter(|m| m.piece_moved.kind != PieceKind::King)
        .map(|m| m.to_string())
        .collect();
    assert_eq!(others, vec!["a4e4"]);
}

#[test]
fn knight_check_cannot_be_blocked() {
    let mut state = GameState::from_fen("4k3/8/8/8/8/3n4/8/1B2K3 w - - 0 1").unwrap();
    let moves = state.get_valid_moves();
    assert!(state.in_check);
    let others: Vec<String> = moves
        .iter()
        .filter(|m| m.piece_moved.kind != PieceKind::King)
        .map(|m| m.to_string())
        .collect();
    assert_eq!(others, vec!["b1d3"]);
}

#[test]
fn en_passant_can_remove_checking_pawn() {
    let mut state = GameState::from_fen("4k3/8/8/3pP3/4K3/8/8/8 w - d6 0 1").unwrap();
    let moves = state.get_valid_moves();
    assert!(state.in_check);
    let ep = find_move(&moves, sq("e5"), sq("d6")).expect("en passant evades the check");
    assert!(ep.is_enpassant);
}

#[test]
fn en_passant_rejected_when_it_exposes_king_on_rank() {
    let mut state = GameState::from_fen("8/8/8/K2pP2r/8/8/8/4k3 w - d6 0 1").unwrap();
    let moves = state.get_valid_moves();
    assert!(find_move(&moves, sq("e5"), sq("d6")).is_none());
    assert!(find_move(&moves, sq("e5"), sq("e6")).is_some());
}

#[test]
fn en_passant_generated_once() {
    let mut state = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let moves = state.get_valid_moves();
    let count = moves
        .iter()
        .filter(|m| m.start == sq("e5") && m.end == sq("d6"))
        .count();
    assert_eq!(count, 1);
}

#[test]
fn castling_generated_when_path_is_clear() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let moves = state.get_valid_moves();
    let g1 = find_move(&moves, sq("e1"), sq("g1")).unwrap();
    let c1 = find_move(&moves, sq("e1"), sq("c1")).unwrap();
    assert!(g1.is_castle && c1.is_castle);
}

#[test]
fn castling_gated_by_rights_path_and_attacks() {
    let cases = [
        // Right already lost
        ("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1", false),
        // Knight still on g1
        ("r3k2r/8/8/8/8/8/8/R3K1NR w KQkq - 0 1", false),
        // f1 covered by the rook on f8
        ("r3kr2/8/8/8/8/8/8/R3K2R w KQq - 0 1", false),
        // King in check from e8
        ("r3r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1", false),
        ("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", true),
    ];
    for (fen, legal) in cases {
        let mut state = GameState::from_fen(fen).unwrap();
        let moves = state.get_valid_moves();
        assert_eq!(
            find_move(&moves, sq("e1"), sq("g1")).is_some(),
            legal,
            "kingside castle in {fen}"
        );
    }
}

#[test]
fn queenside_castle_ignores_attack_on_b_file() {
    let mut state = GameState::from_fen("rr2k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let moves = state.get_valid_moves();
    assert!(find_move(&moves, sq("e1"), sq("c1")).is_some());

    let mut state = GameState::from_fen("r2rk3/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let moves = state.get_valid_moves();
    assert!(find_move(&moves, sq("e1"), sq("c1")).is_none());
}

#[test]
fn clicked_candidate_matches_generated_move() {
    let mut state = GameState::new();
    let moves = state.get_valid_moves();
    let clicked = Move::new(sq("e2"), sq("e4"), state.board()).unwrap();
    assert!(moves.contains(&clicked));

    let bogus = Move::new(sq("e2"), sq("e5"), state.board()).unwrap();
    assert!(!moves.contains(&bogus));
    assert!(Move::new(sq("e4"), sq("e5"), state.board()).is_none());
}

#[test]
fn no_move_leaves_own_king_attacked() {
    let fens = [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
        "4k3/8/8/8/8/5n2/8/r3K2R w - - 0 1",
        "8/8/8/K2pP2r/8/8/8/4k3 w - d6 0 1",
    ];
    for fen in fens {
        let mut state = GameState::from_fen(fen).unwrap();
        let mover = state.side_to_move();
        for mv in state.get_valid_moves() {
            state.make_move(mv);
            assert!(
                !state.is_square_attacked(state.king_location(mover), mover.other()),
                "{mv} leaves the king in check in {fen}"
            );
            state.undo_move();
        }
    }
}

#[test]
fn pseudo_legal_moves_rescan_pins() {
    // Rook on e2 pinned by the rook on e4; no prior get_valid_moves call
    let mut state = GameState::from_fen("4k3/8/8/8/4r3/8/4R3/4K3 w - - 0 1").unwrap();
    let moves = state.get_all_possible_moves();
    let rook = moves_from(&moves, "e2");
    assert_eq!(rook.len(), 2);
    assert!(rook.iter().all(|m| m.end.col == 4));
}

#[test]
fn pseudo_legal_moves_do_not_depend_on_call_history() {
    // Double check from the knight and the a1 rook, Be2 pinned by the queen
    let fen = "4q2k/8/8/8/8/5n2/4B3/r3K3 w - - 0 1";
    let mut state = GameState::from_fen(fen).unwrap();
    let valid = state.get_valid_moves();
    assert_eq!(state.checks.len(), 2);
    assert!(valid.iter().all(|m| m.piece_moved.kind == PieceKind::King));
    assert!(state.pins.is_empty());

    let after = state.get_all_possible_moves();
    let fresh = GameState::from_fen(fen).unwrap().get_all_possible_moves();
    assert_eq!(after, fresh);
    assert!(moves_from(&after, "e2").is_empty());
}
