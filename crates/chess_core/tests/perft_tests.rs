use std::time::Instant;

use rayon::prelude::*;

use chess_core::{GameState, START_FEN, perft, perft_divide};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 1_000_000;

/// Reference counts for positions that stay free of promotions at these
/// depths, so queen-only promotion does not change the totals.
const CASES: &[(&str, &[(u8, u64)])] = &[
    (
        START_FEN,
        &[(1, 20), (2, 400), (3, 8_902), (4, 197_281), (5, 4_865_609)],
    ),
    (
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        &[(1, 48), (2, 2_039), (3, 97_862)],
    ),
    (
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        &[(1, 14), (2, 191), (3, 2_812), (4, 43_238), (5, 674_624)],
    ),
    (
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        &[(1, 46), (2, 2_079), (3, 89_890)],
    ),
];

#[test]
fn perft_reference_positions() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();

    CASES.par_iter().enumerate().for_each(|(idx, (fen, depths))| {
        let mut ran_depths = Vec::new();
        let mut total_nodes: u64 = 0;
        let case_start = Instant::now();

        for &(depth, expected) in depths.iter() {
            if !full && expected > NODE_LIMIT {
                eprintln!(
                    "Skipping depth {} for case {} (expected {} nodes), set {}=1 to run all.",
                    depth,
                    idx + 1,
                    expected,
                    FULL_PERFT_ENV
                );
                continue;
            }
            let mut state = GameState::from_fen(fen).unwrap();
            let got = perft(&mut state, depth);
            if got != expected {
                let divide = perft_divide(&mut state, depth);
                panic!(
                    "Perft mismatch for FEN '{}' at depth {}: expected {}, got {}\n{:?}",
                    fen, depth, expected, got, divide
                );
            }
            assert_eq!(state.fen(), GameState::from_fen(fen).unwrap().fen());

            ran_depths.push(depth);
            total_nodes += got;
        }

        let case_elapsed = case_start.elapsed();
        if !ran_depths.is_empty() {
            println!(
                "Case {:03} done: depths {:?}, total nodes {}, elapsed {:.3?}",
                idx + 1,
                ran_depths,
                total_nodes,
                case_elapsed,
            );
        }
    });
}

#[test]
fn perft_divide_sums_to_perft() {
    let mut state = GameState::new();
    let divide = perft_divide(&mut state, 3);
    assert_eq!(divide.len(), 20);
    let total: u64 = divide.iter().map(|(_, n)| n).sum();
    assert_eq!(total, perft(&mut state, 3));
    assert!(divide.iter().any(|(mv, _)| mv == "g1f3"));
}

#[test]
fn perft_depth_zero_counts_the_root() {
    let mut state = GameState::new();
    assert_eq!(perft(&mut state, 0), 1);
}
