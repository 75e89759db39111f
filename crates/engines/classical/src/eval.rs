//! Static evaluation: material plus piece-square bonuses.

use chess_core::{Color, GameState, PieceKind, Square};

/// Score of a mated position, in centipawns.
pub const CHECKMATE: i32 = 100_000;
pub const STALEMATE: i32 = 0;

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [100, 300, 325, 500, 1000, 0];

/// Piece-square tables are in tenths of a pawn.
const POSITION_WEIGHT: i32 = 10;

type Table = [[i32; 8]; 8];

// Tables are laid out from White's side: row 0 is rank 8.
const KNIGHT_TABLE: Table = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

const BISHOP_TABLE: Table = [
    [4, 3, 2, 1, 1, 2, 3, 4],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [4, 3, 2, 1, 1, 2, 3, 4],
];

const ROOK_TABLE: Table = [
    [4, 3, 4, 4, 4, 4, 3, 4],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 1, 2, 2, 2, 2, 1, 1],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [4, 3, 2, 1, 1, 2, 3, 4],
];

const QUEEN_TABLE: Table = [
    [1, 1, 1, 3, 1, 1, 1, 1],
    [1, 2, 3, 3, 3, 1, 1, 1],
    [1, 4, 3, 3, 3, 4, 2, 1],
    [1, 2, 3, 3, 3, 2, 2, 1],
    [1, 2, 3, 3, 3, 2, 2, 1],
    [1, 4, 3, 3, 3, 4, 2, 1],
    [1, 2, 3, 3, 3, 1, 1, 1],
    [1, 1, 1, 3, 1, 1, 1, 1],
];

const PAWN_TABLE: Table = [
    [8, 8, 8, 8, 8, 8, 8, 8],
    [8, 8, 8, 8, 8, 8, 8, 8],
    [5, 6, 6, 7, 7, 6, 6, 5],
    [2, 3, 3, 5, 5, 3, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 1, 1, 0, 0, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Positional bonus in table units for a piece of `color` on `sq`.
/// Black reads the tables upside down. Kings get no bonus.
pub fn position_bonus(kind: PieceKind, color: Color, sq: Square) -> i32 {
    let table = match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => return 0,
    };
    let row = match color {
        Color::White => sq.row,
        Color::Black => 7 - sq.row,
    };
    table[row as usize][sq.col as usize]
}

/// Evaluates the position from White's perspective, in centipawns.
///
/// Terminal flags set by the caller take precedence: a mated side to move
/// scores `-CHECKMATE` for White to move and `CHECKMATE` for Black to move,
/// stalemate scores `STALEMATE`.
pub fn score_board(state: &GameState) -> i32 {
    if state.check_mate {
        return if state.white_to_move() {
            -CHECKMATE
        } else {
            CHECKMATE
        };
    }
    if state.stale_mate {
        return STALEMATE;
    }

    let mut score = 0i32;
    for (row, rank) in state.board().iter().enumerate() {
        for (col, square) in rank.iter().enumerate() {
            let Some(pc) = square else { continue };
            let sq = Square::new(col as u8, row as u8);
            let value =
                piece_value(pc.kind) + POSITION_WEIGHT * position_bonus(pc.kind, pc.color, sq);
            score += pc.color.multiplier() * value;
        }
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
