use std::fmt;

use crate::error::FenError;
use crate::types::*;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// State needed to invert one `make_move`, pushed alongside the move itself.
#[derive(Clone, Copy, Debug)]
struct Undo {
    mv: Move,
    castle_rights: CastleRights,
    enpassant_possible: Option<Square>,
}

/// The single source of truth for a game in progress.
///
/// The board is only ever mutated through [`GameState::make_move`] and
/// [`GameState::undo_move`]. `in_check`, `pins` and `checks` are scratch data
/// recomputed by every [`GameState::get_valid_moves`] call.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) white_king_location: Square,
    pub(crate) black_king_location: Square,
    pub(crate) enpassant_possible: Option<Square>,
    pub(crate) castle_rights: CastleRights,
    history: Vec<Undo>,

    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,

    /// Terminal flags, set by the consumer when `get_valid_moves` comes back empty.
    pub check_mate: bool,
    pub stale_mate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        let mut board: Board = [[None; 8]; 8];
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            board[0][col] = Some(Piece::new(Color::Black, kind));
            board[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board[7][col] = Some(Piece::new(Color::White, kind));
        }
        Self::from_parts(
            board,
            Color::White,
            CastleRights::ALL,
            None,
            Square::new(4, 7),
            Square::new(4, 0),
        )
    }

    fn from_parts(
        board: Board,
        side_to_move: Color,
        castle_rights: CastleRights,
        enpassant_possible: Option<Square>,
        white_king_location: Square,
        black_king_location: Square,
    ) -> Self {
        Self {
            board,
            side_to_move,
            white_king_location,
            black_king_location,
            enpassant_possible,
            castle_rights,
            history: Vec::new(),
            in_check: false,
            pins: Vec::new(),
            checks: Vec::new(),
            check_mate: false,
            stale_mate: false,
        }
    }

    /// Set up a position from Forsyth-Edwards Notation. The move clocks are
    /// accepted but not tracked.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::MissingField("placement"))?;
        let side = parts.next().ok_or(FenError::MissingField("side to move"))?;
        let castling = parts.next().unwrap_or("-");
        let ep = parts.next().unwrap_or("-");

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        let mut board: Board = [[None; 8]; 8];
        let mut kings: [Vec<Square>; 2] = [Vec::new(), Vec::new()];
        // FEN lists rank 8 first, which is row 0 here.
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for ch in rank.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if d == 0 {
                        return Err(FenError::FileCount {
                            rank: 8 - row,
                            files: col,
                        });
                    }
                    col += d as usize;
                    continue;
                }
                let kind = PieceKind::from_symbol(ch).ok_or(FenError::InvalidPiece(ch))?;
                let color = if ch.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if col >= 8 {
                    return Err(FenError::FileCount {
                        rank: 8 - row,
                        files: col + 1,
                    });
                }
                if kind == PieceKind::King {
                    kings[color as usize].push(Square::new(col as u8, row as u8));
                }
                board[row][col] = Some(Piece::new(color, kind));
                col += 1;
            }
            if col != 8 {
                return Err(FenError::FileCount {
                    rank: 8 - row,
                    files: col,
                });
            }
        }

        let side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidSide(other.to_string())),
        };

        let mut castle_rights = CastleRights::NONE;
        if castling != "-" {
            for c in castling.chars() {
                match c {
                    'K' => castle_rights.white_kingside = true,
                    'Q' => castle_rights.white_queenside = true,
                    'k' => castle_rights.black_kingside = true,
                    'q' => castle_rights.black_queenside = true,
                    other => return Err(FenError::InvalidCastling(other)),
                }
            }
        }

        // The target sits behind a pawn of the side that just moved.
        let enpassant_possible = match ep {
            "-" => None,
            coord => {
                let target_row = side_to_move.other().pawn_rank() as i8
                    + side_to_move.other().forward();
                match Square::from_coord(coord) {
                    Some(sq) if sq.row as i8 == target_row => Some(sq),
                    _ => return Err(FenError::InvalidEnPassant(coord.to_string())),
                }
            }
        };

        let mut king_squares = [Square::new(0, 0); 2];
        for color in [Color::White, Color::Black] {
            let found = &kings[color as usize];
            if found.len() != 1 {
                return Err(FenError::KingCount {
                    color,
                    count: found.len(),
                });
            }
            king_squares[color as usize] = found[0];
        }

        Ok(Self::from_parts(
            board,
            side_to_move,
            castle_rights,
            enpassant_possible,
            king_squares[0],
            king_squares[1],
        ))
    }

    /// Render the position as FEN with zeroed move clocks.
    pub fn fen(&self) -> String {
        let mut out = String::with_capacity(90);
        for (row, rank) in self.board.iter().enumerate() {
            let mut empty = 0;
            for sq in rank {
                match sq {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        let cr = self.castle_rights;
        let rights: String = [
            (cr.white_kingside, 'K'),
            (cr.white_queenside, 'Q'),
            (cr.black_kingside, 'k'),
            (cr.black_queenside, 'q'),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, c)| *c)
        .collect();
        if rights.is_empty() {
            out.push('-');
        } else {
            out.push_str(&rights);
        }

        out.push(' ');
        match self.enpassant_possible {
            Some(sq) => out.push_str(&sq.to_string()),
            None => out.push('-'),
        }
        out.push_str(" 0 1");
        out
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.row as usize][sq.col as usize]
    }

    pub(crate) fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.board[sq.row as usize][sq.col as usize] = pc;
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    pub fn king_location(&self, c: Color) -> Square {
        match c {
            Color::White => self.white_king_location,
            Color::Black => self.black_king_location,
        }
    }

    pub(crate) fn set_king_location(&mut self, c: Color, sq: Square) {
        match c {
            Color::White => self.white_king_location = sq,
            Color::Black => self.black_king_location = sq,
        }
    }

    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    pub fn enpassant_possible(&self) -> Option<Square> {
        self.enpassant_possible
    }

    /// Moves applied so far, oldest first.
    pub fn move_log(&self) -> impl ExactSizeIterator<Item = &Move> + '_ {
        self.history.iter().map(|u| &u.mv)
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|u| &u.mv)
    }

    /// Whether `target` is attacked by any piece of colour `by`.
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        let attacker = |s: Square, kinds: &[PieceKind]| {
            self.piece_at(s)
                .is_some_and(|pc| pc.color == by && kinds.contains(&pc.kind))
        };

        // A pawn of `by` attacks from one row behind its direction of travel.
        let back = -by.forward();
        for dc in [-1, 1] {
            if let Some(s) = target.offset(dc, back)
                && attacker(s, &[PieceKind::Pawn])
            {
                return true;
            }
        }

        for (dc, dr) in KNIGHT_JUMPS {
            if let Some(s) = target.offset(dc, dr)
                && attacker(s, &[PieceKind::Knight])
            {
                return true;
            }
        }

        for (dc, dr) in KING_STEPS {
            if let Some(s) = target.offset(dc, dr)
                && attacker(s, &[PieceKind::King])
            {
                return true;
            }
        }

        let rays = [
            (&ORTHOGONAL, [PieceKind::Rook, PieceKind::Queen]),
            (&DIAGONAL, [PieceKind::Bishop, PieceKind::Queen]),
        ];
        for (dirs, sliders) in rays {
            for &(dc, dr) in dirs {
                let mut cur = target.offset(dc, dr);
                while let Some(s) = cur {
                    if self.piece_at(s).is_some() {
                        if attacker(s, &sliders) {
                            return true;
                        }
                        break;
                    }
                    cur = s.offset(dc, dr);
                }
            }
        }

        false
    }

    /// Whether the opponent of the side to move attacks `sq`.
    pub fn square_under_attack(&self, sq: Square) -> bool {
        self.is_square_attacked(sq, self.side_to_move.other())
    }

    /// Apply `mv` in place.
    ///
    /// Precondition: `mv` came from [`GameState::get_valid_moves`] for this exact
    /// position (or was matched against that list). Nothing is validated here; any
    /// other move corrupts the board.
    pub fn make_move(&mut self, mv: Move) {
        debug_assert_eq!(
            self.piece_at(mv.start),
            Some(mv.piece_moved),
            "make_move called with {mv} that does not match the board"
        );

        self.history.push(Undo {
            mv,
            castle_rights: self.castle_rights,
            enpassant_possible: self.enpassant_possible,
        });

        let mover = mv.piece_moved;
        self.set_piece(mv.start, None);
        self.set_piece(mv.end, Some(mover));

        if mover.kind == PieceKind::King {
            self.set_king_location(mover.color, mv.end);
        }

        if mv.is_pawn_promotion {
            self.set_piece(mv.end, Some(Piece::new(mover.color, PieceKind::Queen)));
        }

        // The passed-over square becomes capturable for exactly one ply.
        let double_step = mover.kind == PieceKind::Pawn && mv.start.row.abs_diff(mv.end.row) == 2;
        self.enpassant_possible = if double_step {
            Some(Square::new(mv.start.col, (mv.start.row + mv.end.row) / 2))
        } else {
            None
        };
        if mv.is_enpassant {
            self.set_piece(Square::new(mv.end.col, mv.start.row), None);
        }

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            let rook = self.piece_at(rook_from);
            self.set_piece(rook_from, None);
            self.set_piece(rook_to, rook);
        }

        self.update_castle_rights(&mv);
        self.side_to_move = self.side_to_move.other();
    }

    /// Revert the last applied move. Returns it, or `None` (and does nothing)
    /// when there is no history.
    pub fn undo_move(&mut self) -> Option<Move> {
        let undo = self.history.pop()?;
        let mv = undo.mv;

        self.set_piece(mv.start, Some(mv.piece_moved));
        self.set_piece(mv.end, mv.piece_captured);
        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_location(mv.piece_moved.color, mv.start);
        }
        self.side_to_move = self.side_to_move.other();

        if mv.is_enpassant {
            self.set_piece(mv.end, None);
            self.set_piece(Square::new(mv.end.col, mv.start.row), mv.piece_captured);
        }

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            let rook = self.piece_at(rook_to);
            self.set_piece(rook_to, None);
            self.set_piece(rook_from, rook);
        }

        self.castle_rights = undo.castle_rights;
        self.enpassant_possible = undo.enpassant_possible;
        self.check_mate = false;
        self.stale_mate = false;
        Some(mv)
    }

    /// Rights are tied to the king and rook home squares: moving from one, or
    /// capturing a rook on one, clears the matching permission.
    fn update_castle_rights(&mut self, mv: &Move) {
        let mover = mv.piece_moved;
        match mover.kind {
            PieceKind::King => self.castle_rights.clear(mover.color),
            PieceKind::Rook => self.castle_rights.clear_rook_square(mover.color, mv.start),
            _ => {}
        }
        if let Some(captured) = mv.piece_captured
            && captured.kind == PieceKind::Rook
        {
            self.castle_rights.clear_rook_square(captured.color, mv.end);
        }
    }
}

/// (rook origin, rook destination) for a castle, keyed off the king's column delta.
fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let row = mv.end.row;
    if mv.end.col > mv.start.col {
        (Square::new(7, row), Square::new(mv.end.col - 1, row))
    } else {
        (Square::new(0, row), Square::new(mv.end.col + 1, row))
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rank) in self.board.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for sq in rank {
                let c = sq.map(|pc| pc.fen_char()).unwrap_or('.');
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
