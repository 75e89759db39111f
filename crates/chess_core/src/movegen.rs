use crate::{board::GameState, types::*};

/// The eight rays cast from the king, orthogonals first.
const RAYS: [Direction; 8] = [
    ORTHOGONAL[0],
    ORTHOGONAL[1],
    ORTHOGONAL[2],
    ORTHOGONAL[3],
    DIAGONAL[0],
    DIAGONAL[1],
    DIAGONAL[2],
    DIAGONAL[3],
];

/// Legal moves for a position the caller does not want touched.
/// Clones the state once and delegates to [`GameState::get_valid_moves`].
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let mut tmp = state.clone();
    tmp.get_valid_moves()
}

/// Whether a piece restricted to `pin` may travel along `d`.
fn along_pin(pin: Option<Direction>, d: Direction) -> bool {
    pin.is_none_or(|p| p == d || p == (-d.0, -d.1))
}

impl GameState {
    /// All legal moves for the side to move.
    ///
    /// Refreshes `in_check`, `pins` and `checks` first. An empty result means
    /// checkmate when `in_check` is set and stalemate otherwise; telling the two
    /// apart is left to the caller.
    pub fn get_valid_moves(&mut self) -> Vec<Move> {
        let (in_check, pins, checks) = self.check_for_pins_and_checks();
        self.in_check = in_check;
        self.pins = pins;
        self.checks = checks;

        let us = self.side_to_move;
        let king = self.king_location(us);
        let mut moves = Vec::with_capacity(64);

        if self.in_check {
            if let &[check] = self.checks.as_slice() {
                self.push_all_possible_moves(&mut moves);
                let valid_squares = self.check_block_squares(king, check);
                moves.retain(|m| {
                    m.piece_moved.kind == PieceKind::King
                        || valid_squares.contains(&m.end)
                        || (m.is_enpassant && m.captured_square() == Some(check.square))
                });
            } else {
                // Double check: only the king can answer.
                self.get_king_moves(king, &mut moves);
                self.pins.clear();
            }
        } else {
            self.push_all_possible_moves(&mut moves);
        }

        self.get_castle_moves(king, &mut moves);
        moves
    }

    /// Pseudo-legal moves for every piece of the side to move, scanned row by row.
    /// Pins are rescanned for the current position and honoured.
    pub fn get_all_possible_moves(&mut self) -> Vec<Move> {
        self.pins = self.check_for_pins_and_checks().1;
        let mut moves = Vec::with_capacity(64);
        self.push_all_possible_moves(&mut moves);
        moves
    }

    fn push_all_possible_moves(&mut self, moves: &mut Vec<Move>) {
        for row in 0..8u8 {
            for col in 0..8u8 {
                let from = Square::new(col, row);
                let Some(pc) = self.piece_at(from) else {
                    continue;
                };
                if pc.color != self.side_to_move {
                    continue;
                }
                match pc.kind {
                    PieceKind::Pawn => self.get_pawn_moves(from, moves),
                    PieceKind::Knight => self.get_knight_moves(from, moves),
                    PieceKind::Bishop => self.get_bishop_moves(from, moves),
                    PieceKind::Rook => self.get_rook_moves(from, moves),
                    PieceKind::Queen => self.get_queen_moves(from, moves),
                    PieceKind::King => self.get_king_moves(from, moves),
                }
            }
        }
    }

    /// Squares a non-king move may land on to answer a single check: those
    /// between king and checker, plus the checker itself. Knights can't be blocked.
    fn check_block_squares(&self, king: Square, check: Check) -> Vec<Square> {
        let checker = self.piece_at(check.square);
        if checker.is_some_and(|pc| pc.kind == PieceKind::Knight) {
            return vec![check.square];
        }
        let mut squares = Vec::with_capacity(7);
        let (dc, dr) = check.direction;
        let mut cur = king.offset(dc, dr);
        while let Some(s) = cur {
            squares.push(s);
            if s == check.square {
                break;
            }
            cur = s.offset(dc, dr);
        }
        squares
    }

    /// Scan outward from the king of the side to move.
    ///
    /// Returns whether it is in check, the friendly pieces pinned against it, and
    /// every enemy piece giving check. The king's own square is looked through,
    /// so the scan stays correct while `get_king_moves` probes a relocated king.
    pub fn check_for_pins_and_checks(&self) -> (bool, Vec<Pin>, Vec<Check>) {
        let us = self.side_to_move;
        let king = self.king_location(us);
        let mut pins = Vec::new();
        let mut checks = Vec::new();
        let mut in_check = false;

        for (j, &d) in RAYS.iter().enumerate() {
            let orthogonal = j < 4;
            let mut possible_pin: Option<Pin> = None;
            let mut distance = 0;
            let mut cur = king.offset(d.0, d.1);
            while let Some(s) = cur {
                distance += 1;
                match self.piece_at(s) {
                    Some(pc) if pc.color == us && pc.kind != PieceKind::King => {
                        if possible_pin.is_some() {
                            // Two friendly pieces: nothing can pin or check through them.
                            break;
                        }
                        possible_pin = Some(Pin {
                            square: s,
                            direction: d,
                        });
                    }
                    Some(pc) if pc.color != us => {
                        let attacks = match pc.kind {
                            PieceKind::Rook => orthogonal,
                            PieceKind::Bishop => !orthogonal,
                            PieceKind::Queen => true,
                            PieceKind::Pawn => {
                                distance == 1 && !orthogonal && d.1 == us.forward()
                            }
                            PieceKind::King => distance == 1,
                            PieceKind::Knight => false,
                        };
                        if attacks {
                            match possible_pin {
                                Some(pin) => pins.push(pin),
                                None => {
                                    in_check = true;
                                    checks.push(Check {
                                        square: s,
                                        direction: d,
                                    });
                                }
                            }
                        }
                        break;
                    }
                    _ => {}
                }
                cur = s.offset(d.0, d.1);
            }
        }

        for (dc, dr) in KNIGHT_JUMPS {
            if let Some(s) = king.offset(dc, dr)
                && self
                    .piece_at(s)
                    .is_some_and(|pc| pc.color != us && pc.kind == PieceKind::Knight)
            {
                in_check = true;
                checks.push(Check {
                    square: s,
                    direction: (dc, dr),
                });
            }
        }

        (in_check, pins, checks)
    }

    /// Remove and return the pin direction recorded for `sq`, if any.
    fn take_pin(&mut self, sq: Square) -> Option<Direction> {
        let i = self.pins.iter().rposition(|p| p.square == sq)?;
        Some(self.pins.remove(i).direction)
    }

    fn get_pawn_moves(&mut self, from: Square, moves: &mut Vec<Move>) {
        let pin = self.take_pin(from);
        let us = self.side_to_move;
        let pawn = Piece::new(us, PieceKind::Pawn);
        let fwd = us.forward();

        if let Some(one) = from.offset(0, fwd)
            && self.piece_at(one).is_none()
            && along_pin(pin, (0, fwd))
        {
            moves.push(Move::regular(from, one, pawn, &self.board));
            if from.row == us.pawn_rank()
                && let Some(two) = from.offset(0, 2 * fwd)
                && self.piece_at(two).is_none()
            {
                moves.push(Move::regular(from, two, pawn, &self.board));
            }
        }

        for dc in [-1, 1] {
            let Some(to) = from.offset(dc, fwd) else {
                continue;
            };
            if !along_pin(pin, (dc, fwd)) {
                continue;
            }
            match self.piece_at(to) {
                Some(pc) if pc.color != us => {
                    moves.push(Move::regular(from, to, pawn, &self.board));
                }
                None if self.enpassant_possible == Some(to) => {
                    let beside = Square::new(to.col, from.row);
                    let victim = Piece::new(us.other(), PieceKind::Pawn);
                    if self.piece_at(beside) == Some(victim)
                        && !self.en_passant_exposes_king(from, to, beside)
                    {
                        moves.push(Move::en_passant(from, to, pawn));
                    }
                }
                _ => {}
            }
        }
    }

    /// En passant empties two squares on one rank at once, which the pin scan
    /// cannot see. Try it on the board and look for an attack on the king.
    fn en_passant_exposes_king(&mut self, from: Square, to: Square, captured: Square) -> bool {
        let pawn = self.piece_at(from);
        let victim = self.piece_at(captured);
        self.set_piece(from, None);
        self.set_piece(captured, None);
        self.set_piece(to, pawn);

        let us = self.side_to_move;
        let exposed = self.is_square_attacked(self.king_location(us), us.other());

        self.set_piece(to, None);
        self.set_piece(captured, victim);
        self.set_piece(from, pawn);
        exposed
    }

    fn get_knight_moves(&mut self, from: Square, moves: &mut Vec<Move>) {
        // A knight never stays on its pin line.
        if self.take_pin(from).is_some() {
            return;
        }
        let us = self.side_to_move;
        let knight = Piece::new(us, PieceKind::Knight);
        for (dc, dr) in KNIGHT_JUMPS {
            if let Some(to) = from.offset(dc, dr)
                && self.piece_at(to).is_none_or(|pc| pc.color != us)
            {
                moves.push(Move::regular(from, to, knight, &self.board));
            }
        }
    }

    fn get_bishop_moves(&mut self, from: Square, moves: &mut Vec<Move>) {
        let pin = self.take_pin(from);
        self.push_slider_moves(from, &DIAGONAL, pin, moves);
    }

    fn get_rook_moves(&mut self, from: Square, moves: &mut Vec<Move>) {
        let pin = self.take_pin(from);
        self.push_slider_moves(from, &ORTHOGONAL, pin, moves);
    }

    /// Rook plus bishop rays; the pin entry is consumed once for both.
    fn get_queen_moves(&mut self, from: Square, moves: &mut Vec<Move>) {
        let pin = self.take_pin(from);
        self.push_slider_moves(from, &DIAGONAL, pin, moves);
        self.push_slider_moves(from, &ORTHOGONAL, pin, moves);
    }

    fn push_slider_moves(
        &self,
        from: Square,
        dirs: &[Direction],
        pin: Option<Direction>,
        moves: &mut Vec<Move>,
    ) {
        let Some(slider) = self.piece_at(from) else {
            return;
        };
        for &(dc, dr) in dirs {
            if !along_pin(pin, (dc, dr)) {
                continue;
            }
            let mut cur = from.offset(dc, dr);
            while let Some(to) = cur {
                match self.piece_at(to) {
                    None => moves.push(Move::regular(from, to, slider, &self.board)),
                    Some(pc) if pc.color != slider.color => {
                        moves.push(Move::regular(from, to, slider, &self.board));
                        break;
                    }
                    _ => break,
                }
                cur = to.offset(dc, dr);
            }
        }
    }

    /// King steps, each tried by moving the cached king location and rescanning.
    /// The board itself is not touched, and the location is restored afterwards.
    fn get_king_moves(&mut self, from: Square, moves: &mut Vec<Move>) {
        let us = self.side_to_move;
        let king = Piece::new(us, PieceKind::King);
        for (dc, dr) in KING_STEPS {
            let Some(to) = from.offset(dc, dr) else {
                continue;
            };
            if self.piece_at(to).is_some_and(|pc| pc.color == us) {
                continue;
            }
            self.set_king_location(us, to);
            let (in_check, _, _) = self.check_for_pins_and_checks();
            if !in_check {
                moves.push(Move::regular(from, to, king, &self.board));
            }
            self.set_king_location(us, from);
        }
    }

    /// Castles need the right, the king on its home square and out of check,
    /// an empty path to the rook, and unattacked transit squares. The b-file
    /// square on the queenside only has to be empty.
    fn get_castle_moves(&self, king_sq: Square, moves: &mut Vec<Move>) {
        let us = self.side_to_move;
        let row = us.back_rank();
        if king_sq != Square::new(4, row) || self.square_under_attack(king_sq) {
            return;
        }
        let king = Piece::new(us, PieceKind::King);
        let rook = Some(Piece::new(us, PieceKind::Rook));
        let empty = |cols: &[u8]| {
            cols.iter()
                .all(|&c| self.piece_at(Square::new(c, row)).is_none())
        };
        let safe = |cols: &[u8]| {
            cols.iter()
                .all(|&c| !self.square_under_attack(Square::new(c, row)))
        };

        if self.castle_rights.kingside(us)
            && self.piece_at(Square::new(7, row)) == rook
            && empty(&[5, 6])
            && safe(&[5, 6])
        {
            moves.push(Move::castle(king_sq, Square::new(6, row), king));
        }
        if self.castle_rights.queenside(us)
            && self.piece_at(Square::new(0, row)) == rook
            && empty(&[1, 2, 3])
            && safe(&[2, 3])
        {
            moves.push(Move::castle(king_sq, Square::new(2, row), king));
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
