use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn advance for this side.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row of this side's pieces in the starting position.
    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// +1 when scores are read from White's side, -1 for Black.
    pub fn multiplier(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn idx(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_symbol(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: uppercase for White.
    pub fn fen_char(self) -> char {
        let c = self.kind.symbol();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

/// Step along a ray, as (column delta, row delta).
pub type Direction = (i8, i8);

pub const ORTHOGONAL: [Direction; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL: [Direction; 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];
pub const KNIGHT_JUMPS: [Direction; 8] = [
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
];
pub const KING_STEPS: [Direction; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// A board coordinate. Column 0 is the a-file, row 0 is Black's back rank (rank 8).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub col: u8,
    pub row: u8,
}

impl Square {
    /// Panics on coordinates outside the board; those are programmer errors.
    pub fn new(col: u8, row: u8) -> Self {
        assert!(col < 8 && row < 8, "square ({col}, {row}) is off the board");
        Self { col, row }
    }

    pub fn offset(self, dc: i8, dr: i8) -> Option<Square> {
        let col = self.col as i8 + dc;
        let row = self.row as i8 + dr;
        if (0..8).contains(&col) && (0..8).contains(&row) {
            Some(Square {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    /// Parse algebraic notation such as `e4`.
    pub fn from_coord(c: &str) -> Option<Square> {
        let b = c.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let (f, r) = (b[0], b[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Some(Square {
            col: f - b'a',
            row: b'8' - r,
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        write!(f, "{file}{rank}")
    }
}

/// Row-major grid indexed `[row][col]`.
pub type Board = [[Option<Piece>; 8]; 8];

/// Castling permissions. Once cleared a right only comes back through undo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastleRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastleRights {
    pub const ALL: CastleRights = CastleRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: CastleRights = CastleRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    pub fn kingside(&self, c: Color) -> bool {
        match c {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    pub fn queenside(&self, c: Color) -> bool {
        match c {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    pub fn clear(&mut self, c: Color) {
        match c {
            Color::White => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            Color::Black => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }

    /// Drop the right tied to a rook's home square, if `sq` is one.
    pub fn clear_rook_square(&mut self, c: Color, sq: Square) {
        if sq.row != c.back_rank() {
            return;
        }
        match (c, sq.col) {
            (Color::White, 0) => self.white_queenside = false,
            (Color::White, 7) => self.white_kingside = false,
            (Color::Black, 0) => self.black_queenside = false,
            (Color::Black, 7) => self.black_kingside = false,
            _ => {}
        }
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::ALL
    }
}

/// A single ply. Equality and hashing only look at the endpoints, so a move built
/// from two clicked squares compares equal to the generated move with its flags.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_enpassant: bool,
    pub is_castle: bool,
    pub is_pawn_promotion: bool,
}

impl Move {
    /// Candidate move between two squares of `board`. Returns `None` when the start
    /// square is empty, since such a candidate can never match a legal move.
    pub fn new(start: Square, end: Square, board: &Board) -> Option<Self> {
        let moved = board[start.row as usize][start.col as usize]?;
        Some(Self::regular(start, end, moved, board))
    }

    pub(crate) fn regular(start: Square, end: Square, moved: Piece, board: &Board) -> Self {
        let is_pawn_promotion =
            moved.kind == PieceKind::Pawn && end.row == moved.color.other().back_rank();
        Self {
            start,
            end,
            piece_moved: moved,
            piece_captured: board[end.row as usize][end.col as usize],
            is_enpassant: false,
            is_castle: false,
            is_pawn_promotion,
        }
    }

    pub(crate) fn en_passant(start: Square, end: Square, moved: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved: moved,
            piece_captured: Some(Piece::new(moved.color.other(), PieceKind::Pawn)),
            is_enpassant: true,
            is_castle: false,
            is_pawn_promotion: false,
        }
    }

    pub(crate) fn castle(start: Square, end: Square, king: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved: king,
            piece_captured: None,
            is_enpassant: false,
            is_castle: true,
            is_pawn_promotion: false,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Square of the piece actually removed by this move.
    pub fn captured_square(&self) -> Option<Square> {
        self.piece_captured?;
        if self.is_enpassant {
            Some(Square {
                col: self.end.col,
                row: self.start.row,
            })
        } else {
            Some(self.end)
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if self.is_pawn_promotion {
            write!(f, "q")?;
        }
        Ok(())
    }
}

/// Look up the generated move matching a pair of clicked squares.
pub fn find_move(valid_moves: &[Move], start: Square, end: Square) -> Option<Move> {
    valid_moves
        .iter()
        .find(|m| m.start == start && m.end == end)
        .copied()
}

/// A friendly piece standing between its king and an enemy slider.
/// `direction` points outward from the king.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub direction: Direction,
}

/// An enemy piece giving check. For knights `direction` is the jump offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Check {
    pub square: Square,
    pub direction: Direction,
}
