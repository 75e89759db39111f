//! Errors for position setup from text.

use crate::types::Color;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("FEN is missing the {0} field")]
    MissingField(&'static str),

    #[error("FEN board must have 8 ranks, found {0}")]
    RankCount(usize),

    #[error("FEN rank {rank} describes {files} files, expected 8")]
    FileCount { rank: usize, files: usize },

    #[error("invalid piece character '{0}' in FEN")]
    InvalidPiece(char),

    #[error("invalid side to move '{0}'")]
    InvalidSide(String),

    #[error("invalid castling character '{0}'")]
    InvalidCastling(char),

    #[error("invalid en-passant square '{0}'")]
    InvalidEnPassant(String),

    #[error("expected exactly one {color:?} king, found {count}")]
    KingCount { color: Color, count: usize },
}
