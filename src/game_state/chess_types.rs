//! Core value types for the bitboard board representation.
//!
//! Squares use Little-Endian Rank-File mapping: `0 == a1`, `7 == h1`,
//! `56 == a8`, `63 == h8`, so `square == rank * 8 + file`.

pub use crate::game_state::board_state::BoardState;
pub use crate::game_state::move_descriptor::{MoveDescriptor, MoveFlags, PromotionPiece};

use crate::chess_errors::ChessErrors;

/// Board square index (`0..=63`).
pub type Square = u8;

/// 64-bit square-set where bit `i` represents square `i`.
pub type Bitboard = u64;

pub const NUM_SQUARES: u8 = 64;
pub const NUM_PIECE_BITBOARDS: usize = 12;
pub const NUM_COLORS: usize = 2;

/// Piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; NUM_COLORS] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// A piece identity: one of the twelve (color, kind) pairs.
///
/// Each identity owns exactly one piece bitboard in [`BoardState`], at
/// [`Piece::index`]. That index also fixes the scan order used by piece
/// lookups: white pawn through white king, then black pawn through black king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const ALL: [Piece; NUM_PIECE_BITBOARDS] = [
        Piece::new(Color::White, PieceKind::Pawn),
        Piece::new(Color::White, PieceKind::Knight),
        Piece::new(Color::White, PieceKind::Bishop),
        Piece::new(Color::White, PieceKind::Rook),
        Piece::new(Color::White, PieceKind::Queen),
        Piece::new(Color::White, PieceKind::King),
        Piece::new(Color::Black, PieceKind::Pawn),
        Piece::new(Color::Black, PieceKind::Knight),
        Piece::new(Color::Black, PieceKind::Bishop),
        Piece::new(Color::Black, PieceKind::Rook),
        Piece::new(Color::Black, PieceKind::Queen),
        Piece::new(Color::Black, PieceKind::King),
    ];

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Position of this identity's bitboard, `0..12`.
    #[inline]
    pub const fn index(self) -> usize {
        self.color.index() * 6 + self.kind.index()
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// One-hot square-set for `square`.
#[inline]
pub fn square_mask(square: Square) -> Result<Bitboard, ChessErrors> {
    1u64.checked_shl(u32::from(square))
        .ok_or(ChessErrors::SquareOutOfRange(square))
}

/// The single square of a one-hot square-set.
#[inline]
pub fn square_of_mask(mask: Bitboard) -> Result<Square, ChessErrors> {
    if mask.count_ones() != 1 {
        return Err(ChessErrors::InvalidSquareSet(mask));
    }
    Ok(mask.trailing_zeros() as Square)
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}
