//! Move descriptor: the interchange value between the board and move
//! generation / search.
//!
//! A descriptor is `{origin, destination, flags}` where origin and destination
//! are one-hot square-sets and `flags` is a packed 64-bit record:
//!
//! | bits  | field                                                        |
//! |-------|--------------------------------------------------------------|
//! | 0-3   | promotion, one-hot: knight=1, bishop=2, rook=4, queen=8      |
//! | 4     | en passant                                                   |
//! | 5-8   | captured piece, `0` = none, else `Piece::index() + 1`        |
//! | 9-12  | moved piece, `0` = not recorded, else `Piece::index() + 1`   |
//! | 13-63 | reserved, must be zero                                       |
//!
//! The captured and moved piece fields are filled in by the board when the
//! move is applied; the copy kept on the move history carries them so the
//! move can be retracted exactly.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{square_mask, square_of_mask, Bitboard, Piece, PieceKind, Square};

pub const PROMOTION_MASK: u64 = 0b1111;
pub const PROMOTION_KNIGHT: u64 = 0b0001;
pub const PROMOTION_BISHOP: u64 = 0b0010;
pub const PROMOTION_ROOK: u64 = 0b0100;
pub const PROMOTION_QUEEN: u64 = 0b1000;

pub const EN_PASSANT_FLAG: u64 = 1 << 4;

const CAPTURED_SHIFT: u64 = 5;
const MOVED_SHIFT: u64 = 9;
const PIECE_CODE_MASK: u64 = 0xF;
const NO_PIECE_CODE: u64 = 0;

const DEFINED_BITS: u64 = (1 << 13) - 1;

/// Piece kinds a pawn may promote to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotionPiece {
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    #[inline]
    const fn flag_bit(self) -> u64 {
        match self {
            PromotionPiece::Knight => PROMOTION_KNIGHT,
            PromotionPiece::Bishop => PROMOTION_BISHOP,
            PromotionPiece::Rook => PROMOTION_ROOK,
            PromotionPiece::Queen => PROMOTION_QUEEN,
        }
    }

    /// Lowercase suffix letter used in long algebraic notation.
    pub const fn suffix(self) -> char {
        match self {
            PromotionPiece::Knight => 'n',
            PromotionPiece::Bishop => 'b',
            PromotionPiece::Rook => 'r',
            PromotionPiece::Queen => 'q',
        }
    }

    pub fn from_suffix(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'n' => Some(PromotionPiece::Knight),
            'b' => Some(PromotionPiece::Bishop),
            'r' => Some(PromotionPiece::Rook),
            'q' => Some(PromotionPiece::Queen),
            _ => None,
        }
    }
}

/// Packed move flags. Always holds a valid encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveFlags(u64);

impl MoveFlags {
    pub const NONE: MoveFlags = MoveFlags(0);

    /// Validate raw bits received from an external producer.
    pub fn from_bits(bits: u64) -> Result<Self, ChessErrors> {
        if bits & !DEFINED_BITS != 0 {
            return Err(ChessErrors::InvalidMoveFlags(bits));
        }

        let promotion = bits & PROMOTION_MASK;
        if promotion.count_ones() > 1 {
            return Err(ChessErrors::InvalidMoveFlags(bits));
        }

        for shift in [CAPTURED_SHIFT, MOVED_SHIFT] {
            let code = (bits >> shift) & PIECE_CODE_MASK;
            if code != NO_PIECE_CODE && piece_from_code(code).is_none() {
                return Err(ChessErrors::InvalidMoveFlags(bits));
            }
        }

        Ok(MoveFlags(bits))
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    pub fn promotion(self) -> Option<PromotionPiece> {
        match self.0 & PROMOTION_MASK {
            PROMOTION_KNIGHT => Some(PromotionPiece::Knight),
            PROMOTION_BISHOP => Some(PromotionPiece::Bishop),
            PROMOTION_ROOK => Some(PromotionPiece::Rook),
            PROMOTION_QUEEN => Some(PromotionPiece::Queen),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        self.0 & EN_PASSANT_FLAG != 0
    }

    /// Piece removed by this move, as recorded when it was applied.
    pub fn captured_piece(self) -> Option<Piece> {
        piece_from_code((self.0 >> CAPTURED_SHIFT) & PIECE_CODE_MASK)
    }

    /// Piece that made this move, as recorded when it was applied.
    pub fn moved_piece(self) -> Option<Piece> {
        piece_from_code((self.0 >> MOVED_SHIFT) & PIECE_CODE_MASK)
    }

    #[must_use]
    pub const fn with_promotion(self, promotion: Option<PromotionPiece>) -> Self {
        let cleared = self.0 & !PROMOTION_MASK;
        match promotion {
            Some(piece) => MoveFlags(cleared | piece.flag_bit()),
            None => MoveFlags(cleared),
        }
    }

    #[must_use]
    pub const fn with_en_passant(self, en_passant: bool) -> Self {
        if en_passant {
            MoveFlags(self.0 | EN_PASSANT_FLAG)
        } else {
            MoveFlags(self.0 & !EN_PASSANT_FLAG)
        }
    }

    #[must_use]
    pub fn with_captured_piece(self, piece: Option<Piece>) -> Self {
        let cleared = self.0 & !(PIECE_CODE_MASK << CAPTURED_SHIFT);
        MoveFlags(cleared | (piece_to_code(piece) << CAPTURED_SHIFT))
    }

    #[must_use]
    pub fn with_moved_piece(self, piece: Option<Piece>) -> Self {
        let cleared = self.0 & !(PIECE_CODE_MASK << MOVED_SHIFT);
        MoveFlags(cleared | (piece_to_code(piece) << MOVED_SHIFT))
    }
}

#[inline]
fn piece_to_code(piece: Option<Piece>) -> u64 {
    piece.map_or(NO_PIECE_CODE, |p| p.index() as u64 + 1)
}

#[inline]
fn piece_from_code(code: u64) -> Option<Piece> {
    if code == NO_PIECE_CODE {
        return None;
    }
    Piece::from_index(code as usize - 1)
}

/// One move: origin and destination square-sets plus packed flags.
///
/// Descriptors are plain `Copy` values; the board's move history owns its
/// own copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveDescriptor {
    origin: Bitboard,
    destination: Bitboard,
    flags: MoveFlags,
}

impl MoveDescriptor {
    /// Quiet move (no flags) between two square indices.
    pub fn new(from: Square, to: Square) -> Result<Self, ChessErrors> {
        Ok(Self {
            origin: square_mask(from)?,
            destination: square_mask(to)?,
            flags: MoveFlags::NONE,
        })
    }

    /// Build from the raw interchange layout, validating every field.
    pub fn from_raw(origin: u64, destination: u64, flags: u64) -> Result<Self, ChessErrors> {
        square_of_mask(origin)?;
        square_of_mask(destination)?;
        Ok(Self {
            origin,
            destination,
            flags: MoveFlags::from_bits(flags)?,
        })
    }

    /// The raw `(origin, destination, flags)` interchange layout.
    #[inline]
    pub const fn to_raw(self) -> (u64, u64, u64) {
        (self.origin, self.destination, self.flags.bits())
    }

    #[must_use]
    pub const fn with_promotion(self, promotion: PromotionPiece) -> Self {
        Self {
            flags: self.flags.with_promotion(Some(promotion)),
            ..self
        }
    }

    #[must_use]
    pub const fn with_en_passant(self, en_passant: bool) -> Self {
        Self {
            flags: self.flags.with_en_passant(en_passant),
            ..self
        }
    }

    #[must_use]
    pub(crate) const fn with_flags(self, flags: MoveFlags) -> Self {
        Self { flags, ..self }
    }

    #[inline]
    pub const fn origin(self) -> Bitboard {
        self.origin
    }

    #[inline]
    pub const fn destination(self) -> Bitboard {
        self.destination
    }

    #[inline]
    pub const fn flags(self) -> MoveFlags {
        self.flags
    }

    #[inline]
    pub const fn origin_square(self) -> Square {
        self.origin.trailing_zeros() as Square
    }

    #[inline]
    pub const fn destination_square(self) -> Square {
        self.destination.trailing_zeros() as Square
    }
}
