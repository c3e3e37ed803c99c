//! Core bitboard board state.
//!
//! `BoardState` is the authoritative position snapshot. It stores one
//! bitboard per piece identity, a cached occupancy bitboard per color, the
//! informational FEN metadata, and the move-history stack used by
//! apply/retract.
//!
//! Invariants at every quiescent point:
//! - the twelve piece bitboards are pairwise disjoint;
//! - `occupancy_by_color[c]` is the union of the six bitboards of color `c`;
//! - placing a piece on a square first clears that square everywhere.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{CastlingRights, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::move_application::apply_move::{apply_move, retract_move};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// The five non-placement FEN fields.
///
/// These are parsed, validated and written back out, but moves never update
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionMetadata {
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for PositionMetadata {
    fn default() -> Self {
        Self {
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

/// Mutable bitboard position with move history.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    // Indexed by `Piece::index()`.
    pub(crate) pieces: [Bitboard; NUM_PIECE_BITBOARDS],

    // Indexed by `Color::index()`. Cache only; never scanned for identities.
    pub(crate) occupancy_by_color: [Bitboard; NUM_COLORS],

    pub metadata: PositionMetadata,

    // Applied moves, oldest first. The copies carry the moved and captured
    // pieces recorded at apply time.
    pub(crate) move_history: Vec<MoveDescriptor>,
}

impl BoardState {
    /// All bitboards zero, no history.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn starting_position() -> Result<Self, ChessErrors> {
        parse_fen(STARTING_POSITION_FEN)
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_bitboard(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.index()]
    }

    /// All twelve piece bitboards in `Piece::index()` order.
    #[inline]
    pub fn piece_bitboards(&self) -> &[Bitboard; NUM_PIECE_BITBOARDS] {
        &self.pieces
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupancy_by_color[Color::White.index()] | self.occupancy_by_color[Color::Black.index()]
    }

    #[inline]
    pub fn move_history(&self) -> &[MoveDescriptor] {
        &self.move_history
    }

    /// Identity of the piece on `square`, if any.
    ///
    /// Scans the piece bitboards in `Piece::ALL` order and returns the first
    /// match, so a corrupted board still answers deterministically. Squares
    /// outside the board hold nothing.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let mask = square_mask(square).ok()?;

        Piece::ALL
            .into_iter()
            .find(|piece| self.pieces[piece.index()] & mask != 0)
    }

    /// Remove whatever stands on `square`. Idempotent.
    pub fn empty_square(&mut self, square: Square) {
        if let Ok(mask) = square_mask(square) {
            self.clear_mask(mask);
        }
    }

    /// Put `piece` on `square`, replacing any previous occupant.
    pub fn set_piece(&mut self, square: Square, piece: Piece) -> Result<(), ChessErrors> {
        let mask = square_mask(square)?;
        self.clear_mask(mask);
        self.pieces[piece.index()] |= mask;
        self.occupancy_by_color[piece.color.index()] |= mask;
        Ok(())
    }

    /// Apply `mv`, recording it on the move history.
    #[inline]
    pub fn apply(&mut self, mv: MoveDescriptor) -> Result<(), ChessErrors> {
        apply_move(self, mv)
    }

    /// Undo the most recent move and return its recorded descriptor.
    #[inline]
    pub fn retract(&mut self) -> Result<MoveDescriptor, ChessErrors> {
        retract_move(self)
    }

    /// True when the piece bitboards are pairwise disjoint and each color
    /// cache equals the union of that color's bitboards.
    pub fn invariants_hold(&self) -> bool {
        let mut seen = 0u64;
        for bb in self.pieces {
            if seen & bb != 0 {
                return false;
            }
            seen |= bb;
        }

        Color::ALL.into_iter().all(|color| {
            let union = Piece::ALL
                .into_iter()
                .filter(|piece| piece.color == color)
                .fold(0u64, |acc, piece| acc | self.pieces[piece.index()]);
            union == self.occupancy_by_color[color.index()]
        })
    }

    /// Rederive both color caches from the piece bitboards.
    pub(crate) fn recalc_occupancy(&mut self) {
        self.occupancy_by_color = [0; NUM_COLORS];
        for piece in Piece::ALL {
            self.occupancy_by_color[piece.color.index()] |= self.pieces[piece.index()];
        }
    }

    #[inline]
    fn clear_mask(&mut self, mask: Bitboard) {
        for bb in &mut self.pieces {
            *bb &= !mask;
        }
        for occupancy in &mut self.occupancy_by_color {
            *occupancy &= !mask;
        }
    }
}
