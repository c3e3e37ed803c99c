//! Square and square-set conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square/bitboard representations reused by the FEN, move-text and
//! rendering components.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{square_mask, square_of_mask, Bitboard, Square, NUM_SQUARES};

const FILE_NAMES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
const RANK_NAMES: [char; 8] = ['1', '2', '3', '4', '5', '6', '7', '8'];

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert algebraic notation (for example: "e4") to a one-hot square-set.
#[inline]
pub fn algebraic_to_bitboard(square: &str) -> Result<Bitboard, ChessErrors> {
    square_mask(algebraic_to_square(square)?)
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, ChessErrors> {
    if square >= NUM_SQUARES {
        return Err(ChessErrors::SquareOutOfRange(square));
    }

    let file = FILE_NAMES[usize::from(square % 8)];
    let rank = RANK_NAMES[usize::from(square / 8)];

    Ok(format!("{file}{rank}"))
}

/// Convert a one-hot square-set to algebraic notation (for example: "e4").
#[inline]
pub fn bitboard_to_algebraic(bitboard: Bitboard) -> Result<String, ChessErrors> {
    square_to_algebraic(square_of_mask(bitboard)?)
}

#[cfg(test)]
mod tests {
    use super::{
        algebraic_to_bitboard, algebraic_to_square, bitboard_to_algebraic, square_to_algebraic,
    };
    use crate::chess_errors::ChessErrors;

    #[test]
    fn corner_squares_convert() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 0);
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), 7);
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), 56);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 63);
        assert_eq!(square_to_algebraic(0).expect("0 should convert"), "a1");
        assert_eq!(square_to_algebraic(63).expect("63 should convert"), "h8");
    }

    #[test]
    fn bitboard_conversion() {
        let e4 = algebraic_to_bitboard("e4").expect("e4 should parse");
        assert_eq!(e4, 1u64 << 28);
        assert_eq!(
            bitboard_to_algebraic(e4).expect("one-hot bitboard should convert"),
            "e4"
        );
    }

    #[test]
    fn bad_inputs_are_rejected() {
        for text in ["", "e", "e9", "i4", "E4", "e44"] {
            assert_eq!(
                algebraic_to_square(text),
                Err(ChessErrors::InvalidAlgebraicString(text.to_owned()))
            );
        }
        assert_eq!(square_to_algebraic(64), Err(ChessErrors::SquareOutOfRange(64)));
        assert_eq!(
            bitboard_to_algebraic(0b101),
            Err(ChessErrors::InvalidSquareSet(0b101))
        );
    }
}
