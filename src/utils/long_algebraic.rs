//! Long algebraic move text (`e2e4`, `e7e8q`) to and from move descriptors.
//!
//! Both directions are pure: no board context, no legality.

use crate::chess_errors::ChessErrors;
use crate::game_state::move_descriptor::{MoveDescriptor, PromotionPiece};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Render a move as origin + destination + optional promotion letter.
pub fn move_to_long_algebraic(mv: &MoveDescriptor) -> Result<String, ChessErrors> {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(mv.origin_square())?);
    out.push_str(&square_to_algebraic(mv.destination_square())?);

    if let Some(promotion) = mv.flags().promotion() {
        out.push(promotion.suffix());
    }

    Ok(out)
}

/// Parse `e2e4` / `e7e8q` into a descriptor. En passant cannot be expressed
/// in this notation; callers set it with `with_en_passant`.
pub fn long_algebraic_to_move(long_algebraic: &str) -> Result<MoveDescriptor, ChessErrors> {
    let invalid = || ChessErrors::InvalidAlgebraicString(long_algebraic.to_owned());

    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&long_algebraic[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&long_algebraic[2..4]).map_err(|_| invalid())?;
    let mv = MoveDescriptor::new(from, to)?;

    match long_algebraic[4..].chars().next() {
        None => Ok(mv),
        Some(ch) => {
            let promotion = PromotionPiece::from_suffix(ch).ok_or_else(invalid)?;
            Ok(mv.with_promotion(promotion))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::move_descriptor::{MoveDescriptor, PromotionPiece};

    #[test]
    fn simple_move_parses_to_square_sets() {
        let mv = long_algebraic_to_move("e2e4").expect("move should parse");
        assert_eq!(mv.origin(), 1u64 << 12);
        assert_eq!(mv.destination(), 1u64 << 28);
        assert_eq!(mv.flags().promotion(), None);
        assert_eq!(move_to_long_algebraic(&mv).expect("move renders"), "e2e4");
    }

    #[test]
    fn promotion_suffix_is_case_insensitive() {
        let mv = long_algebraic_to_move("a7a8N").expect("move should parse");
        assert_eq!(mv.flags().promotion(), Some(PromotionPiece::Knight));
        assert_eq!(move_to_long_algebraic(&mv).expect("move renders"), "a7a8n");
    }

    #[test]
    fn every_promotion_letter_renders() {
        for (piece, text) in [
            (PromotionPiece::Knight, "b2b1n"),
            (PromotionPiece::Bishop, "b2b1b"),
            (PromotionPiece::Rook, "b2b1r"),
            (PromotionPiece::Queen, "b2b1q"),
        ] {
            let mv = MoveDescriptor::new(9, 1)
                .expect("valid squares")
                .with_promotion(piece);
            assert_eq!(move_to_long_algebraic(&mv).expect("move renders"), text);
        }
    }

    #[test]
    fn malformed_text_is_rejected() {
        for text in ["", "e2", "e2e", "e2e9", "e2e4k", "e2e4qq", "x2e4", "é2e4"] {
            assert_eq!(
                long_algebraic_to_move(text),
                Err(ChessErrors::InvalidAlgebraicString(text.to_owned()))
            );
        }
    }
}
