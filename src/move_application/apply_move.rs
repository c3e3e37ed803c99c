//! In-place move application and retraction.
//!
//! `apply_move` reads the mover and any captured piece off the board, rewrites
//! the affected squares and pushes a copy of the descriptor onto the board's
//! history with both pieces recorded in its flags. `retract_move` pops that
//! copy and restores the board bit-for-bit.
//!
//! No legality checks are made here: castling rook moves, check and turn
//! order belong to move generation.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;

pub fn apply_move(board: &mut BoardState, mv: MoveDescriptor) -> Result<(), ChessErrors> {
    let from = mv.origin_square();
    let to = mv.destination_square();
    let flags = mv.flags();

    if from == to {
        return Err(ChessErrors::DegenerateMove(from));
    }

    let moved_piece = board
        .piece_at(from)
        .ok_or(ChessErrors::NoPieceAtOrigin(from))?;

    let capture_square = if flags.is_en_passant() {
        en_passant_capture_square(from, to)
    } else {
        to
    };

    // An en-passant move lands on an empty square; anything else would be
    // overwritten without a record.
    if capture_square != to && board.piece_at(to).is_some() {
        return Err(ChessErrors::InvalidMoveFlags(flags.bits()));
    }

    let captured_piece = if capture_square == from {
        None
    } else {
        board.piece_at(capture_square)
    };

    let placed_piece = match flags.promotion() {
        Some(promotion) => Piece::new(moved_piece.color, promotion.kind()),
        None => moved_piece,
    };

    board.empty_square(from);
    board.empty_square(capture_square);
    board.set_piece(to, placed_piece)?;

    let recorded = flags
        .with_moved_piece(Some(moved_piece))
        .with_captured_piece(captured_piece);
    board.move_history.push(mv.with_flags(recorded));

    debug_assert!(board.invariants_hold());
    Ok(())
}

pub fn retract_move(board: &mut BoardState) -> Result<MoveDescriptor, ChessErrors> {
    let mv = *board.move_history.last().ok_or(ChessErrors::EmptyHistory)?;
    let from = mv.origin_square();
    let to = mv.destination_square();
    let flags = mv.flags();

    let moved_piece = flags
        .moved_piece()
        .ok_or(ChessErrors::InvalidMoveFlags(flags.bits()))?;

    board.move_history.pop();

    board.empty_square(to);
    board.set_piece(from, moved_piece)?;

    if let Some(captured) = flags.captured_piece() {
        let capture_square = if flags.is_en_passant() {
            en_passant_capture_square(from, to)
        } else {
            to
        };
        board.set_piece(capture_square, captured)?;
    }

    debug_assert!(board.invariants_hold());
    Ok(mv)
}

/// The pawn taken en passant stands beside the origin, on the destination
/// file.
#[inline]
fn en_passant_capture_square(from: Square, to: Square) -> Square {
    rank_of(from) * 8 + file_of(to)
}

#[cfg(test)]
mod tests {
    use super::{apply_move, retract_move};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn lan(text: &str) -> MoveDescriptor {
        long_algebraic_to_move(text).expect("test move should parse")
    }

    #[test]
    fn quiet_move_relocates_piece_and_records_history() {
        let mut board = BoardState::starting_position().expect("start position parses");
        apply_move(&mut board, lan("g1f3")).expect("knight move applies");

        let knight = Piece::new(Color::White, PieceKind::Knight);
        assert_eq!(board.piece_at(sq("g1")), None);
        assert_eq!(board.piece_at(sq("f3")), Some(knight));
        assert_eq!(board.occupancy(Color::White).count_ones(), 16);
        assert_eq!(board.move_history().len(), 1);

        let recorded = board.move_history()[0];
        assert_eq!(recorded.origin_square(), sq("g1"));
        assert_eq!(recorded.flags().moved_piece(), Some(knight));
        assert_eq!(recorded.flags().captured_piece(), None);
    }

    #[test]
    fn capture_removes_only_the_captured_bit() {
        let mut board = parse_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").expect("FEN parses");
        let before = board.clone();
        apply_move(&mut board, lan("e4d5")).expect("capture applies");

        let white_pawn = Piece::new(Color::White, PieceKind::Pawn);
        let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
        assert_eq!(board.piece_at(sq("d5")), Some(white_pawn));
        assert_eq!(board.piece_bitboard(black_pawn), 0);
        assert_eq!(board.piece_bitboard(white_pawn), 1u64 << sq("d5"));
        assert_eq!(
            board.occupancy(Color::Black),
            before.occupancy(Color::Black) & !(1u64 << sq("d5"))
        );
        assert_eq!(
            board.move_history()[0].flags().captured_piece(),
            Some(black_pawn)
        );
        assert!(board.invariants_hold());
    }

    #[test]
    fn retract_restores_captured_piece() {
        let mut board = parse_fen("r3k3/8/8/8/8/8/8/R3K3 w - - 0 1").expect("FEN parses");
        let before = board.clone();
        apply_move(&mut board, lan("a1a8")).expect("rook capture applies");
        let undone = retract_move(&mut board).expect("capture retracts");

        assert_eq!(board, before);
        assert_eq!(undone.origin_square(), sq("a1"));
        assert_eq!(
            undone.flags().captured_piece(),
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
    }

    #[test]
    fn promotion_places_promoted_piece_and_retract_restores_pawn() {
        let mut board = parse_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN parses");
        let before = board.clone();
        apply_move(&mut board, lan("a7b8q")).expect("capturing promotion applies");

        assert_eq!(
            board.piece_at(sq("b8")),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(board.piece_bitboard(Piece::new(Color::White, PieceKind::Pawn)), 0);
        assert_eq!(board.occupancy(Color::Black).count_ones(), 1);

        retract_move(&mut board).expect("promotion retracts");
        assert_eq!(board, before);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn_and_retract_restores_it() {
        let mut board = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN parses");
        let before = board.clone();
        apply_move(&mut board, lan("e5d6").with_en_passant(true)).expect("en passant applies");

        assert_eq!(
            board.piece_at(sq("d6")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(board.piece_at(sq("d5")), None);
        assert_eq!(board.piece_bitboard(Piece::new(Color::Black, PieceKind::Pawn)), 0);

        retract_move(&mut board).expect("en passant retracts");
        assert_eq!(board, before);
    }

    #[test]
    fn en_passant_onto_an_occupied_square_is_rejected() {
        let mut board = parse_fen("4k3/8/3n4/3pP3/8/8/8/4K3 w - - 0 1").expect("FEN parses");
        let before = board.clone();
        let mv = lan("e5d6").with_en_passant(true);

        assert_eq!(
            apply_move(&mut board, mv),
            Err(ChessErrors::InvalidMoveFlags(mv.flags().bits()))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn empty_origin_is_rejected_without_mutation() {
        let mut board = BoardState::starting_position().expect("start position parses");
        let before = board.clone();

        assert_eq!(
            apply_move(&mut board, lan("e4e5")),
            Err(ChessErrors::NoPieceAtOrigin(sq("e4")))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn degenerate_move_is_rejected() {
        let mut board = BoardState::starting_position().expect("start position parses");
        let mv = MoveDescriptor::new(sq("e2"), sq("e2")).expect("squares are valid");

        assert_eq!(
            apply_move(&mut board, mv),
            Err(ChessErrors::DegenerateMove(sq("e2")))
        );
        assert!(board.move_history().is_empty());
    }

    #[test]
    fn retract_on_fresh_board_reports_empty_history() {
        let mut board = BoardState::starting_position().expect("start position parses");
        assert_eq!(retract_move(&mut board), Err(ChessErrors::EmptyHistory));
    }

    #[test]
    fn retraction_unwinds_in_reverse_order() {
        let start = BoardState::starting_position().expect("start position parses");
        let mut board = start.clone();
        for text in ["e2e4", "d7d5", "e4d5", "d8d5", "b1c3", "d5a5"] {
            board.apply(lan(text)).expect("scripted move applies");
        }
        assert_eq!(board.move_history().len(), 6);
        assert_eq!(board.occupancy(Color::Black).count_ones(), 15);
        assert_eq!(board.occupancy(Color::White).count_ones(), 15);

        let last = board.retract().expect("history is not empty");
        assert_eq!(last.destination_square(), sq("a5"));

        while !board.move_history().is_empty() {
            board.retract().expect("history is not empty");
        }
        assert_eq!(board, start);
    }
}
