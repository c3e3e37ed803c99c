use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::piece_codec::char_for_identity;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(board: &BoardState) -> String {
    let placement = generate_placement_field(board);
    let side_to_move = match board.metadata.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(board.metadata.castling_rights);
    let en_passant = generate_en_passant_field(board.metadata.en_passant_square);

    format!(
        "{} {} {} {} {} {}",
        placement,
        side_to_move,
        castling,
        en_passant,
        board.metadata.halfmove_clock,
        board.metadata.fullmove_number
    )
}

/// Just the piece-placement field.
pub fn generate_placement_field(board: &BoardState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            if let Some(piece) = board.piece_at(rank * 8 + file) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(char_for_identity(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    for (right, ch) in [
        (CASTLE_WHITE_KINGSIDE, 'K'),
        (CASTLE_WHITE_QUEENSIDE, 'Q'),
        (CASTLE_BLACK_KINGSIDE, 'k'),
        (CASTLE_BLACK_QUEENSIDE, 'q'),
    ] {
        if rights & right != 0 {
            out.push(ch);
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(square: Option<Square>) -> String {
    let Some(square) = square else {
        return "-".to_owned();
    };

    square_to_algebraic(square).unwrap_or_else(|_| "-".to_owned())
}
