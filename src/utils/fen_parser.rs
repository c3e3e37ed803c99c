//! FEN-to-BoardState parser.
//!
//! Fills the piece bitboards from the placement field and derives the color
//! occupancy caches. Accepts either the placement field on its own or a full
//! six-field FEN; in the latter case the remaining fields are validated and
//! kept as position metadata.

use crate::chess_errors::ChessErrors;
use crate::game_state::board_state::{BoardState, PositionMetadata};
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::piece_codec::identity_for_char;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<BoardState, ChessErrors> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let mut board = BoardState::new_empty();

    match fields.as_slice() {
        [] => {
            return Err(ChessErrors::MalformedPlacement(
                "missing piece placement".to_owned(),
            ))
        }
        [placement] => parse_placement(placement, &mut board)?,
        [placement, side, castling, en_passant, halfmove, fullmove] => {
            parse_placement(placement, &mut board)?;
            board.metadata = PositionMetadata {
                side_to_move: parse_side_to_move(side)?,
                castling_rights: parse_castling_rights(castling)?,
                en_passant_square: parse_en_passant_square(en_passant)?,
                halfmove_clock: parse_counter("halfmove clock", halfmove)?,
                fullmove_number: parse_counter("fullmove number", fullmove)?,
            };
        }
        _ => {
            return Err(ChessErrors::MalformedField(format!(
                "expected 1 or 6 fields, found {}",
                fields.len()
            )))
        }
    }

    board.recalc_occupancy();
    Ok(board)
}

/// Placement squares are listed rank 8 to rank 1, file a to h; running
/// counter `k` lands on LERF square `56 - 8 * (k / 8) + k % 8`.
#[inline]
fn placement_square(board_pos: usize) -> Square {
    (56 - 8 * (board_pos / 8) + board_pos % 8) as Square
}

fn parse_placement(placement: &str, board: &mut BoardState) -> Result<(), ChessErrors> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::MalformedPlacement(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board_pos = 0usize;

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank_end = (fen_rank_idx + 1) * 8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::MalformedPlacement(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                board_pos += empty_count as usize;
                continue;
            }

            let piece = identity_for_char(ch).map_err(|_| {
                ChessErrors::MalformedPlacement(format!("invalid piece character '{ch}'"))
            })?;

            if board_pos >= rank_end {
                return Err(ChessErrors::MalformedPlacement(format!(
                    "rank {} has more than 8 files",
                    8 - fen_rank_idx
                )));
            }

            board.pieces[piece.index()] |= 1u64 << placement_square(board_pos);
            board_pos += 1;
        }

        if board_pos != rank_end {
            return Err(ChessErrors::MalformedPlacement(format!(
                "rank {} covers {} squares",
                8 - fen_rank_idx,
                board_pos - fen_rank_idx * 8
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessErrors::MalformedField(format!(
            "invalid side to move: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessErrors> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        let right = match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => {
                return Err(ChessErrors::MalformedField(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        };
        if rights & right != 0 {
            return Err(ChessErrors::MalformedField(format!(
                "repeated castling right: {ch}"
            )));
        }
        rights |= right;
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part).map_err(|_| {
        ChessErrors::MalformedField(format!("invalid en-passant square: {en_passant_part}"))
    })?;

    match rank_of(square) {
        2 | 5 => Ok(Some(square)),
        _ => Err(ChessErrors::MalformedField(format!(
            "en-passant square must be on rank 3 or 6: {en_passant_part}"
        ))),
    }
}

fn parse_counter(name: &str, value: &str) -> Result<u16, ChessErrors> {
    value
        .parse::<u16>()
        .map_err(|_| ChessErrors::MalformedField(format!("invalid {name}: {value}")))
}
