//! FEN piece-letter codec.
//!
//! Uppercase letters are white, lowercase are black; the letter picks the kind
//! (`P N B R Q K`). Both directions agree on all twelve identities.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, Piece, PieceKind};

/// Decode a FEN piece letter.
pub fn identity_for_char(ch: char) -> Result<Piece, ChessErrors> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return Err(ChessErrors::UnknownSymbol(ch));
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return Err(ChessErrors::UnknownSymbol(ch)),
    };

    Ok(Piece::new(color, kind))
}

/// Encode a piece identity as its FEN letter.
pub fn char_for_identity(piece: Piece) -> char {
    let base = kind_char(piece.kind);

    match piece.color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

/// Lowercase letter for a piece kind, as used in promotion suffixes.
pub fn kind_char(kind: PieceKind) -> char {
    match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    }
}
