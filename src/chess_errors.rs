//! Errors used throughout the positional core.
//!
//! `ChessErrors` is the single error type returned by the piece codec, the FEN
//! parser, the board mutation API and the console session. Every failure is
//! local and synchronous: nothing here is transient, so callers should report
//! the error rather than retry.
//!
//! Usage guidelines:
//! - Parsing variants (`UnknownSymbol`, `MalformedPlacement`, `MalformedField`,
//!   `InvalidAlgebraicString`) describe bad user input and are suitable for
//!   presenting back to whoever typed it.
//! - Move variants (`NoPieceAtOrigin`, `DegenerateMove`, `InvalidSquareSet`,
//!   `InvalidMoveFlags`) mean a move descriptor from move generation or search
//!   did not describe something the board can execute. The board is left
//!   untouched when one of these is returned.
//! - `EmptyHistory` is returned by retraction when there is nothing to undo.

use thiserror::Error;

use crate::game_state::chess_types::Square;

/// Unified error type for the positional core.
///
/// Variants carry the offending character, square or raw bits where that
/// helps diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A character is not one of the twelve FEN piece letters.
    ///
    /// Payload: the offending character.
    #[error("unknown piece symbol '{0}'")]
    UnknownSymbol(char),

    /// The piece-placement field of a FEN string is invalid or does not cover
    /// exactly 64 squares.
    ///
    /// Payload: a description of what went wrong.
    #[error("malformed piece placement: {0}")]
    MalformedPlacement(String),

    /// One of the five non-placement FEN fields is missing or invalid, or the
    /// string has the wrong number of fields.
    #[error("malformed FEN field: {0}")]
    MalformedField(String),

    /// A move was applied whose origin square holds no piece.
    #[error("no piece on origin square {0}")]
    NoPieceAtOrigin(Square),

    /// A move was applied whose origin and destination are the same square.
    #[error("origin and destination are both square {0}")]
    DegenerateMove(Square),

    /// Retraction was requested with no applied moves on the history stack.
    #[error("no moves to retract")]
    EmptyHistory,

    /// A square index outside `0..64`.
    #[error("square index out of range: {0}")]
    SquareOutOfRange(u8),

    /// A square-set that should contain exactly one bit contains zero or many.
    #[error("square-set must have exactly one bit set, got {0:#018x}")]
    InvalidSquareSet(u64),

    /// A packed move-flags value uses reserved bits or invalid sub-field codes.
    #[error("invalid move flags {0:#x}")]
    InvalidMoveFlags(u64),

    /// An algebraic square or long-algebraic move string could not be parsed.
    #[error("invalid algebraic string: {0}")]
    InvalidAlgebraicString(String),

    /// The console session received a command it does not know.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}
