//! Crate root module declarations for the Vela positional core.
//!
//! Exposes the bitboard board state, the move descriptor interchange type,
//! in-place move application/retraction, FEN and move-text utilities and the
//! console session so binaries, tests and external move generators can import
//! stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board_state;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod move_descriptor;
    pub mod piece_codec;
}

pub mod move_application {
    pub mod apply_move;
}

pub mod session {
    pub mod console;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_board;
}
