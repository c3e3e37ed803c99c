//! Terminal-oriented ASCII renderers.
//!
//! Read-only views of a `BoardState` and its move descriptors for the console
//! session, tests and diagnostics.

use crate::game_state::board_state::BoardState;
use crate::game_state::move_descriptor::MoveDescriptor;
use crate::game_state::piece_codec::char_for_identity;
use crate::utils::long_algebraic::move_to_long_algebraic;

const RANK_SEPARATOR: &str = "  +---+---+---+---+---+---+---+---+";
const FILE_LABELS: &str = "    a   b   c   d   e   f   g   h";

/// Render the board as an 8x8 grid, rank 8 on top and file a on the left.
/// Empty squares are blank; occupied squares show the FEN letter.
pub fn render_board(board: &BoardState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        out.push_str(RANK_SEPARATOR);
        out.push_str("\n  |");

        for file in 0..8u8 {
            let cell = board
                .piece_at(rank * 8 + file)
                .map_or(' ', char_for_identity);
            out.push(' ');
            out.push(cell);
            out.push_str(" |");
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str(RANK_SEPARATOR);
    out.push('\n');
    out.push_str(FILE_LABELS);

    out
}

/// Render a move as `e2e4` / `e7e8q`.
pub fn render_move(mv: &MoveDescriptor) -> String {
    move_to_long_algebraic(mv).unwrap_or_else(|_| "0000".to_owned())
}

/// Applied moves, oldest first, one per line.
pub fn render_move_history(board: &BoardState) -> String {
    board
        .move_history()
        .iter()
        .map(render_move)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::{render_board, render_move, render_move_history};
    use crate::game_state::board_state::BoardState;
    use crate::utils::fen_parser::parse_fen;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    #[test]
    fn starting_board_renders_rank_eight_on_top() {
        let board = BoardState::starting_position().expect("start position parses");
        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], "  +---+---+---+---+---+---+---+---+");
        assert_eq!(lines[1], "  | r | n | b | q | k | b | n | r | 8");
        assert_eq!(lines[5], "  |   |   |   |   |   |   |   |   | 6");
        assert_eq!(lines[15], "  | R | N | B | Q | K | B | N | R | 1");
        assert_eq!(lines[17], "    a   b   c   d   e   f   g   h");
    }

    #[test]
    fn rendering_does_not_mutate() {
        let board = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN parses");
        let before = board.clone();
        let text = render_board(&board);
        assert!(text.contains("  |   |   |   | p | P |   |   |   | 5"));
        assert_eq!(board, before);
    }

    #[test]
    fn moves_and_history_render_in_long_algebraic() {
        let promotion = long_algebraic_to_move("g7g8q").expect("move parses");
        assert_eq!(render_move(&promotion), "g7g8q");

        let mut board = BoardState::starting_position().expect("start position parses");
        assert_eq!(render_move_history(&board), "");
        for text in ["e2e4", "e7e5", "g1f3"] {
            board
                .apply(long_algebraic_to_move(text).expect("move parses"))
                .expect("move applies");
        }
        assert_eq!(render_move_history(&board), "e2e4\ne7e5\ng1f3");
    }
}
