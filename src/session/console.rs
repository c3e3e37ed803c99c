//! Console front-end and command loop.
//!
//! `GameSession` owns the board for one game and interprets text commands
//! against it. Errors and, in debug mode, every state change are reported as
//! `info string` lines on the same output as regular responses.

use std::io::{self, BufRead, Write};

use crate::chess_errors::ChessErrors;
use crate::game_state::board_state::BoardState;
use crate::utils::long_algebraic::long_algebraic_to_move;
use crate::utils::render_board::{render_board, render_move, render_move_history};

const ENGINE_NAME: &str = "Vela";

/// Session settings. `debug_mode` can also be flipped with `debug on|off`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub intro: String,
    pub prompt: String,
    pub debug_mode: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            intro: format!("{} {} positional core", ENGINE_NAME, env!("CARGO_PKG_VERSION")),
            prompt: "vela >> ".to_owned(),
            debug_mode: false,
        }
    }
}

pub fn run_stdio_loop(config: SessionConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = GameSession::new(config)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

    writeln!(stdout, "{}", session.config.intro)?;
    write!(stdout, "{}", session.config.prompt)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        if should_quit {
            break;
        }
        write!(stdout, "{}", session.config.prompt)?;
        stdout.flush()?;
    }

    stdout.flush()
}

/// One game: a board plus the settings used to talk about it.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub board: BoardState,
    pub config: SessionConfig,
}

impl GameSession {
    /// New session on the standard starting position.
    pub fn new(config: SessionConfig) -> Result<Self, ChessErrors> {
        Ok(Self {
            board: BoardState::starting_position()?,
            config,
        })
    }

    /// Interpret one command line. Returns `true` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "d" => {
                writeln!(out, "{}", render_board(&self.board))?;
            }
            "fen" => {
                writeln!(out, "{}", self.board.get_fen())?;
            }
            "position" => match self.handle_position(trimmed) {
                Ok(summary) => self.log_debug(out, &summary)?,
                Err(err) => writeln!(out, "info string position error: {}", err)?,
            },
            "move" => match self.handle_move(trimmed) {
                Ok(summary) => self.log_debug(out, &summary)?,
                Err(err) => writeln!(out, "info string move error: {}", err)?,
            },
            "undo" => match self.board.retract() {
                Ok(mv) => self.log_debug(out, &format!("retracted {}", render_move(&mv)))?,
                Err(err) => writeln!(out, "info string undo error: {}", err)?,
            },
            "history" => {
                let history = render_move_history(&self.board);
                if !history.is_empty() {
                    writeln!(out, "{}", history)?;
                }
            }
            "debug" => {
                let mode = parts.next().unwrap_or_default();
                self.config.debug_mode = mode.eq_ignore_ascii_case("on");
            }
            "quit" => {
                return Ok(true);
            }
            _ => {
                writeln!(
                    out,
                    "info string {}",
                    ChessErrors::UnknownCommand(cmd.to_owned())
                )?;
            }
        }

        Ok(false)
    }

    /// `position startpos [moves ...]` or `position fen <fen> [moves ...]`.
    ///
    /// The session board is only replaced once the whole command succeeded.
    fn handle_position(&mut self, line: &str) -> Result<String, ChessErrors> {
        let rest = line.trim_start_matches("position").trim();
        let (setup, moves) = match rest.split_once("moves") {
            Some((setup, moves)) => (setup.trim(), Some(moves)),
            None => (rest, None),
        };

        let mut board = if setup == "startpos" {
            BoardState::starting_position()?
        } else if let Some(fen) = setup.strip_prefix("fen") {
            BoardState::from_fen(fen.trim())?
        } else {
            return Err(ChessErrors::MalformedField(format!(
                "expected 'startpos' or 'fen', found '{setup}'"
            )));
        };

        for text in moves.into_iter().flat_map(str::split_whitespace) {
            board.apply(long_algebraic_to_move(text)?)?;
        }

        self.board = board;
        Ok(format!("position {}", self.board.get_fen()))
    }

    /// `move <lan> [ep]`: apply one move, `ep` marks it as en passant.
    fn handle_move(&mut self, line: &str) -> Result<String, ChessErrors> {
        let mut tokens = line.split_whitespace().skip(1);
        let text = tokens
            .next()
            .ok_or_else(|| ChessErrors::InvalidAlgebraicString(String::new()))?;
        let en_passant = tokens.next() == Some("ep");

        let mv = long_algebraic_to_move(text)?.with_en_passant(en_passant);
        self.board.apply(mv)?;
        Ok(format!("applied {}", render_move(&mv)))
    }

    fn log_debug(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        if self.config.debug_mode {
            writeln!(out, "info string {}", message)?;
        }
        Ok(())
    }
}
