//! Interactive console for the Vela positional core.
//!
//! Usage:
//! `cargo run --bin vela`
//! `cargo run --bin vela -- --debug`

use std::process::ExitCode;

use vela_core::session::console::{run_stdio_loop, SessionConfig};

fn has_flag(flag: &str) -> bool {
    std::env::args().skip(1).any(|arg| arg == flag)
}

fn main() -> ExitCode {
    let config = SessionConfig {
        debug_mode: has_flag("--debug"),
        ..SessionConfig::default()
    };

    match run_stdio_loop(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("vela: {err}");
            ExitCode::FAILURE
        }
    }
}
