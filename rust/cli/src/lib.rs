//! # holdem CLI library
//!
//! Terminal front end for the heads-up engine. The binary is a thin wrapper
//! around [`run`], which parses arguments and dispatches to one handler per
//! subcommand. Handlers write to injected streams so tests can drive them
//! with in-memory buffers.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["holdem", "eval", "As", "Ks", "Qs", "Js", "Ts"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play against the AI from the terminal
//! - `sim`: Let two AIs play each other
//! - `eval`: Evaluate 5 to 7 cards
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{handle_cfg_command, handle_eval_command, handle_play_command, handle_sim_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "eval", "cfg"];

/// Parses `args` and runs the selected subcommand.
///
/// Returns [`exit_code::SUCCESS`] on success and [`exit_code::ERROR`] on a
/// usage error or a failed command. Help and version go to `out`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Play { hands, seed, stack } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(hands, seed, stack, out, err, &mut stdin_lock)
        }
        Commands::Sim { hands, seed } => handle_sim_command(hands, seed, out, err),
        Commands::Eval { cards, json } => handle_eval_command(&cards, json, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // help and version are not failures
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let mut report = || -> std::io::Result<()> {
        writeln!(err, "{}", e)?;
        writeln!(err, "Usage: holdem <command> [options]\n")?;
        writeln!(err, "Commands:")?;
        for c in COMMANDS {
            writeln!(err, "  {}", c)?;
        }
        writeln!(err, "\nFor full help, run: holdem --help")
    };
    let _ = report();
    exit_code::ERROR
}
