//! # Showdown CLI Library
//!
//! Command-line interface for the showdown hand-ranking engine. It exposes
//! subcommands for classifying a single five-card hand, comparing two hands
//! head-to-head, and inspecting the resolved configuration.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["showdown", "rank", "--cards", "AS KS QS JS 10S"];
//! let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `rank`: Classify a five-card hand into its poker category
//! - `compare`: Compare two hands and report the winner or a tie
//! - `cfg`: Display current configuration settings with sources

use std::io::Write;

use clap::Parser;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod ui;

use cli::{Commands, ShowdownCli};

use commands::{handle_cfg_command, handle_compare_command, handle_rank_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec![
///     "showdown", "compare",
///     "--first", "KS KC JS JD 9S",
///     "--second", "KS 10D 9S 5H 2C",
/// ];
/// let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["rank", "compare", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = ShowdownCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    // Print clap error first
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "Showdown Poker CLI").is_err()
                        || writeln!(err, "Usage: showdown <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: showdown --help").is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Rank { cards, json, log } => {
                let (json, log) = match resolve_output(json, log) {
                    Ok(resolved) => resolved,
                    Err(e) => {
                        let _ = ui::write_error(err, &e.to_string());
                        return exit_code::ERROR;
                    }
                };
                match handle_rank_command(&cards, json, log.as_deref(), out) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(e) => {
                        if writeln!(err, "Error: {}", e).is_err() {
                            return exit_code::ERROR;
                        }
                        exit_code::ERROR
                    }
                }
            }
            Commands::Compare {
                first,
                second,
                json,
                log,
            } => {
                let (json, log) = match resolve_output(json, log) {
                    Ok(resolved) => resolved,
                    Err(e) => {
                        let _ = ui::write_error(err, &e.to_string());
                        return exit_code::ERROR;
                    }
                };
                match handle_compare_command(&first, &second, json, log.as_deref(), out) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(e) => {
                        if writeln!(err, "Error: {}", e).is_err() {
                            return exit_code::ERROR;
                        }
                        exit_code::ERROR
                    }
                }
            }
            Commands::Cfg => match handle_cfg_command(out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
        },
    }
}

/// Folds the resolved configuration into the command-line flags. The
/// `--json` flag and an explicit `--log` path always win over configured
/// values.
fn resolve_output(json_flag: bool, log_flag: Option<String>) -> Result<(bool, Option<String>), CliError> {
    let cfg = config::load()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    let json = json_flag || cfg.format == "json";
    let log = log_flag.or(cfg.log);
    Ok((json, log))
}
