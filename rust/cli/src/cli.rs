//! Command-line argument definitions.
//!
//! Declarative clap types for the `showdown` binary. Parsing happens in
//! [`crate::run`] via `try_parse_from` so tests can drive the CLI with an
//! injected argv.

use clap::{Parser, Subcommand};

/// Top-level argument parser for the `showdown` binary.
#[derive(Debug, Parser)]
#[command(
    name = "showdown",
    version,
    about = "Five-card poker hand ranking and comparison"
)]
pub struct ShowdownCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify a five-card hand into its poker category
    Rank {
        /// Hand in card notation, e.g. "AS KS QS JS 10S"
        #[arg(long)]
        cards: String,
        /// Emit the result as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Write an evaluation record to this JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Compare two five-card hands head-to-head
    Compare {
        /// First hand in card notation
        #[arg(long)]
        first: String,
        /// Second hand in card notation
        #[arg(long)]
        second: String,
        /// Emit the result as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Write an evaluation record to this JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
