//! Hand classification command.
//!
//! Parses a five-card hand from text notation, classifies it, and reports
//! the category name and numeric rank. Supports JSON output and optional
//! JSONL record logging.

use crate::error::CliError;
use showdown_engine::eval::rank_hand;
use showdown_engine::hand::Hand;
use showdown_engine::logger::{EvalLogger, EvalRecord};
use std::io::Write;

/// Handle the rank command.
///
/// # Arguments
///
/// * `cards` - Hand in whitespace-separated card notation
/// * `json` - Emit JSON instead of text
/// * `log` - Optional JSONL file to record the evaluation in
/// * `out` - Output stream for command results
///
/// # Returns
///
/// `Ok(())` on success; `CliError::InvalidInput` for malformed hands,
/// `CliError::Io` when writing fails.
pub fn handle_rank_command(
    cards: &str,
    json: bool,
    log: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hand = Hand::from_notation(cards)?;
    let category = rank_hand(&hand);

    if json {
        let payload = serde_json::json!({
            "cards": hand.cards().iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            "category": category.to_string(),
            "rank": category.rank(),
        });
        let json_str = serde_json::to_string_pretty(&payload).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
    } else {
        writeln!(out, "Hand: {}", hand.notation())?;
        writeln!(out, "Category: {} (rank {})", category, category.rank())?;
    }

    if let Some(path) = log {
        let mut logger = EvalLogger::create(path)?;
        let rec = EvalRecord {
            eval_id: logger.next_id(),
            cards: hand.cards().to_vec(),
            category,
            rank: category.rank(),
            opponent: None,
            outcome: None,
            ts: None,
        };
        logger.write(&rec)?;
    }

    Ok(())
}
