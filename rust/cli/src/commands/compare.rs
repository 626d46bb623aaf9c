//! Head-to-head comparison command.
//!
//! Parses two five-card hands, classifies both, and reports which wins on
//! category rank. Hands in the same category tie; kickers are not compared.

use crate::error::CliError;
use showdown_engine::eval::{compare_hands, rank_hand, Outcome};
use showdown_engine::hand::Hand;
use showdown_engine::logger::{EvalLogger, EvalRecord};
use std::io::Write;

/// Handle the compare command.
///
/// # Arguments
///
/// * `first` / `second` - The two hands in card notation
/// * `json` - Emit JSON instead of text
/// * `log` - Optional JSONL file to record the comparison in
/// * `out` - Output stream for command results
///
/// # Returns
///
/// `Ok(())` on success; `CliError::InvalidInput` when either hand is
/// malformed, `CliError::Io` when writing fails.
pub fn handle_compare_command(
    first: &str,
    second: &str,
    json: bool,
    log: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let first = Hand::from_notation(first)?;
    let second = Hand::from_notation(second)?;
    let category_a = rank_hand(&first);
    let category_b = rank_hand(&second);
    let outcome = compare_hands(&first, &second);

    if json {
        let payload = serde_json::json!({
            "first": {
                "cards": first.cards().iter().map(|c| c.to_string()).collect::<Vec<_>>(),
                "category": category_a.to_string(),
                "rank": category_a.rank(),
            },
            "second": {
                "cards": second.cards().iter().map(|c| c.to_string()).collect::<Vec<_>>(),
                "category": category_b.to_string(),
                "rank": category_b.rank(),
            },
            "outcome": outcome,
        });
        let json_str = serde_json::to_string_pretty(&payload).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
    } else {
        writeln!(
            out,
            "First:  {} -> {} (rank {})",
            first.notation(),
            category_a,
            category_a.rank()
        )?;
        writeln!(
            out,
            "Second: {} -> {} (rank {})",
            second.notation(),
            category_b,
            category_b.rank()
        )?;
        let verdict = match outcome {
            Outcome::FirstWins => "Player 1 wins",
            Outcome::SecondWins => "Player 2 wins",
            Outcome::Tie => "Tie",
        };
        writeln!(out, "Result: {}", verdict)?;
    }

    if let Some(path) = log {
        let mut logger = EvalLogger::create(path)?;
        let rec = EvalRecord {
            eval_id: logger.next_id(),
            cards: first.cards().to_vec(),
            category: category_a,
            rank: category_a.rank(),
            opponent: Some(second.cards().to_vec()),
            outcome: Some(outcome),
            ts: None,
        };
        logger.write(&rec)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PAIR: &str = "KS KC JS JD 9S";
    const HIGH_CARD: &str = "KS 10D 9S 5H 2C";

    #[test]
    fn test_compare_first_wins() {
        let mut out = Vec::new();
        let result = handle_compare_command(TWO_PAIR, HIGH_CARD, false, None, &mut out);

        assert!(result.is_ok());
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Two Pair"));
        assert!(output.contains("High Card"));
        assert!(output.contains("Player 1 wins"));
    }

    #[test]
    fn test_compare_is_antisymmetric() {
        let mut out = Vec::new();
        handle_compare_command(HIGH_CARD, TWO_PAIR, false, None, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Player 2 wins"));
    }

    #[test]
    fn test_compare_identical_hands_tie() {
        let mut out = Vec::new();
        handle_compare_command(TWO_PAIR, TWO_PAIR, false, None, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Result: Tie"));
    }

    #[test]
    fn test_compare_json_output() {
        let mut out = Vec::new();
        handle_compare_command(TWO_PAIR, HIGH_CARD, true, None, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["first"]["rank"].as_u64(), Some(2));
        assert_eq!(json["second"]["rank"].as_u64(), Some(0));
        assert_eq!(json["outcome"].as_str(), Some("FirstWins"));
    }

    #[test]
    fn test_compare_rejects_malformed_second_hand() {
        let mut out = Vec::new();
        let result = handle_compare_command(TWO_PAIR, "KS 10D 9S 5H", false, None, &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_compare_writes_log_record() {
        let path = format!("target/compare_log_{}.jsonl", std::process::id());
        let mut out = Vec::new();
        handle_compare_command(TWO_PAIR, HIGH_CARD, false, Some(&path), &mut out).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let rec: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(rec["outcome"].as_str(), Some("FirstWins"));
        assert_eq!(rec["opponent"].as_array().map(|a| a.len()), Some(5));
    }
}
