use std::fs;
use std::path::PathBuf;

use showdown_engine::cards::{Card, Rank as R, Suit as S};
use showdown_engine::eval::{Category, Outcome};
use showdown_engine::logger::{format_eval_id, EvalLogger, EvalRecord};

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

fn royal_cards() -> Vec<Card> {
    [R::Ace, R::King, R::Queen, R::Jack, R::Ten]
        .into_iter()
        .map(|rank| Card {
            suit: S::Spades,
            rank,
        })
        .collect()
}

#[test]
fn writes_jsonl_with_lf_only() {
    let path = tmp_path("evallog");
    let mut logger = EvalLogger::create(&path).expect("create logger");
    let rec = EvalRecord {
        eval_id: "20250102-000001".to_string(),
        cards: royal_cards(),
        category: Category::RoyalFlush,
        rank: 9,
        opponent: None,
        outcome: None,
        ts: None,
    };
    logger.write(&rec).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
}

#[test]
fn sequential_ids_increment() {
    let mut logger = EvalLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let path = tmp_path("evallog_ts");
    let mut logger = EvalLogger::create(&path).expect("create logger");
    let rec = EvalRecord {
        eval_id: "20250102-000010".to_string(),
        cards: royal_cards(),
        category: Category::RoyalFlush,
        rank: 9,
        opponent: None,
        outcome: None,
        ts: None,
    };
    logger.write(&rec).expect("write");
    let line = String::from_utf8(fs::read(&path).unwrap()).unwrap();
    assert!(line.contains("\"ts\":"), "ts should be injected");

    // preset ts should be preserved
    let preset = "2030-01-01T00:00:00Z".to_string();
    let rec2 = EvalRecord {
        ts: Some(preset.clone()),
        ..rec
    };
    logger.write(&rec2).expect("write2");
    let content = String::from_utf8(fs::read(&path).unwrap()).unwrap();
    assert!(content.contains(&preset), "preset ts must be kept");
}

#[test]
fn comparison_record_round_trips_through_serde() {
    let rec = EvalRecord {
        eval_id: format_eval_id("20250102", 123),
        cards: royal_cards(),
        category: Category::RoyalFlush,
        rank: 9,
        opponent: Some(vec![
            Card {
                suit: S::Hearts,
                rank: R::King,
            },
            Card {
                suit: S::Clubs,
                rank: R::King,
            },
            Card {
                suit: S::Hearts,
                rank: R::Jack,
            },
            Card {
                suit: S::Hearts,
                rank: R::Ten,
            },
            Card {
                suit: S::Hearts,
                rank: R::Nine,
            },
        ]),
        outcome: Some(Outcome::FirstWins),
        ts: Some("2025-01-02T03:04:05Z".to_string()),
    };
    assert_eq!(rec.eval_id, "20250102-000123");

    let json = serde_json::to_string(&rec).unwrap();
    let back: EvalRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rec);
}
