use showdown_engine::cards::{Card, Rank as R, Suit as S};
use showdown_engine::eval::{is_descending_run, value_sum, RankCounts, SuitCounts};
use showdown_engine::hand::Hand;

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

fn full_house() -> Hand {
    Hand::new(vec![
        c(S::Diamonds, R::Ace),
        c(S::Spades, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::Seven),
        c(S::Diamonds, R::Seven),
    ])
    .unwrap()
}

#[test]
fn rank_counts_tally_each_value() {
    let counts = RankCounts::of(&full_house());
    assert_eq!(counts.count(14), 3);
    assert_eq!(counts.count(7), 2);
    assert_eq!(counts.count(2), 0);
    assert_eq!(counts.distinct(), 2);
}

#[test]
fn rank_counts_expose_group_queries() {
    let counts = RankCounts::of(&full_house());
    assert!(counts.has_group_of(3));
    assert!(counts.has_group_of(2));
    assert!(!counts.has_group_of(4));
    assert_eq!(counts.groups_of(2), 1);
    assert_eq!(counts.groups_of(3), 1);
}

#[test]
fn suit_counts_tally_each_suit() {
    let counts = SuitCounts::of(&full_house());
    assert_eq!(counts.count(S::Diamonds), 2);
    assert_eq!(counts.count(S::Spades), 1);
    assert_eq!(counts.count(S::Hearts), 1);
    assert_eq!(counts.count(S::Clubs), 1);
    assert_eq!(counts.distinct(), 4);
}

#[test]
fn single_suited_hand_has_one_distinct_suit() {
    let h = Hand::from_notation("KS JS 10S 9S 2S").unwrap();
    assert_eq!(SuitCounts::of(&h).distinct(), 1);
    assert_eq!(SuitCounts::of(&h).count(S::Spades), 5);
}

#[test]
fn run_detection_requires_consecutive_values() {
    let run = Hand::from_notation("KS QC JS 10S 9S").unwrap();
    assert!(is_descending_run(&run));

    // one gap breaks the run
    let gapped = Hand::from_notation("KS QC JS 10S 8S").unwrap();
    assert!(!is_descending_run(&gapped));

    let paired = Hand::from_notation("KS KC JS 10S 9S").unwrap();
    assert!(!is_descending_run(&paired));
}

#[test]
fn value_sum_adds_all_five_cards() {
    let royal = Hand::from_notation("AS KS QS JS 10S").unwrap();
    assert_eq!(value_sum(&royal), 60);

    let king_high_run = Hand::from_notation("KS QS JS 10S 9S").unwrap();
    assert_eq!(value_sum(&king_high_run), 55);
}
