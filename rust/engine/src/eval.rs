use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Suit;
use crate::hand::Hand;

/// Poker hand strength classes, weakest to strongest. The discriminant is
/// the numeric category rank: 0 = High Card up to 9 = Royal Flush.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    /// Numeric strength in [0, 9]; 9 is best.
    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        };
        f.write_str(name)
    }
}

/// Result of a head-to-head comparison between two hands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::FirstWins => "first hand wins",
            Outcome::SecondWins => "second hand wins",
            Outcome::Tie => "tie",
        };
        f.write_str(text)
    }
}

/// Occurrence counts of each rank value across a hand, indexed by numeric
/// value 2-14. Counts always sum to five. Face names are display aliases of
/// ranks, so these counts answer face-frequency queries as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankCounts([u8; 15]);

impl RankCounts {
    pub fn of(hand: &Hand) -> RankCounts {
        let mut counts = [0u8; 15];
        for c in hand.cards() {
            counts[c.rank.value() as usize] += 1;
        }
        RankCounts(counts)
    }

    /// Occurrences of a specific value; zero for values not in the hand.
    pub fn count(&self, value: u8) -> u8 {
        self.0.get(value as usize).copied().unwrap_or(0)
    }

    /// True when some value occurs exactly `size` times.
    pub fn has_group_of(&self, size: u8) -> bool {
        self.0.iter().any(|&c| c == size)
    }

    /// Number of distinct values occurring exactly `size` times.
    pub fn groups_of(&self, size: u8) -> usize {
        self.0.iter().filter(|&&c| c == size).count()
    }

    /// Number of distinct values present.
    pub fn distinct(&self) -> usize {
        self.0.iter().filter(|&&c| c > 0).count()
    }
}

/// Occurrence counts of each suit across a hand. Counts always sum to five.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitCounts([u8; 4]);

impl SuitCounts {
    pub fn of(hand: &Hand) -> SuitCounts {
        let mut counts = [0u8; 4];
        for c in hand.cards() {
            counts[suit_index(c.suit)] += 1;
        }
        SuitCounts(counts)
    }

    /// Occurrences of a specific suit.
    pub fn count(&self, suit: Suit) -> u8 {
        self.0[suit_index(suit)]
    }

    /// Number of distinct suits present; one means a flush.
    pub fn distinct(&self) -> usize {
        self.0.iter().filter(|&&c| c > 0).count()
    }
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

/// True iff every adjacent pair of cards differs by exactly one, high to
/// low. Hands store their cards in descending rank order, so this detects
/// five consecutive values regardless of the order the hand was supplied
/// in. Single pass, early exit on the first gap.
pub fn is_descending_run(hand: &Hand) -> bool {
    hand.cards()
        .windows(2)
        .all(|w| w[0].rank.value() == w[1].rank.value() + 1)
}

/// Sum of the five card values. 10+11+12+13+14 = 60, so a run summing to 60
/// can only be Ten through Ace.
pub fn value_sum(hand: &Hand) -> u8 {
    hand.cards().iter().map(|c| c.rank.value()).sum()
}

/// Classifies a hand into its strongest matching category.
///
/// Branches are ordered from rank 9 down to 0 and the order is load-bearing:
/// stronger categories also satisfy weaker predicates (a royal flush is also
/// a flush and a straight), so the first match must be the strongest. The
/// unconditional High Card fallback makes this a total function over valid
/// hands.
pub fn rank_hand(hand: &Hand) -> Category {
    let ranks = RankCounts::of(hand);
    let suits = SuitCounts::of(hand);
    let run = is_descending_run(hand);
    let flush = suits.distinct() == 1;

    if flush && run && value_sum(hand) == 60 {
        return Category::RoyalFlush;
    }
    if run && flush {
        return Category::StraightFlush;
    }
    if ranks.has_group_of(4) {
        return Category::FourOfAKind;
    }
    if ranks.has_group_of(3) && ranks.has_group_of(2) {
        return Category::FullHouse;
    }
    if flush {
        return Category::Flush;
    }
    if run {
        return Category::Straight;
    }
    if ranks.has_group_of(3) {
        return Category::ThreeOfAKind;
    }
    if ranks.groups_of(2) == 2 {
        return Category::TwoPair;
    }
    if ranks.has_group_of(2) {
        return Category::OnePair;
    }
    Category::HighCard
}

/// Head-to-head comparison on category rank alone.
///
/// Hands of equal category tie; kickers within a category are deliberately
/// not consulted.
pub fn compare_hands(first: &Hand, second: &Hand) -> Outcome {
    match rank_hand(first).cmp(&rank_hand(second)) {
        Ordering::Greater => Outcome::FirstWins,
        Ordering::Less => Outcome::SecondWins,
        Ordering::Equal => Outcome::Tie,
    }
}
