use crate::cards::Card;
use crate::errors::HandError;

/// A validated five-card poker hand.
///
/// Construction enforces the five-card invariant and stores the cards
/// sorted by descending rank, the order the run check in [`crate::eval`]
/// scans. Hands are immutable once built; classification never mutates or
/// takes ownership of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    /// Builds a hand from exactly five cards, sorting them highest first.
    pub fn new(cards: Vec<Card>) -> Result<Hand, HandError> {
        let mut cards: [Card; 5] = cards
            .try_into()
            .map_err(|v: Vec<Card>| HandError::WrongCardCount(v.len()))?;
        cards.sort_unstable_by(|a, b| b.rank.cmp(&a.rank));
        Ok(Hand { cards })
    }

    /// Parses a whitespace-separated five-card string, e.g. `"AS KS QS JS 10S"`.
    pub fn from_notation(s: &str) -> Result<Hand, HandError> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, HandError>>()?;
        Hand::new(cards)
    }

    /// The cards in descending rank order, highest first.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// Renders the hand in card notation, highest card first.
    pub fn notation(&self) -> String {
        self.cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
