use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("hand must contain exactly five cards, got {0}")]
    WrongCardCount(usize),
    #[error("card value out of range 2-14: {0}")]
    ValueOutOfRange(u8),
    #[error("card suit not recognized: {0}")]
    UnknownSuit(char),
    #[error("malformed card notation: {0:?}")]
    MalformedCard(String),
}
