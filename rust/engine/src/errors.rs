use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("need at least 5 cards to evaluate, got {0}")]
    TooFewCards(usize),
    #[error("duplicate card {0} in candidate hand")]
    DuplicateCard(Card),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("trial count must be positive")]
    InvalidTrialCount,
    #[error("board holds at most 5 cards, got {0}")]
    TooManyBoardCards(usize),
    #[error("card {0} appears more than once in hand and board")]
    DuplicateCard(Card),
    #[error("insufficient deck: need {needed} unseen cards, {available} available")]
    InsufficientDeck { needed: usize, available: usize },
    #[error(transparent)]
    Eval(#[from] EvalError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BettingError {
    #[error("It's not {actual}'s turn (expected {expected})")]
    NotPlayersTurn { expected: String, actual: String },
    #[error("Betting round is closed")]
    RoundClosed,
    #[error("Bet of {amount} is not allowed by the betting limit")]
    IllegalBet { amount: u32 },
    #[error("Bet of {amount} overflows the pot")]
    Overflow { amount: u32 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlindError {
    #[error("Big blind {big} must exceed small blind {small}")]
    InvalidBlinds { small: u32, big: u32 },
    #[error("Hands per level must be at least 1")]
    InvalidHandsPerLevel,
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid cache entry '{key}': {reason}")]
    InvalidEntry { key: String, reason: String },
}
