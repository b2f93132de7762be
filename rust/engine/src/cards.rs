use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hand::HandScore;

/// Represents one of the four suits in a standard 52-card deck.
/// Suits are ordered by a fixed index (Clubs lowest, Spades highest), which is
/// only ever used to break ties between cards of equal rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    fn from_symbol(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values run 2..=14 and are what the evaluator scores with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(v: u8) -> Option<Rank> {
        let rank = match v {
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            14 => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }

    pub fn symbol(self) -> char {
        match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            r => (b'0' + r.value()) as char,
        }
    }

    fn from_symbol(c: char) -> Option<Rank> {
        match c.to_ascii_uppercase() {
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            d @ '2'..='9' => Rank::from_value(d as u8 - b'0'),
            _ => None,
        }
    }
}

/// A single playing card. Field order matters: the derived ordering compares
/// rank first, then suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn is_pair(&self, other: &Card) -> bool {
        self.rank == other.rank
    }

    pub fn is_suited(&self, other: &Card) -> bool {
        self.suit == other.suit
    }

    /// Dense index in `0..52`, used by [`crate::deck::CardSet`].
    pub fn index(&self) -> usize {
        self.suit.index() * 13 + (self.rank.value() as usize - 2)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardParseError {
    #[error("invalid rank '{0}'")]
    InvalidRank(String),
    #[error("invalid suit '{0}'")]
    InvalidSuit(String),
    #[error("card is missing its suit: '{0}'")]
    MissingSuit(String),
    #[error("expected {expected} cards, found {found}")]
    WrongCount { expected: usize, found: usize },
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        match cards.as_slice() {
            [card] => Ok(*card),
            _ => Err(CardParseError::WrongCount {
                expected: 1,
                found: cards.len(),
            }),
        }
    }
}

/// Parses short card notation such as `"Ah Kd 10c"` or `"AhKd"`.
/// Whitespace and commas between cards are ignored.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardParseError> {
    let chars: Vec<char> = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    let mut cards = Vec::with_capacity(chars.len() / 2);
    let mut i = 0;
    while i < chars.len() {
        let (rank, width) = if chars[i] == '1' && chars.get(i + 1) == Some(&'0') {
            (Rank::Ten, 2)
        } else {
            let r = Rank::from_symbol(chars[i])
                .ok_or_else(|| CardParseError::InvalidRank(chars[i].to_string()))?;
            (r, 1)
        };
        i += width;
        let sc = *chars
            .get(i)
            .ok_or_else(|| CardParseError::MissingSuit(rank.symbol().to_string()))?;
        let suit = Suit::from_symbol(sc).ok_or_else(|| CardParseError::InvalidSuit(sc.to_string()))?;
        i += 1;
        cards.push(Card::new(rank, suit));
    }
    Ok(cards)
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card::new(r, s));
        }
    }
    v
}

/// A player's two hole cards.
///
/// The cards are stored high/low by (rank, suit), so `Hand::new(a, b)` and
/// `Hand::new(b, a)` are the same hand. A hand can carry the memoised score of
/// its best evaluation; the score takes no part in equality or hashing.
#[derive(Debug, Copy, Clone)]
pub struct Hand {
    high: Card,
    low: Card,
    score: Option<HandScore>,
}

impl Hand {
    pub fn new(a: Card, b: Card) -> Self {
        let (high, low) = if a >= b { (a, b) } else { (b, a) };
        Self {
            high,
            low,
            score: None,
        }
    }

    pub fn high(&self) -> Card {
        self.high
    }

    pub fn low(&self) -> Card {
        self.low
    }

    pub fn cards(&self) -> [Card; 2] {
        [self.high, self.low]
    }

    pub fn score(&self) -> Option<HandScore> {
        self.score
    }

    /// Records an evaluation result. A zero score is the "unscored" sentinel
    /// and leaves the hand unchanged.
    pub fn set_score(&mut self, score: HandScore) {
        if score > HandScore::NONE {
            self.score = Some(score);
        }
    }

    pub fn is_pair(&self) -> bool {
        self.high.is_pair(&self.low)
    }

    pub fn is_suited(&self) -> bool {
        self.high.is_suited(&self.low)
    }

    /// Rank distance between the two cards minus one; a pair yields -1.
    pub fn card_gap(&self) -> i8 {
        self.high.rank.value() as i8 - self.low.rank.value() as i8 - 1
    }

    pub fn is_connected(&self) -> bool {
        self.card_gap() == 0
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.high == other.high && self.low == other.low
    }
}

impl Eq for Hand {}

impl Hash for Hand {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.high.hash(state);
        self.low.hash(state);
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.high, self.low).cmp(&(other.high, other.low))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high, self.low)
    }
}

impl FromStr for Hand {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        match cards.as_slice() {
            [a, b] => Ok(Hand::new(*a, *b)),
            _ => Err(CardParseError::WrongCount {
                expected: 2,
                found: cards.len(),
            }),
        }
    }
}
