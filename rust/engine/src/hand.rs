use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::CardSet;
use crate::errors::EvalError;

/// Number of cards in a scored poker hand.
pub const HAND_LENGTH: usize = 5;

const CATEGORY_SHIFT: u32 = 20;
const TIEBREAK_MASK: u32 = (1 << CATEGORY_SHIFT) - 1;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
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
}

impl Category {
    fn from_band(band: u32) -> Category {
        match band {
            0 => Category::HighCard,
            1 => Category::OnePair,
            2 => Category::TwoPair,
            3 => Category::ThreeOfAKind,
            4 => Category::Straight,
            5 => Category::Flush,
            6 => Category::FullHouse,
            7 => Category::FourOfAKind,
            _ => Category::StraightFlush,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Single comparable hand value.
///
/// The category occupies the bits from 20 upwards; the low 20 bits hold up to
/// five deciding ranks, four bits each, most significant first. Any score in a
/// higher category therefore beats every score in a lower one, and inside a
/// category the ranks compare lexicographically.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct HandScore(u32);

impl HandScore {
    /// Sentinel for "not scored yet". Every real hand scores above it.
    pub const NONE: HandScore = HandScore(0);

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn category(self) -> Category {
        Category::from_band(self.0 >> CATEGORY_SHIFT)
    }

    /// The deciding ranks, highest priority first, zero-padded.
    pub fn tiebreak(self) -> [u8; 5] {
        let t = self.0 & TIEBREAK_MASK;
        let mut out = [0u8; 5];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = ((t >> (4 * (4 - i))) & 0xF) as u8;
        }
        out
    }

    fn compose(category: Category, deciding: &[u8]) -> Self {
        let mut t = 0u32;
        for i in 0..5 {
            let r = deciding.get(i).copied().unwrap_or(0) as u32;
            t |= r << (4 * (4 - i));
        }
        Self(((category as u32) << CATEGORY_SHIFT) | t)
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category(), self.0)
    }
}

/// Result of [`evaluate`]: the chosen five cards (sorted high to low) and
/// their score.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub cards: [Card; HAND_LENGTH],
    pub score: HandScore,
}

impl Evaluation {
    pub fn category(&self) -> Category {
        self.score.category()
    }
}

/// Finds the best five-card hand among `cards`.
///
/// Five cards are scored directly. With more, every five-card combination of
/// the input sorted high to low is scored in lexicographic index order and
/// the first strictly greatest one is kept, so the result is deterministic.
///
/// # Errors
///
/// - [`EvalError::TooFewCards`] when fewer than five cards are given
/// - [`EvalError::DuplicateCard`] when the same card appears twice
///
/// # Examples
///
/// ```
/// use pokeher_engine::cards::parse_cards;
/// use pokeher_engine::hand::{evaluate, Category};
///
/// let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
/// let best = evaluate(&cards).unwrap();
/// assert_eq!(best.category(), Category::StraightFlush);
/// assert_eq!(best.cards[0].to_string(), "Ah");
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Evaluation, EvalError> {
    if cards.len() < HAND_LENGTH {
        return Err(EvalError::TooFewCards(cards.len()));
    }
    CardSet::try_from_cards(cards).map_err(EvalError::DuplicateCard)?;

    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let n = sorted.len();
    let mut best: Option<Evaluation> = None;
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let five = [sorted[a], sorted[b], sorted[c], sorted[d], sorted[e]];
                        let score = score_sorted(&five);
                        let better = match best {
                            Some(cur) => score > cur.score,
                            None => true,
                        };
                        if better {
                            best = Some(Evaluation { cards: five, score });
                        }
                    }
                }
            }
        }
    }
    // n >= 5 guarantees at least one combination
    best.ok_or(EvalError::TooFewCards(n))
}

/// Scores exactly five cards in any order.
pub fn score_five(cards: &[Card; HAND_LENGTH]) -> HandScore {
    let mut sorted = *cards;
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    score_sorted(&sorted)
}

pub fn compare_hands(a: &Evaluation, b: &Evaluation) -> Ordering {
    a.score.cmp(&b.score)
}

// `cards` must be sorted high to low.
fn score_sorted(cards: &[Card; HAND_LENGTH]) -> HandScore {
    let ranks: [u8; HAND_LENGTH] = (*cards).map(|c| c.rank.value());
    let flush = is_flush(cards);
    let straight = is_straight(&ranks);

    if flush && straight {
        return HandScore::compose(Category::StraightFlush, &ranks[..1]);
    }
    if flush {
        return HandScore::compose(Category::Flush, &ranks);
    }
    if straight {
        return HandScore::compose(Category::Straight, &ranks[..1]);
    }

    let groups = rank_groups(&ranks);
    let deciding: Vec<u8> = groups.iter().map(|&(_, r)| r).collect();
    let category = match (groups[0].0, groups.get(1).map(|g| g.0)) {
        (4, _) => Category::FourOfAKind,
        (3, Some(2)) => Category::FullHouse,
        (3, _) => Category::ThreeOfAKind,
        (2, Some(2)) => Category::TwoPair,
        (2, _) => Category::OnePair,
        _ => Category::HighCard,
    };
    HandScore::compose(category, &deciding)
}

fn is_flush(cards: &[Card; HAND_LENGTH]) -> bool {
    let mut counts = [0u8; 4];
    for c in cards {
        counts[c.suit.index()] += 1;
    }
    counts.iter().any(|&n| n as usize >= HAND_LENGTH)
}

// No ace-low wheel: A-2-3-4-5 is not a straight here.
fn is_straight(sorted_ranks: &[u8; HAND_LENGTH]) -> bool {
    sorted_ranks.windows(2).all(|w| w[0] == w[1] + 1)
}

/// (count, rank) pairs ordered by count, then rank, both descending.
fn rank_groups(sorted_ranks: &[u8; HAND_LENGTH]) -> Vec<(u8, u8)> {
    let mut counts = [0u8; 15];
    for &r in sorted_ranks {
        counts[r as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&r| counts[r as usize] > 0)
        .map(|r| (counts[r as usize], r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn five(s: &str) -> [Card; 5] {
        let v = parse_cards(s).unwrap();
        [v[0], v[1], v[2], v[3], v[4]]
    }

    #[test]
    fn scores_each_category() {
        let cases = [
            ("Ah Jd 9c 5s 3h", Category::HighCard),
            ("Ah Ad 9c 5s 3h", Category::OnePair),
            ("Ah Ad 9c 9s 3h", Category::TwoPair),
            ("Ah Ad Ac 9s 3h", Category::ThreeOfAKind),
            ("9h 8d 7c 6s 5h", Category::Straight),
            ("Ah Jh 9h 5h 3h", Category::Flush),
            ("Ah Ad Ac 9s 9h", Category::FullHouse),
            ("Ah Ad Ac As 9h", Category::FourOfAKind),
            ("9h 8h 7h 6h 5h", Category::StraightFlush),
        ];
        for (cards, expected) in cases {
            assert_eq!(score_five(&five(cards)).category(), expected, "{cards}");
        }
    }

    #[test]
    fn wheel_is_not_a_straight() {
        let score = score_five(&five("Ah 2d 3c 4s 5h"));
        assert_eq!(score.category(), Category::HighCard);
    }

    #[test]
    fn tiebreak_orders_groups_before_kickers() {
        let score = score_five(&five("3h 3d 3c Ks Kh"));
        assert_eq!(score.tiebreak(), [3, 13, 0, 0, 0]);
        let score = score_five(&five("2h 2d Ac Ks 9h"));
        assert_eq!(score.tiebreak(), [2, 14, 13, 9, 0]);
    }

    #[test]
    fn input_order_does_not_matter() {
        let a = score_five(&five("2h Kd 9c Ks 9h"));
        let b = score_five(&five("Ks 9h 2h 9c Kd"));
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_short_and_duplicate_input() {
        let four = parse_cards("Ah Kd Qc Js").unwrap();
        assert_eq!(evaluate(&four), Err(EvalError::TooFewCards(4)));
        let dup = parse_cards("Ah Kd Qc Js Ah").unwrap();
        assert!(matches!(evaluate(&dup), Err(EvalError::DuplicateCard(_))));
    }

    #[test]
    fn picks_best_five_of_seven() {
        let cards = parse_cards("2c 7d Ks Kh 9s Kd 9c").unwrap();
        let best = evaluate(&cards).unwrap();
        assert_eq!(best.category(), Category::FullHouse);
        assert_eq!(best.score.tiebreak()[..2], [13, 9]);
    }
}
