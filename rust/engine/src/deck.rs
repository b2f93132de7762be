use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Membership set over the 52-card universe, one bit per card.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct CardSet(u64);

impl CardSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns `false` if the card was already present.
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.index();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    pub fn remove(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.index();
        let present = self.0 & bit != 0;
        self.0 &= !bit;
        present
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0 & (1u64 << card.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        full_deck().into_iter().filter(move |c| self.contains(*c))
    }

    /// Builds a set from `cards`, returning the first duplicate on failure.
    pub fn try_from_cards<'a, I>(cards: I) -> Result<Self, Card>
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut set = Self::empty();
        for &c in cards {
            if !set.insert(c) {
                return Err(c);
            }
        }
        Ok(set)
    }
}

/// The 52-card universe minus every card in `known`, in [`full_deck`] order.
pub fn remaining_deck(known: &CardSet) -> Vec<Card> {
    full_deck()
        .into_iter()
        .filter(|c| !known.contains(*c))
        .collect()
}

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
