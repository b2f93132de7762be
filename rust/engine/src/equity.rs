//! Monte Carlo hand equity.
//!
//! [`EquitySimulator`] deals random opponent hole cards and board run-outs
//! from the cards not yet seen, scores both seven-card hands with
//! [`crate::hand::evaluate`] and averages the outcomes (1 win, ½ tie, 0 loss).
//! Work is bounded by a [`SimulationBudget`]: a trial count and an optional
//! wall-clock deadline. Hitting the deadline is not an error; the estimate
//! from the trials completed so far is returned.

use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cache::EquityCache;
use crate::cards::{full_deck, Card, Hand};
use crate::deck::{remaining_deck, CardSet};
use crate::errors::{EvalError, SimulationError};
use crate::hand::{evaluate, Evaluation};

/// Cards on a complete board.
pub const BOARD_SIZE: usize = 5;

#[cfg(feature = "parallel")]
const BATCH_SIZE: u32 = 1000;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SimulationBudget {
    pub trials: u32,
    pub deadline: Option<Instant>,
}

impl SimulationBudget {
    pub fn trials(trials: u32) -> Self {
        Self {
            trials,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_time_limit(self, limit: Duration) -> Self {
        self.with_deadline(Instant::now() + limit)
    }

    fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    Win,
    Tie,
    Loss,
}

/// Win/tie/loss tallies over a number of trials.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct EquityEstimate {
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
}

impl EquityEstimate {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => self.losses += 1,
        }
    }

    pub fn trials(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    /// Mean pot share in `[0, 1]`; zero when nothing was simulated.
    pub fn equity(&self) -> f64 {
        let t = self.trials();
        if t == 0 {
            return 0.0;
        }
        (self.wins as f64 + 0.5 * self.ties as f64) / t as f64
    }

    pub fn merge(self, other: EquityEstimate) -> EquityEstimate {
        EquityEstimate {
            wins: self.wins + other.wins,
            ties: self.ties + other.ties,
            losses: self.losses + other.losses,
        }
    }
}

/// Cards dealt for one simulated run-out.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Trial {
    pub opponent: [Card; 2],
    /// Known board cards first, then the dealt completion.
    pub board: [Card; BOARD_SIZE],
}

#[derive(Debug, Clone)]
pub struct EquitySimulator {
    hand: Hand,
    board: Vec<Card>,
    unseen: Vec<Card>,
}

impl EquitySimulator {
    /// Prepares a simulator for `hand` against `board` (0 to 5 cards).
    ///
    /// # Errors
    ///
    /// - [`SimulationError::TooManyBoardCards`] for a board over five cards
    /// - [`SimulationError::DuplicateCard`] when hand and board share a card
    /// - [`SimulationError::InsufficientDeck`] when too few cards remain to
    ///   deal a trial
    pub fn new(hand: Hand, board: &[Card]) -> Result<Self, SimulationError> {
        if board.len() > BOARD_SIZE {
            return Err(SimulationError::TooManyBoardCards(board.len()));
        }
        let known = CardSet::try_from_cards(hand.cards().iter().chain(board))
            .map_err(SimulationError::DuplicateCard)?;
        let unseen = remaining_deck(&known);
        let needed = 2 + BOARD_SIZE - board.len();
        if unseen.len() < needed {
            return Err(SimulationError::InsufficientDeck {
                needed,
                available: unseen.len(),
            });
        }
        Ok(Self {
            hand,
            board: board.to_vec(),
            unseen,
        })
    }

    pub fn hand(&self) -> Hand {
        self.hand
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn unseen(&self) -> &[Card] {
        &self.unseen
    }

    /// Best five of the cards already known (hole cards plus board).
    pub fn best_hand(&self) -> Result<Evaluation, EvalError> {
        let mut cards = self.hand.cards().to_vec();
        cards.extend_from_slice(&self.board);
        evaluate(&cards)
    }

    pub fn dealer(&self) -> TrialDealer<'_> {
        TrialDealer {
            board: &self.board,
            deck: self.unseen.clone(),
        }
    }

    pub fn play(&self, trial: &Trial) -> Result<Outcome, SimulationError> {
        let [a, b] = self.hand.cards();
        let [x, y] = trial.opponent;
        let [b0, b1, b2, b3, b4] = trial.board;
        let ours = evaluate(&[a, b, b0, b1, b2, b3, b4])?;
        let theirs = evaluate(&[x, y, b0, b1, b2, b3, b4])?;
        Ok(match ours.score.cmp(&theirs.score) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Tie,
            std::cmp::Ordering::Less => Outcome::Loss,
        })
    }

    /// Runs up to `budget.trials` trials, stopping early once the deadline
    /// passes. At least one trial always runs.
    pub fn simulate<R: Rng>(
        &self,
        budget: SimulationBudget,
        rng: &mut R,
    ) -> Result<EquityEstimate, SimulationError> {
        if budget.trials == 0 {
            return Err(SimulationError::InvalidTrialCount);
        }
        let mut dealer = self.dealer();
        let mut estimate = EquityEstimate::default();
        for i in 0..budget.trials {
            if i > 0 && budget.expired() {
                debug!(
                    completed = i,
                    requested = budget.trials,
                    "simulation deadline reached"
                );
                break;
            }
            let trial = dealer.deal(rng);
            estimate.record(self.play(&trial)?);
        }
        Ok(estimate)
    }

    /// Splits `trials` into fixed-size batches simulated on the rayon pool.
    /// Batch `i` uses its own generator seeded with `seed + i`, so the result
    /// depends only on `seed` and `trials`.
    #[cfg(feature = "parallel")]
    pub fn simulate_parallel(
        &self,
        trials: u32,
        seed: u64,
    ) -> Result<EquityEstimate, SimulationError> {
        use rand::SeedableRng;
        use rand_chacha::ChaCha20Rng;
        use rayon::prelude::*;

        if trials == 0 {
            return Err(SimulationError::InvalidTrialCount);
        }
        let batches = trials.div_ceil(BATCH_SIZE);
        (0..batches)
            .into_par_iter()
            .map(|b| {
                let n = BATCH_SIZE.min(trials - b * BATCH_SIZE);
                let mut rng = ChaCha20Rng::seed_from_u64(seed.wrapping_add(b as u64));
                self.simulate(SimulationBudget::trials(n), &mut rng)
            })
            .try_reduce(EquityEstimate::default, |a, b| Ok(a.merge(b)))
    }
}

/// Deals trials for one simulator. Each deal is a partial Fisher-Yates
/// shuffle over the unseen cards, so every unseen card is equally likely in
/// every slot and nothing is dealt twice within a trial.
#[derive(Debug)]
pub struct TrialDealer<'a> {
    board: &'a [Card],
    deck: Vec<Card>,
}

impl TrialDealer<'_> {
    pub fn deal<R: Rng>(&mut self, rng: &mut R) -> Trial {
        let missing = BOARD_SIZE - self.board.len();
        let needed = 2 + missing;
        let n = self.deck.len();
        for i in 0..needed {
            let j = rng.random_range(i..n);
            self.deck.swap(i, j);
        }

        let mut board = [self.deck[0]; BOARD_SIZE];
        board[..self.board.len()].copy_from_slice(self.board);
        board[self.board.len()..].copy_from_slice(&self.deck[2..needed]);
        Trial {
            opponent: [self.deck[0], self.deck[1]],
            board,
        }
    }
}

/// Where an equity figure came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquitySource {
    Cache,
    Simulation,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityReport {
    pub equity: f64,
    pub trials: u64,
    pub source: EquitySource,
}

/// Equity for `hand` on `board`, taking the preflop cache fast path when the
/// board is empty and the hand is cached, and simulating otherwise.
pub fn estimate_equity<R: Rng>(
    hand: Hand,
    board: &[Card],
    cache: Option<&EquityCache>,
    budget: SimulationBudget,
    rng: &mut R,
) -> Result<EquityReport, SimulationError> {
    if board.is_empty() {
        if let Some(equity) = cache.and_then(|c| c.get(&hand)) {
            return Ok(EquityReport {
                equity,
                trials: 0,
                source: EquitySource::Cache,
            });
        }
    }
    let estimate = EquitySimulator::new(hand, board)?.simulate(budget, rng)?;
    Ok(EquityReport {
        equity: estimate.equity(),
        trials: estimate.trials(),
        source: EquitySource::Simulation,
    })
}

/// Number of distinct two-card starting hands.
pub const STARTING_HANDS: usize = 1326;

/// Simulates every two-card starting hand with an empty board and collects
/// the results into a cache. `progress` is called with (done, total) after
/// each hand.
pub fn precompute_preflop<R, F>(
    trials_per_hand: u32,
    rng: &mut R,
    mut progress: F,
) -> Result<EquityCache, SimulationError>
where
    R: Rng,
    F: FnMut(usize, usize),
{
    let deck = full_deck();
    let mut cache = EquityCache::new();
    let mut done = 0;
    for (i, &a) in deck.iter().enumerate() {
        for &b in &deck[i + 1..] {
            let hand = Hand::new(a, b);
            let estimate =
                EquitySimulator::new(hand, &[])?.simulate(SimulationBudget::trials(trials_per_hand), rng)?;
            cache.insert(hand, estimate.equity());
            done += 1;
            progress(done, STARTING_HANDS);
        }
    }
    Ok(cache)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn rejects_bad_input() {
        let board = parse_cards("2c 3c 4c 5c 6c 7c").unwrap();
        assert_eq!(
            EquitySimulator::new(hand("Ah Ad"), &board).unwrap_err(),
            SimulationError::TooManyBoardCards(6)
        );
        let board = parse_cards("Ah 3c 4c").unwrap();
        assert!(matches!(
            EquitySimulator::new(hand("Ah Ad"), &board),
            Err(SimulationError::DuplicateCard(_))
        ));
        let sim = EquitySimulator::new(hand("Ah Ad"), &[]).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert_eq!(
            sim.simulate(SimulationBudget::trials(0), &mut rng),
            Err(SimulationError::InvalidTrialCount)
        );
    }

    #[test]
    fn dealt_board_keeps_known_cards_in_front() {
        let board = parse_cards("Ks Qs Js").unwrap();
        let sim = EquitySimulator::new(hand("Ah Ad"), &board).unwrap();
        let mut dealer = sim.dealer();
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let trial = dealer.deal(&mut rng);
        assert_eq!(&trial.board[..3], board.as_slice());
    }

    #[test]
    fn river_lock_is_always_a_win() {
        // Royal flush on board for us only
        let board = parse_cards("Ks Qs Js Ts 2d").unwrap();
        let sim = EquitySimulator::new(hand("As 3h"), &board).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let est = sim.simulate(SimulationBudget::trials(200), &mut rng).unwrap();
        assert_eq!(est.wins, 200);
        assert_eq!(est.equity(), 1.0);
    }

    #[test]
    fn expired_deadline_still_runs_one_trial() {
        let sim = EquitySimulator::new(hand("7h 2c"), &[]).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let budget = SimulationBudget::trials(10_000).with_deadline(Instant::now());
        let est = sim.simulate(budget, &mut rng).unwrap();
        assert_eq!(est.trials(), 1);
    }

    #[test]
    fn cache_hit_skips_simulation() {
        let mut cache = EquityCache::new();
        cache.insert(hand("Ah Ad"), 0.85);
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let report = estimate_equity(
            hand("Ad Ah"),
            &[],
            Some(&cache),
            SimulationBudget::trials(10),
            &mut rng,
        )
        .unwrap();
        assert_eq!(report.source, EquitySource::Cache);
        assert_eq!(report.equity, 0.85);

        let report = estimate_equity(
            hand("Kd Kh"),
            &[],
            Some(&cache),
            SimulationBudget::trials(10),
            &mut rng,
        )
        .unwrap();
        assert_eq!(report.source, EquitySource::Simulation);
        assert_eq!(report.trials, 10);
    }

    #[test]
    fn estimate_merge_sums_counts() {
        let a = EquityEstimate {
            wins: 3,
            ties: 1,
            losses: 0,
        };
        let b = EquityEstimate {
            wins: 0,
            ties: 1,
            losses: 4,
        };
        let m = a.merge(b);
        assert_eq!(m.trials(), 9);
        assert!((m.equity() - 4.0 / 9.0).abs() < 1e-12);
    }
}
