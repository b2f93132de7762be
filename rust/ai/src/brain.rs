//! The per-turn decision loop.
//!
//! [`Brain::do_turn`] is called once per turn with the time the server gives
//! us and a snapshot of the table. It estimates equity (preflop cache first,
//! Monte Carlo otherwise), prices the call and hands both to the configured
//! [`DecisionPolicy`]. Every failure along the way ends in a fold: one bad
//! decision costs far less than a crashed session.

use std::time::{Duration, Instant};

use pokeher_engine::betting::pot_odds;
use pokeher_engine::cache::EquityCache;
use pokeher_engine::cards::{Card, Hand};
use pokeher_engine::equity::{EquitySimulator, EquitySource, SimulationBudget, estimate_equity};
use pokeher_engine::logger::{TurnLogger, TurnRecord};
use pokeher_engine::player::PlayerAction;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};

use crate::DecisionPolicy;

/// Monte Carlo trials per decision when the cache cannot answer.
pub const DEFAULT_ITERATIONS: u32 = 2000;

/// Share of the remaining time the simulator may spend.
pub const DEFAULT_TIME_FRACTION: f64 = 0.8;

/// What the bot knows when it is asked to act.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameSnapshot {
    /// Our hole cards; `None` if the server never dealt us any.
    pub hand: Option<Hand>,
    pub table: Vec<Card>,
    pub pot: u32,
    /// The amount every player must reach this street.
    pub side_pot: u32,
    /// What we have already put in this street.
    pub committed: u32,
    pub active_players: usize,
}

impl GameSnapshot {
    pub fn to_call(&self) -> u32 {
        self.side_pot.saturating_sub(self.committed)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TurnDecision {
    pub action: PlayerAction,
    pub equity: f64,
    pub pot_odds: f64,
    pub source: Option<EquitySource>,
    pub trials: u64,
    pub elapsed: Duration,
}

pub struct Brain {
    policy: Box<dyn DecisionPolicy>,
    cache: EquityCache,
    iterations: u32,
    time_fraction: f64,
    rng: ChaCha20Rng,
    logger: Option<TurnLogger>,
}

impl Brain {
    /// A brain with default iterations and time share. Without a seed the
    /// generator is seeded from the thread RNG.
    pub fn new(policy: Box<dyn DecisionPolicy>, cache: EquityCache, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        info!(
            policy = policy.name(),
            cached_hands = cache.len(),
            seed,
            "brain ready"
        );
        Self {
            policy,
            cache,
            iterations: DEFAULT_ITERATIONS,
            time_fraction: DEFAULT_TIME_FRACTION,
            rng: ChaCha20Rng::seed_from_u64(seed),
            logger: None,
        }
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Clamped to `(0, 1]`.
    pub fn with_time_fraction(mut self, fraction: f64) -> Self {
        self.time_fraction = if fraction > 0.0 { fraction.min(1.0) } else { DEFAULT_TIME_FRACTION };
        self
    }

    pub fn with_logger(mut self, logger: TurnLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    /// Decides one action. Never fails: anything that prevents an estimate
    /// is logged and answered with a fold.
    pub fn do_turn(&mut self, time_left: Duration, snapshot: &GameSnapshot) -> TurnDecision {
        let start = Instant::now();
        let to_call = snapshot.to_call();
        let odds = pot_odds(to_call, snapshot.pot);

        let Some(hand) = snapshot.hand else {
            warn!(?snapshot, "no hole cards, folding");
            return self.finish(snapshot, start, fold(odds));
        };

        if !snapshot.table.is_empty() {
            match EquitySimulator::new(hand, &snapshot.table).map(|s| s.best_hand()) {
                Ok(Ok(best)) => debug!(
                    best = ?best.cards.map(|c| c.to_string()),
                    score = %best.score,
                    "best five so far"
                ),
                Ok(Err(_)) => {}
                Err(e) => debug!(error = %e, "cannot evaluate known cards"),
            }
        }

        let budget = SimulationBudget::trials(self.iterations)
            .with_time_limit(time_left.mul_f64(self.time_fraction));
        let report = match estimate_equity(
            hand,
            &snapshot.table,
            Some(&self.cache),
            budget,
            &mut self.rng,
        ) {
            Ok(report) => report,
            Err(e) => {
                warn!(%hand, error = %e, "equity estimate failed, folding");
                return self.finish(snapshot, start, fold(odds));
            }
        };

        let action = self.policy.decide(report.equity, odds, to_call);
        let decision = TurnDecision {
            action,
            equity: report.equity,
            pot_odds: odds,
            source: Some(report.source),
            trials: report.trials,
            elapsed: Duration::ZERO,
        };
        self.finish(snapshot, start, decision)
    }

    fn finish(&mut self, snapshot: &GameSnapshot, start: Instant, mut decision: TurnDecision) -> TurnDecision {
        decision.elapsed = start.elapsed();
        info!(
            hand = ?snapshot.hand.map(|h| h.to_string()),
            equity = decision.equity,
            pot_odds = decision.pot_odds,
            action = ?decision.action,
            trials = decision.trials,
            elapsed_ms = decision.elapsed.as_millis() as u64,
            "finished turn"
        );

        if let Some(logger) = &mut self.logger {
            let record = TurnRecord {
                turn_id: logger.next_id(),
                hand: snapshot.hand.map(|h| h.cards().to_vec()).unwrap_or_default(),
                board: snapshot.table.clone(),
                pot: snapshot.pot,
                to_call: snapshot.to_call(),
                equity: decision.equity,
                pot_odds: decision.pot_odds,
                action: decision.action,
                source: decision.source,
                trials: decision.trials,
                elapsed_ms: decision.elapsed.as_millis() as u64,
                ts: None,
            };
            if let Err(e) = logger.write(&record) {
                warn!(error = %e, "failed to write turn record");
            }
        }
        decision
    }
}

fn fold(pot_odds: f64) -> TurnDecision {
    TurnDecision {
        action: PlayerAction::Fold,
        equity: 0.0,
        pot_odds,
        source: None,
        trials: 0,
        elapsed: Duration::ZERO,
    }
}
