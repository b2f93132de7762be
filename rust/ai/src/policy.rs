//! Decision policies.
//!
//! Both policies only ever fold, check or call; raising is left to policies
//! that know about stack sizes.

use crate::DecisionPolicy;
use pokeher_engine::player::PlayerAction;

/// Equity below which [`ThresholdPolicy::default`] folds.
pub const DEFAULT_FOLD_THRESHOLD: f64 = 0.3;

/// Folds below a fixed equity, otherwise calls (or checks when free).
///
/// # Example
///
/// ```rust
/// use pokeher_ai::policy::ThresholdPolicy;
/// use pokeher_ai::DecisionPolicy;
/// use pokeher_engine::player::PlayerAction;
///
/// let policy = ThresholdPolicy::new(0.5);
/// assert_eq!(policy.decide(0.49, 10.0, 20), PlayerAction::Fold);
/// assert_eq!(policy.decide(0.5, 10.0, 0), PlayerAction::Check);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ThresholdPolicy {
    fold_below: f64,
}

impl ThresholdPolicy {
    pub fn new(fold_below: f64) -> Self {
        Self { fold_below }
    }

    pub fn fold_below(&self) -> f64 {
        self.fold_below
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_FOLD_THRESHOLD)
    }
}

impl DecisionPolicy for ThresholdPolicy {
    fn decide(&self, equity: f64, _pot_odds: f64, to_call: u32) -> PlayerAction {
        if equity < self.fold_below {
            PlayerAction::Fold
        } else {
            PlayerAction::call_or_check(to_call)
        }
    }

    fn name(&self) -> &str {
        "threshold"
    }
}

/// Calls when equity (as a percentage) is at least the pot odds; never folds
/// when checking is free.
#[derive(Debug, Clone, Copy, Default)]
pub struct PotOddsPolicy;

impl DecisionPolicy for PotOddsPolicy {
    fn decide(&self, equity: f64, pot_odds: f64, to_call: u32) -> PlayerAction {
        if to_call == 0 {
            return PlayerAction::Check;
        }
        if equity * 100.0 >= pot_odds {
            PlayerAction::Call(to_call)
        } else {
            PlayerAction::Fold
        }
    }

    fn name(&self) -> &str {
        "pot-odds"
    }
}
