//! # pokeher-ai: Turn decisions for a Hold'em bot
//!
//! Turns an equity estimate and the price of calling into a single action.
//!
//! ## Core Components
//!
//! - [`DecisionPolicy`] - Trait mapping (equity, pot odds) to an action
//! - [`policy`] - Threshold and pot-odds policies
//! - [`brain`] - The per-turn entry point: estimate equity, ask the policy
//! - [`create_policy`] - Factory for policies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use pokeher_ai::create_policy;
//! use pokeher_engine::player::PlayerAction;
//!
//! let policy = create_policy("threshold").unwrap();
//! assert_eq!(policy.decide(0.2, 25.0, 10), PlayerAction::Fold);
//! assert_eq!(policy.decide(0.6, 25.0, 10), PlayerAction::Call(10));
//! ```
//!
//! ## Policy Types
//!
//! - `"threshold"` - Fold below a fixed equity, otherwise call or check
//! - `"pot-odds"` - Continue whenever equity beats the price of calling

use pokeher_engine::player::PlayerAction;
use thiserror::Error;

pub mod brain;
pub mod policy;

pub use brain::{Brain, GameSnapshot, TurnDecision};

/// Chooses an action from the numbers the engine computes for a turn.
///
/// # Example Implementation
///
/// ```rust
/// use pokeher_ai::DecisionPolicy;
/// use pokeher_engine::player::PlayerAction;
///
/// struct AlwaysCall;
///
/// impl DecisionPolicy for AlwaysCall {
///     fn decide(&self, _equity: f64, _pot_odds: f64, to_call: u32) -> PlayerAction {
///         PlayerAction::call_or_check(to_call)
///     }
///
///     fn name(&self) -> &str {
///         "always-call"
///     }
/// }
/// ```
pub trait DecisionPolicy: Send + Sync {
    /// `equity` is in `[0, 1]`, `pot_odds` in percent (`[0, 100]`) and
    /// `to_call` the chips needed to stay in.
    fn decide(&self, equity: f64, pot_odds: f64, to_call: u32) -> PlayerAction;

    fn name(&self) -> &str;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Unknown policy: {0}")]
    UnknownPolicy(String),
}

/// Builds a policy with default settings by name.
///
/// ```rust
/// use pokeher_ai::{create_policy, PolicyError};
///
/// assert_eq!(create_policy("pot-odds").unwrap().name(), "pot-odds");
/// assert_eq!(
///     create_policy("bluff").err(),
///     Some(PolicyError::UnknownPolicy("bluff".to_string()))
/// );
/// ```
pub fn create_policy(name: &str) -> Result<Box<dyn DecisionPolicy>, PolicyError> {
    match name {
        "threshold" => Ok(Box::new(policy::ThresholdPolicy::default())),
        "pot-odds" => Ok(Box::new(policy::PotOddsPolicy)),
        _ => Err(PolicyError::UnknownPolicy(name.to_string())),
    }
}
