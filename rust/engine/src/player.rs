use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Anything that can identify a seat: bot names, numeric ids, and so on.
pub trait PlayerId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> PlayerId for T {}

/// The single action a bot returns for its turn.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "amount", rename_all = "lowercase")]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Nothing owed; stay in without adding chips
    Check,
    /// Match the outstanding amount
    Call(u32),
    /// Add the given amount of chips
    Raise(u32),
}

impl PlayerAction {
    /// Chips this action puts into the current street.
    pub fn amount(&self) -> u32 {
        match self {
            PlayerAction::Fold | PlayerAction::Check => 0,
            PlayerAction::Call(a) | PlayerAction::Raise(a) => *a,
        }
    }

    /// Call when something is owed, otherwise check.
    pub fn call_or_check(to_call: u32) -> Self {
        if to_call == 0 {
            PlayerAction::Check
        } else {
            PlayerAction::Call(to_call)
        }
    }
}
