//! Betting-limit policies.
//!
//! A [`BetLimit`] decides whether a positive chip amount may be posted, given
//! the pot and what the player still owes. [`crate::betting::BettingRound`]
//! consults it before accepting a post; the round's own rules (match or fold)
//! apply on top.

use std::fmt::Debug;

pub trait BetLimit: Debug + Send + Sync {
    /// `pot` is the settled pot, `to_call` what the player owes before this
    /// bet, `bet` the chips being added now.
    fn check_bet(&self, pot: u32, to_call: u32, bet: u32) -> bool;

    fn name(&self) -> &str;
}

/// Any strictly positive amount, at any time.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLimit;

impl BetLimit for NoLimit {
    fn check_bet(&self, _pot: u32, _to_call: u32, bet: u32) -> bool {
        bet > 0
    }

    fn name(&self) -> &str {
        "no-limit"
    }
}

/// A raise may be at most the size of the pot after calling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PotLimit;

impl BetLimit for PotLimit {
    fn check_bet(&self, pot: u32, to_call: u32, bet: u32) -> bool {
        let max = pot.saturating_add(to_call.saturating_mul(2));
        bet > 0 && bet <= max
    }

    fn name(&self) -> &str {
        "pot-limit"
    }
}

/// Either call exactly or raise by exactly `bet_size`.
#[derive(Debug, Clone, Copy)]
pub struct FixedLimit {
    pub bet_size: u32,
}

impl BetLimit for FixedLimit {
    fn check_bet(&self, _pot: u32, to_call: u32, bet: u32) -> bool {
        bet > 0 && (bet == to_call || bet == to_call.saturating_add(self.bet_size))
    }

    fn name(&self) -> &str {
        "fixed-limit"
    }
}

/// Builds a limit policy from its name.
///
/// # Examples
///
/// ```
/// use pokeher_engine::rules::limit_from_name;
///
/// let limit = limit_from_name("pot-limit", 20).unwrap();
/// assert!(limit.check_bet(100, 20, 140));
/// assert!(!limit.check_bet(100, 20, 141));
/// assert!(limit_from_name("spread", 20).is_none());
/// ```
pub fn limit_from_name(name: &str, bet_size: u32) -> Option<Box<dyn BetLimit>> {
    match name {
        "no-limit" => Some(Box::new(NoLimit)),
        "pot-limit" => Some(Box::new(PotLimit)),
        "fixed-limit" => Some(Box::new(FixedLimit { bet_size })),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_limit_accepts_any_positive_bet() {
        assert!(NoLimit.check_bet(0, 0, 1));
        assert!(NoLimit.check_bet(10, 0, 1_000_000));
        assert!(!NoLimit.check_bet(10, 5, 0));
    }

    #[test]
    fn pot_limit_caps_at_pot_after_call() {
        // pot 30, facing 10: call 10 then raise up to 50 more
        assert!(PotLimit.check_bet(30, 10, 50));
        assert!(!PotLimit.check_bet(30, 10, 51));
    }

    #[test]
    fn fixed_limit_allows_call_or_one_increment() {
        let limit = FixedLimit { bet_size: 20 };
        assert!(limit.check_bet(60, 20, 20));
        assert!(limit.check_bet(60, 20, 40));
        assert!(!limit.check_bet(60, 20, 30));
        assert!(limit.check_bet(60, 0, 20));
    }
}
