//! One street of betting.
//!
//! [`BettingRound`] tracks each active player's bet for the street, the pot,
//! the current amount every player must reach (the side-pot threshold), the
//! high bettor and whose turn it is. Under-calling is folding: a post that
//! leaves a player below the threshold removes them from the round.
//!
//! Forced bets (blinds) count toward the pot and the threshold but never make
//! the poster high bettor, so the big blind keeps its option to raise when the
//! action comes back around.

use std::collections::HashMap;

use tracing::debug;

use crate::errors::BettingError;
use crate::player::PlayerId;
use crate::rules::{BetLimit, NoLimit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOutcome {
    Accepted,
    Folded,
}

#[derive(Debug, Clone, Copy)]
struct Stake {
    bet: u32,
    owes_action: bool,
}

#[derive(Debug)]
pub struct BettingRound<P: PlayerId> {
    /// Seating order for this street; folded players stay listed.
    players: Vec<P>,
    /// Active players only. A missing entry means folded.
    stakes: HashMap<P, Stake>,
    pot: u32,
    side_pot: u32,
    high_bettor: Option<P>,
    next_index: usize,
    limit: Box<dyn BetLimit>,
}

impl<P: PlayerId> BettingRound<P> {
    /// No-limit round with an empty pot.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokeher_engine::betting::{BettingRound, PostOutcome};
    ///
    /// let mut round = BettingRound::new(vec!["a", "b", "c"], [("a", 10), ("b", 20)]);
    /// assert_eq!(round.next_to_act(), Some(&"c"));
    /// assert_eq!(round.post(&"c", 20), Ok(PostOutcome::Accepted));
    /// assert_eq!(round.pot_summary(), (50, 20));
    /// ```
    pub fn new<I>(players: Vec<P>, forced: I) -> Self
    where
        I: IntoIterator<Item = (P, u32)>,
    {
        Self::with_limit(players, forced, 0, Box::new(NoLimit))
    }

    /// Round whose pot already holds `pot` chips from earlier streets.
    pub fn with_pot<I>(players: Vec<P>, forced: I, pot: u32) -> Self
    where
        I: IntoIterator<Item = (P, u32)>,
    {
        Self::with_limit(players, forced, pot, Box::new(NoLimit))
    }

    pub fn with_limit<I>(players: Vec<P>, forced: I, pot: u32, limit: Box<dyn BetLimit>) -> Self
    where
        I: IntoIterator<Item = (P, u32)>,
    {
        let forced: HashMap<P, u32> = forced.into_iter().collect();
        let mut stakes = HashMap::with_capacity(players.len());
        let mut pot = pot;
        let mut side_pot = 0;
        let mut first_to_act = None;

        for (i, p) in players.iter().enumerate() {
            let bet = match forced.get(p) {
                Some(&bet) => {
                    pot = pot.saturating_add(bet);
                    side_pot = side_pot.max(bet);
                    bet
                }
                None => {
                    first_to_act.get_or_insert(i);
                    0
                }
            };
            stakes.insert(
                p.clone(),
                Stake {
                    bet,
                    owes_action: true,
                },
            );
        }

        Self {
            players,
            stakes,
            pot,
            side_pot,
            high_bettor: None,
            next_index: first_to_act.unwrap_or(0),
            limit,
        }
    }

    /// The player who must act now, or `None` once the round is closed.
    pub fn next_to_act(&self) -> Option<&P> {
        if self.stakes.len() < 2 {
            return None;
        }
        let p = self.players.get(self.next_index)?;
        let owes = self.stakes.get(p).is_some_and(|s| s.owes_action);
        (owes && self.can_act(p)).then_some(p)
    }

    /// Active and not the high bettor everyone else is responding to.
    pub fn can_act(&self, player: &P) -> bool {
        self.is_staked(player) && self.high_bettor.as_ref() != Some(player)
    }

    pub fn is_staked(&self, player: &P) -> bool {
        self.stakes.contains_key(player)
    }

    pub fn is_closed(&self) -> bool {
        self.next_to_act().is_none()
    }

    /// Adds `amount` chips for `player`, who must be [`Self::next_to_act`].
    ///
    /// Reaching the threshold is accepted (exceeding it is a raise that makes
    /// the player high bettor and re-opens action for everyone else). Falling
    /// short folds the player; those chips never reach the pot.
    ///
    /// # Errors
    ///
    /// - [`BettingError::RoundClosed`] when nobody may act
    /// - [`BettingError::NotPlayersTurn`] when `player` is not next to act
    /// - [`BettingError::IllegalBet`] when the limit policy refuses a positive
    ///   amount; the round is left unchanged
    /// - [`BettingError::Overflow`] when the bet or pot would exceed `u32`;
    ///   the round is left unchanged
    pub fn post(&mut self, player: &P, amount: u32) -> Result<PostOutcome, BettingError> {
        self.check_turn(player)?;
        let stake = self.stakes[player];
        let to_call = self.side_pot.saturating_sub(stake.bet);
        if amount > 0 && !self.limit.check_bet(self.pot, to_call, amount) {
            return Err(BettingError::IllegalBet { amount });
        }

        let (Some(total), Some(pot)) = (stake.bet.checked_add(amount), self.pot.checked_add(amount))
        else {
            return Err(BettingError::Overflow { amount });
        };
        let outcome = if total >= self.side_pot {
            self.pot = pot;
            if total > self.side_pot {
                debug!(player = ?player, total, previous = self.side_pot, "raise");
                self.side_pot = total;
                self.high_bettor = Some(player.clone());
                for s in self.stakes.values_mut() {
                    s.owes_action = true;
                }
            }
            self.stakes.insert(
                player.clone(),
                Stake {
                    bet: total,
                    owes_action: false,
                },
            );
            PostOutcome::Accepted
        } else {
            debug!(player = ?player, total, threshold = self.side_pot, "under-call folds");
            self.stakes.remove(player);
            PostOutcome::Folded
        };
        self.advance();
        Ok(outcome)
    }

    /// Explicit fold by the player whose turn it is.
    pub fn fold(&mut self, player: &P) -> Result<(), BettingError> {
        self.check_turn(player)?;
        self.stakes.remove(player);
        self.advance();
        Ok(())
    }

    /// `(pot, side_pot_threshold)`.
    pub fn pot_summary(&self) -> (u32, u32) {
        (self.pot, self.side_pot)
    }

    pub fn bet(&self, player: &P) -> Option<u32> {
        self.stakes.get(player).map(|s| s.bet)
    }

    /// What `player` still needs to add to stay in.
    pub fn to_call(&self, player: &P) -> Option<u32> {
        self.bet(player)
            .map(|bet| self.side_pot.saturating_sub(bet))
    }

    /// Pot odds in percent: `100 * to_call / (to_call + pot)`.
    pub fn pot_odds(&self, player: &P) -> Option<f64> {
        self.to_call(player).map(|to_call| pot_odds(to_call, self.pot))
    }

    pub fn high_bettor(&self) -> Option<&P> {
        self.high_bettor.as_ref()
    }

    /// Active players in seating order.
    pub fn active_players(&self) -> impl Iterator<Item = &P> + '_ {
        self.players.iter().filter(|p| self.stakes.contains_key(*p))
    }

    pub fn limit(&self) -> &dyn BetLimit {
        self.limit.as_ref()
    }

    /// Protocol lines announcing the pot.
    pub fn announcements(&self) -> Vec<String> {
        vec![
            format!("Match pot {}", self.pot),
            format!("Match sidepots [{}]", self.side_pot),
        ]
    }

    fn check_turn(&self, player: &P) -> Result<(), BettingError> {
        match self.next_to_act() {
            None => Err(BettingError::RoundClosed),
            Some(expected) if expected != player => Err(BettingError::NotPlayersTurn {
                expected: format!("{expected:?}"),
                actual: format!("{player:?}"),
            }),
            Some(_) => Ok(()),
        }
    }

    // Step to the next seat, skipping players who have folded.
    fn advance(&mut self) {
        let n = self.players.len();
        for _ in 0..n {
            self.next_index = (self.next_index + 1) % n;
            if self.stakes.contains_key(&self.players[self.next_index]) {
                break;
            }
        }
    }
}

/// Pot odds in percent for calling `to_call` into `pot`; zero when both are
/// zero.
pub fn pot_odds(to_call: u32, pot: u32) -> f64 {
    let total = to_call as f64 + pot as f64;
    if total == 0.0 {
        return 0.0;
    }
    100.0 * to_call as f64 / total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::FixedLimit;

    #[test]
    fn blinds_set_threshold_without_high_bettor() {
        let round = BettingRound::new(vec!["sb", "bb", "c"], [("sb", 10), ("bb", 20)]);
        assert_eq!(round.pot_summary(), (30, 20));
        assert_eq!(round.high_bettor(), None);
        assert_eq!(round.next_to_act(), Some(&"c"));
        assert_eq!(round.to_call(&"sb"), Some(10));
    }

    #[test]
    fn all_forced_bets_start_with_first_player() {
        let round = BettingRound::new(vec!["a", "b"], [("a", 5), ("b", 5)]);
        assert_eq!(round.next_to_act(), Some(&"a"));
    }

    #[test]
    fn out_of_turn_post_is_rejected_without_side_effects() {
        let mut round = BettingRound::new(vec!["a", "b", "c"], [("a", 10), ("b", 20)]);
        let err = round.post(&"a", 10).unwrap_err();
        assert!(matches!(err, BettingError::NotPlayersTurn { .. }));
        assert_eq!(round.pot_summary(), (30, 20));
        assert_eq!(round.next_to_act(), Some(&"c"));
    }

    #[test]
    fn limit_rejection_leaves_round_unchanged() {
        let mut round = BettingRound::with_limit(
            vec!["a", "b"],
            [("a", 10), ("b", 20)],
            0,
            Box::new(FixedLimit { bet_size: 20 }),
        );
        assert_eq!(
            round.post(&"a", 25),
            Err(BettingError::IllegalBet { amount: 25 })
        );
        assert_eq!(round.next_to_act(), Some(&"a"));
        assert_eq!(round.post(&"a", 10), Ok(PostOutcome::Accepted));
    }

    #[test]
    fn overflowing_post_leaves_round_unchanged() {
        let mut round = BettingRound::new(vec!["a", "b", "c"], [("a", 10), ("b", 20)]);
        assert_eq!(
            round.post(&"c", u32::MAX),
            Err(BettingError::Overflow { amount: u32::MAX })
        );
        assert_eq!(round.pot_summary(), (30, 20));
        assert_eq!(round.next_to_act(), Some(&"c"));
        assert_eq!(round.high_bettor(), None);
        assert_eq!(round.post(&"c", 20), Ok(PostOutcome::Accepted));
    }

    #[test]
    fn raise_reopens_action_and_closes_at_raiser() {
        let mut round = BettingRound::new(vec!["a", "b", "c"], Vec::new());
        assert_eq!(round.post(&"a", 0), Ok(PostOutcome::Accepted));
        assert_eq!(round.post(&"b", 30), Ok(PostOutcome::Accepted));
        assert_eq!(round.high_bettor(), Some(&"b"));
        assert_eq!(round.post(&"c", 30), Ok(PostOutcome::Accepted));
        // a checked earlier but owes action again
        assert_eq!(round.next_to_act(), Some(&"a"));
        assert_eq!(round.post(&"a", 30), Ok(PostOutcome::Accepted));
        assert!(round.is_closed());
        assert_eq!(round.pot_summary(), (90, 30));
    }

    #[test]
    fn folded_seat_is_skipped() {
        let mut round = BettingRound::new(vec!["a", "b", "c", "d"], Vec::new());
        round.post(&"a", 10).unwrap();
        round.fold(&"b").unwrap();
        round.post(&"c", 10).unwrap();
        round.post(&"d", 20).unwrap();
        round.post(&"a", 10).unwrap();
        // b folded, so c must respond to d's raise
        assert_eq!(round.next_to_act(), Some(&"c"));
        round.post(&"c", 10).unwrap();
        assert!(round.is_closed());
        assert_eq!(round.active_players().count(), 3);
    }

    #[test]
    fn last_player_standing_closes_round() {
        let mut round = BettingRound::new(vec!["sb", "bb"], [("sb", 10), ("bb", 20)]);
        round.fold(&"sb").unwrap();
        assert!(round.is_closed());
        assert_eq!(round.post(&"bb", 0), Err(BettingError::RoundClosed));
    }

    #[test]
    fn pot_odds_formula() {
        assert_eq!(pot_odds(0, 0), 0.0);
        assert!((pot_odds(20, 60) - 25.0).abs() < 1e-9);
        let round = BettingRound::new(vec!["sb", "bb"], [("sb", 10), ("bb", 20)]);
        assert!((round.pot_odds(&"sb").unwrap() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn announcements_report_pot_and_threshold() {
        let round = BettingRound::with_pot(vec!["a", "b"], [("a", 10), ("b", 20)], 100);
        assert_eq!(
            round.announcements(),
            vec!["Match pot 130".to_string(), "Match sidepots [20]".to_string()]
        );
    }
}
