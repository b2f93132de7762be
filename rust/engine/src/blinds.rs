//! Blind rotation across a session.
//!
//! [`BlindManager`] owns the seating order of players still in the game, the
//! small-blind pointer and the current blind level. Levels rise through a
//! [`BlindSchedule`] once `hands_per_level` hands have been played.

use std::fmt::Debug;

use tracing::info;

use crate::errors::BlindError;
use crate::player::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blinds {
    small: u32,
    big: u32,
}

impl Blinds {
    pub fn new(small: u32, big: u32) -> Result<Self, BlindError> {
        if big <= small {
            return Err(BlindError::InvalidBlinds { small, big });
        }
        Ok(Self { small, big })
    }

    pub fn small(&self) -> u32 {
        self.small
    }

    pub fn big(&self) -> u32 {
        self.big
    }
}

impl Default for Blinds {
    fn default() -> Self {
        Self { small: 10, big: 20 }
    }
}

/// Decides the next level's blinds when a level ends.
pub trait BlindSchedule: Debug + Send + Sync {
    fn raise(&self, current: Blinds) -> Blinds;

    fn name(&self) -> &str;
}

/// Blinds never change.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSchedule;

impl BlindSchedule for FixedSchedule {
    fn raise(&self, current: Blinds) -> Blinds {
        current
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Both blinds double at every level.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoublingSchedule;

impl BlindSchedule for DoublingSchedule {
    fn raise(&self, current: Blinds) -> Blinds {
        let small = current.small.saturating_mul(2);
        let big = current.big.saturating_mul(2);
        // saturation could collapse the gap
        if big > small {
            Blinds { small, big }
        } else {
            current
        }
    }

    fn name(&self) -> &str {
        "double"
    }
}

pub fn schedule_from_name(name: &str) -> Option<Box<dyn BlindSchedule>> {
    match name {
        "fixed" => Some(Box::new(FixedSchedule)),
        "double" | "doubling" => Some(Box::new(DoublingSchedule)),
        _ => None,
    }
}

#[derive(Debug)]
pub struct BlindManager<P: PlayerId> {
    players: Vec<P>,
    small_blind_index: usize,
    blinds: Blinds,
    level: u32,
    hands_per_level: u32,
    hands_this_level: u32,
    schedule: Box<dyn BlindSchedule>,
}

impl<P: PlayerId> BlindManager<P> {
    /// The first player in `players` posts the first small blind.
    pub fn new(
        players: Vec<P>,
        blinds: Blinds,
        hands_per_level: u32,
        schedule: Box<dyn BlindSchedule>,
    ) -> Result<Self, BlindError> {
        if hands_per_level == 0 {
            return Err(BlindError::InvalidHandsPerLevel);
        }
        Ok(Self {
            players,
            small_blind_index: 0,
            blinds,
            level: 1,
            hands_per_level,
            hands_this_level: 0,
            schedule,
        })
    }

    /// `(amount, player)` for this hand's small blind.
    pub fn next_small_blind(&self) -> Option<(u32, &P)> {
        let player = self.players.get(self.small_blind_index)?;
        Some((self.blinds.small, player))
    }

    /// `(amount, player)` for this hand's big blind, the seat after the small
    /// blind.
    pub fn next_big_blind(&self) -> Option<(u32, &P)> {
        if self.players.is_empty() {
            return None;
        }
        let index = (self.small_blind_index + 1) % self.players.len();
        Some((self.blinds.big, &self.players[index]))
    }

    /// Forced bets to seed a betting round; empty with fewer than two players.
    pub fn forced_bets(&self) -> Vec<(P, u32)> {
        if self.players.len() < 2 {
            return Vec::new();
        }
        self.next_small_blind()
            .into_iter()
            .chain(self.next_big_blind())
            .map(|(amount, p)| (p.clone(), amount))
            .collect()
    }

    /// Moves the button one seat. Returns `true` when this hand completed a
    /// level and the blinds were raised.
    pub fn advance_hand(&mut self) -> bool {
        if !self.players.is_empty() {
            self.small_blind_index = (self.small_blind_index + 1) % self.players.len();
        }
        self.hands_this_level += 1;
        if self.hands_this_level < self.hands_per_level {
            return false;
        }

        self.hands_this_level = 0;
        self.level += 1;
        self.blinds = self.schedule.raise(self.blinds);
        info!(
            level = self.level,
            small = self.blinds.small,
            big = self.blinds.big,
            schedule = self.schedule.name(),
            "blind level up"
        );
        true
    }

    /// Removes `player` for good. Returns `false` if they were not seated.
    pub fn eliminate(&mut self, player: &P) -> bool {
        let Some(removed) = self.players.iter().position(|p| p == player) else {
            return false;
        };
        self.players.remove(removed);
        if removed < self.small_blind_index {
            self.small_blind_index -= 1;
        }
        if self.small_blind_index >= self.players.len() {
            self.small_blind_index = 0;
        }
        true
    }

    pub fn players(&self) -> &[P] {
        &self.players
    }

    pub fn small_blind_index(&self) -> usize {
        self.small_blind_index
    }

    pub fn blinds(&self) -> Blinds {
        self.blinds
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn hands_per_level(&self) -> u32 {
        self.hands_per_level
    }

    pub fn hands_this_level(&self) -> u32 {
        self.hands_this_level
    }

    /// Protocol lines for the session start and for every level change.
    pub fn announcements(&self) -> Vec<String> {
        vec![
            format!("Match smallBlind {}", self.blinds.small),
            format!("Match bigBlind {}", self.blinds.big),
            format!("Settings handsPerLevel {}", self.hands_per_level),
        ]
    }
}
