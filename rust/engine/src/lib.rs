//! # pokeher-engine: Hold'em decision core
//!
//! The algorithmic pieces a Texas Hold'em bot needs to act on its turn:
//! card types, a best-of-seven hand evaluator, a Monte Carlo equity simulator
//! with a preflop cache, the betting-round state machine and blind rotation.
//!
//! ## Core Modules
//!
//! - [`cards`] - Suit, Rank, Card and two-card [`cards::Hand`]
//! - [`deck`] - Card sets, the unseen deck and a seeded shuffling deck
//! - [`hand`] - Five-card scoring and best-five selection
//! - [`equity`] - Monte Carlo equity with trial-count or wall-clock budgets
//! - [`cache`] - Precomputed preflop equity on disk
//! - [`betting`] - One street of betting: pot, threshold, turn order
//! - [`rules`] - Pluggable betting-limit policies
//! - [`blinds`] - Blind rotation and level schedule
//! - [`player`] - Player ids and actions
//! - [`logger`] - JSONL turn history
//! - [`errors`] - Error types for every component
//!
//! ## Quick Start
//!
//! ```rust
//! use pokeher_engine::cards::parse_cards;
//! use pokeher_engine::hand::{evaluate, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let best = evaluate(&cards).unwrap();
//! assert_eq!(best.category(), Category::StraightFlush);
//! ```
//!
//! ## Reproducible simulation
//!
//! Every random choice goes through a caller-supplied generator, so a seeded
//! ChaCha20 gives identical estimates run after run:
//!
//! ```rust
//! use pokeher_engine::equity::{EquitySimulator, SimulationBudget};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let sim = EquitySimulator::new("As Ah".parse().unwrap(), &[]).unwrap();
//! let a = sim.simulate(SimulationBudget::trials(500), &mut ChaCha20Rng::seed_from_u64(7)).unwrap();
//! let b = sim.simulate(SimulationBudget::trials(500), &mut ChaCha20Rng::seed_from_u64(7)).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod betting;
pub mod blinds;
pub mod cache;
pub mod cards;
pub mod deck;
pub mod equity;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
