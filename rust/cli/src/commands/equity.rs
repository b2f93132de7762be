//! Equity command: estimate a hand's win probability.
//!
//! Preflop hands are looked up in the preflop cache named by the
//! configuration unless `--no-cache` is given; everything else is simulated.

use super::{load_config, parse_optional_cards};
use crate::error::CliError;
use crate::formatters::{format_board, format_equity};
use pokeher_engine::cache::EquityCache;
use pokeher_engine::cards::Hand;
use pokeher_engine::equity::{EquitySource, SimulationBudget, estimate_equity};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct EquityArgs {
    pub hand: String,
    pub board: Option<String>,
    pub trials: Option<u32>,
    pub seed: Option<u64>,
    pub time_ms: Option<u64>,
    pub no_cache: bool,
}

pub fn handle_equity_command(
    args: EquityArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = load_config(err)?;
    let hand: Hand = args
        .hand
        .parse()
        .map_err(|e| CliError::InvalidInput(format!("hand: {}", e)))?;
    let board = parse_optional_cards(args.board.as_deref())?;

    let trials = args.trials.unwrap_or(cfg.iterations);
    if trials == 0 {
        return Err(CliError::InvalidInput("trials must be > 0".into()));
    }
    let mut budget = SimulationBudget::trials(trials);
    if let Some(ms) = args.time_ms {
        budget = budget.with_time_limit(Duration::from_millis(ms));
    }

    let cache = if args.no_cache || !board.is_empty() {
        None
    } else {
        Some(EquityCache::load_or_empty(&cfg.preflop_cache))
    };
    let seed = args.seed.or(cfg.seed).unwrap_or(0);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    let report = estimate_equity(hand, &board, cache.as_ref(), budget, &mut rng)?;
    writeln!(out, "Hand: {} Board: {}", hand, format_board(&board))?;
    writeln!(out, "Equity: {}", format_equity(report.equity))?;
    match report.source {
        EquitySource::Cache => writeln!(out, "Source: cache")?,
        EquitySource::Simulation => {
            writeln!(out, "Source: simulation ({} trials, seed {})", report.trials, seed)?
        }
    }
    Ok(())
}
