//! Turn command: one decision from the bot.

use super::{load_config, parse_optional_cards};
use crate::error::CliError;
use crate::formatters::{format_action, format_board, format_equity};
use pokeher_ai::policy::ThresholdPolicy;
use pokeher_ai::{Brain, DecisionPolicy, GameSnapshot, create_policy};
use pokeher_engine::cache::EquityCache;
use pokeher_engine::cards::Hand;
use pokeher_engine::equity::EquitySource;
use pokeher_engine::logger::TurnLogger;
use std::io::Write;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct TurnArgs {
    pub hand: Option<String>,
    pub board: Option<String>,
    pub pot: u32,
    pub side_pot: u32,
    pub committed: u32,
    pub time_ms: u64,
    pub policy: String,
    pub log: Option<String>,
}

pub fn handle_turn_command(
    args: TurnArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = load_config(err)?;
    let hand = match args.hand.as_deref() {
        Some(s) => Some(
            s.parse::<Hand>()
                .map_err(|e| CliError::InvalidInput(format!("hand: {}", e)))?,
        ),
        None => None,
    };
    let table = parse_optional_cards(args.board.as_deref())?;

    // The configured threshold only applies to the threshold policy.
    let policy: Box<dyn DecisionPolicy> = if args.policy == "threshold" {
        Box::new(ThresholdPolicy::new(cfg.fold_threshold))
    } else {
        create_policy(&args.policy).map_err(|e| CliError::InvalidInput(e.to_string()))?
    };

    let cache = EquityCache::load_or_empty(&cfg.preflop_cache);
    let mut brain = Brain::new(policy, cache, cfg.seed)
        .with_iterations(cfg.iterations)
        .with_time_fraction(cfg.time_fraction);
    if let Some(path) = &args.log {
        brain = brain.with_logger(TurnLogger::create(path)?);
    }

    let snapshot = GameSnapshot {
        hand,
        table,
        pot: args.pot,
        side_pot: args.side_pot,
        committed: args.committed,
        active_players: 2,
    };
    let decision = brain.do_turn(Duration::from_millis(args.time_ms), &snapshot);

    if let Some(hand) = snapshot.hand {
        writeln!(out, "Hand: {} Board: {}", hand, format_board(&snapshot.table))?;
    }
    writeln!(out, "Action: {}", format_action(&decision.action))?;
    writeln!(out, "Equity: {}", format_equity(decision.equity))?;
    writeln!(out, "Pot odds: {:.2}%", decision.pot_odds)?;
    let source = match decision.source {
        Some(EquitySource::Cache) => "cache".to_string(),
        Some(EquitySource::Simulation) => format!("simulation ({} trials)", decision.trials),
        None => "none".to_string(),
    };
    writeln!(out, "Source: {}", source)?;
    Ok(())
}
