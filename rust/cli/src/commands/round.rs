//! Round command: replay a scripted betting round.
//!
//! The first two seats post the configured small and big blinds, then each
//! scripted step is applied in order. Steps out of turn or refused by the
//! limit are reported and the replay stops.

use super::load_config;
use crate::cli::Limit;
use crate::error::CliError;
use crate::validation::{ScriptStep, parse_players, parse_script};
use pokeher_engine::betting::{BettingRound, PostOutcome};
use pokeher_engine::rules::limit_from_name;
use std::io::Write;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct RoundArgs {
    pub players: String,
    pub actions: String,
    pub limit: Limit,
    pub bet_size: Option<u32>,
    pub pot: u32,
}

pub fn handle_round_command(
    args: RoundArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = load_config(err)?;
    let players = parse_players(&args.players).map_err(CliError::InvalidInput)?;
    if players.len() < 2 {
        return Err(CliError::InvalidInput("a round needs at least two players".into()));
    }
    let steps = parse_script(&args.actions).map_err(CliError::InvalidInput)?;
    let limit = limit_from_name(args.limit.name(), args.bet_size.unwrap_or(cfg.big_blind))
        .ok_or_else(|| CliError::InvalidInput(format!("unknown limit {}", args.limit.name())))?;

    let (sb_player, bb_player) = (players[0].clone(), players[1].clone());
    writeln!(
        out,
        "Blinds: {} {} / {} {} ({})",
        sb_player,
        cfg.small_blind,
        bb_player,
        cfg.big_blind,
        args.limit.name()
    )?;
    let forced = [(sb_player, cfg.small_blind), (bb_player, cfg.big_blind)];
    let mut round = BettingRound::with_limit(players, forced, args.pot, limit);

    for step in &steps {
        let player = step.player().to_string();
        debug!(?step, next = ?round.next_to_act(), "applying scripted step");
        let result = match step {
            ScriptStep::Post { amount, .. } => round.post(&player, *amount).map(|outcome| match outcome {
                PostOutcome::Accepted => format!("{} posts {}", player, amount),
                PostOutcome::Folded => format!("{} posts {} short of {} and folds", player, amount, round.pot_summary().1),
            }),
            ScriptStep::Fold { .. } => round.fold(&player).map(|_| format!("{} folds", player)),
        };
        match result {
            Ok(line) => writeln!(out, "{}", line)?,
            Err(e) => {
                writeln!(out, "{}: {}", player, e)?;
                break;
            }
        }
    }

    let (pot, threshold) = round.pot_summary();
    writeln!(out, "Pot: {} (to match: {})", pot, threshold)?;
    match round.next_to_act() {
        Some(next) => writeln!(out, "Next to act: {}", next)?,
        None => writeln!(out, "Round closed")?,
    }
    for line in round.announcements() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
