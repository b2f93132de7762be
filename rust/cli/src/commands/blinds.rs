//! Blinds command: walk the blind rotation for a number of hands.

use super::load_config;
use crate::cli::Schedule;
use crate::error::CliError;
use crate::ui;
use crate::validation::{parse_eliminations, parse_players};
use pokeher_engine::blinds::{BlindManager, Blinds, schedule_from_name};
use std::io::Write;

#[derive(Debug, Clone)]
pub struct BlindsArgs {
    pub players: String,
    pub hands: u32,
    pub hands_per_level: Option<u32>,
    pub schedule: Schedule,
    pub eliminate: Option<String>,
}

pub fn handle_blinds_command(
    args: BlindsArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = load_config(err)?;
    let players = parse_players(&args.players).map_err(CliError::InvalidInput)?;
    let eliminations = match args.eliminate.as_deref() {
        Some(s) => parse_eliminations(s).map_err(CliError::InvalidInput)?,
        None => Vec::new(),
    };
    let schedule = schedule_from_name(args.schedule.name())
        .ok_or_else(|| CliError::InvalidInput(format!("unknown schedule {}", args.schedule.name())))?;
    let blinds = Blinds::new(cfg.small_blind, cfg.big_blind)?;
    let per_level = args.hands_per_level.unwrap_or(cfg.hands_per_level);
    let mut manager = BlindManager::new(players, blinds, per_level, schedule)?;

    for line in manager.announcements() {
        writeln!(out, "{}", line)?;
    }
    for hand in 1..=args.hands {
        let (Some((sb, sb_player)), Some((bb, bb_player))) =
            (manager.next_small_blind(), manager.next_big_blind())
        else {
            writeln!(out, "Hand {}: no players left", hand)?;
            break;
        };
        writeln!(
            out,
            "Hand {}: level {} SB {} posts {}, BB {} posts {}",
            hand,
            manager.level(),
            sb_player,
            sb,
            bb_player,
            bb
        )?;

        for (_, player) in eliminations.iter().filter(|(h, _)| *h == hand) {
            if manager.eliminate(player) {
                writeln!(out, "  {} eliminated", player)?;
            } else {
                ui::display_warning(err, &format!("hand {}: {} is not seated", hand, player))?;
            }
        }
        if manager.players().len() < 2 {
            writeln!(out, "Fewer than two players remain")?;
            break;
        }
        if manager.advance_hand() {
            writeln!(out, "Level {} begins", manager.level())?;
            for line in manager.announcements() {
                writeln!(out, "{}", line)?;
            }
        }
    }
    Ok(())
}
