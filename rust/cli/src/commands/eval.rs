//! Hand evaluation command.
//!
//! Picks the best five cards out of the 5 to 7 given and prints them with
//! their category and raw score.

use crate::error::CliError;
use crate::formatters::format_board;
use pokeher_engine::cards::parse_cards;
use pokeher_engine::hand::evaluate;
use std::io::Write;

pub fn handle_eval_command(cards: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(cards).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    if cards.len() > 7 {
        return Err(CliError::InvalidInput(format!(
            "at most 7 cards can be evaluated, got {}",
            cards.len()
        )));
    }
    let best = evaluate(&cards)?;
    writeln!(out, "Best five: {}", format_board(&best.cards))?;
    writeln!(out, "Category: {}", best.category())?;
    writeln!(out, "Score: {}", best.score.raw())?;
    Ok(())
}
