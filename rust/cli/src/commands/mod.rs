//! Command handler modules for the pokeher CLI.
//!
//! Each command lives in its own file and exposes
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`. Output streams
//! are passed in as `&mut dyn Write` so tests can capture them.

pub mod bench;
pub mod blinds;
pub mod cfg;
pub mod equity;
pub mod eval;
pub mod preflop;
pub mod round;
pub mod turn;

pub use bench::handle_bench_command;
pub use blinds::handle_blinds_command;
pub use cfg::handle_cfg_command;
pub use equity::handle_equity_command;
pub use eval::handle_eval_command;
pub use preflop::handle_preflop_command;
pub use round::handle_round_command;
pub use turn::handle_turn_command;

use crate::config::{self, Config};
use crate::error::CliError;
use crate::ui;
use pokeher_engine::cards::{Card, parse_cards};
use std::io::Write;

/// Loads the layered configuration, reporting failures on `err`.
pub(crate) fn load_config(err: &mut dyn Write) -> Result<Config, CliError> {
    config::load().map_err(|e| {
        let msg = format!("Invalid configuration: {}", e);
        if let Err(e) = ui::write_error(err, &msg) {
            tracing::debug!(error = %e, "configuration error not written");
        }
        CliError::Config(msg)
    })
}

/// Parses an optional card list; missing means no cards.
pub(crate) fn parse_optional_cards(input: Option<&str>) -> Result<Vec<Card>, CliError> {
    match input {
        Some(s) => parse_cards(s).map_err(|e| CliError::InvalidInput(e.to_string())),
        None => Ok(Vec::new()),
    }
}
