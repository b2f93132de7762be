//! Cfg command: print the resolved configuration.
//!
//! Every field is shown with its value and where it came from:
//!
//! ```json
//! {
//!   "iterations": {
//!     "value": 2000,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": { "value": config.seed, "source": sources.seed },
        "iterations": { "value": config.iterations, "source": sources.iterations },
        "fold_threshold": { "value": config.fold_threshold, "source": sources.fold_threshold },
        "small_blind": { "value": config.small_blind, "source": sources.small_blind },
        "big_blind": { "value": config.big_blind, "source": sources.big_blind },
        "hands_per_level": { "value": config.hands_per_level, "source": sources.hands_per_level },
        "preflop_cache": { "value": config.preflop_cache, "source": sources.preflop_cache },
        "time_fraction": { "value": config.time_fraction, "source": sources.time_fraction },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
