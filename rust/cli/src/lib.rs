//! # Pokeher CLI Library
//!
//! Command-line tools around the pokeher engine: hand evaluation, equity
//! estimates, the preflop cache, single bot turns, blind rotation and
//! scripted betting rounds.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a command handler and returns
//! the process exit code.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["pokeher", "equity", "--hand", "As Ah", "--trials", "5000"];
//! let code = pokeher_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `eval`: Best five of 5 to 7 cards
//! - `equity`: Win probability of a hand against one random opponent
//! - `preflop`: Build the preflop equity cache
//! - `turn`: One decision from the bot
//! - `blinds`: Blind rotation over a number of hands
//! - `round`: Replay a scripted betting round
//! - `bench`: Evaluator and simulator timings
//! - `cfg`: Resolved configuration with value sources

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, PokeherCli};
use commands::{
    handle_bench_command, handle_blinds_command, handle_cfg_command, handle_equity_command,
    handle_eval_command, handle_preflop_command, handle_round_command, handle_turn_command,
};
use commands::blinds::BlindsArgs;
use commands::equity::EquityArgs;
use commands::round::RoundArgs;
use commands::turn::TurnArgs;

pub use error::CliError;

const COMMANDS: &[&str] = &[
    "eval", "equity", "preflop", "turn", "blinds", "round", "bench", "cfg",
];

/// Parses `args` and runs the selected command.
///
/// Returns [`exit_code::SUCCESS`] or [`exit_code::ERROR`]. Help and version
/// output go to `out` and succeed.
///
/// ```
/// use std::io;
/// let args = vec!["pokeher", "eval", "--cards", "Ah Kh Qh Jh Th"];
/// let mut out = Vec::new();
/// let code = pokeher_cli::run(args, &mut out, &mut io::stderr());
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Straight Flush"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PokeherCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Pokeher CLI");
                    write_or_exit!(err, "Usage: pokeher <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: pokeher --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Equity {
            hand,
            board,
            trials,
            seed,
            time_ms,
            no_cache,
        } => handle_equity_command(
            EquityArgs {
                hand,
                board,
                trials,
                seed,
                time_ms,
                no_cache,
            },
            out,
            err,
        ),
        Commands::Preflop {
            trials,
            output,
            seed,
        } => handle_preflop_command(trials, output, seed, out, err),
        Commands::Turn {
            hand,
            board,
            pot,
            side_pot,
            committed,
            time_ms,
            policy,
            log,
        } => handle_turn_command(
            TurnArgs {
                hand,
                board,
                pot,
                side_pot,
                committed,
                time_ms,
                policy,
                log,
            },
            out,
            err,
        ),
        Commands::Blinds {
            players,
            hands,
            hands_per_level,
            schedule,
            eliminate,
        } => handle_blinds_command(
            BlindsArgs {
                players,
                hands,
                hands_per_level,
                schedule,
                eliminate,
            },
            out,
            err,
        ),
        Commands::Round {
            players,
            actions,
            limit,
            bet_size,
            pot,
        } => handle_round_command(
            RoundArgs {
                players,
                actions,
                limit,
                bet_size,
                pot,
            },
            out,
            err,
        ),
        Commands::Bench => handle_bench_command(out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        // Configuration failures were already reported by the handler.
        Err(CliError::Config(_)) => exit_code::ERROR,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
