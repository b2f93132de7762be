//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "pokeher", version, about = "Hold'em decision engine tools")]
pub struct PokeherCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Best five cards out of 5 to 7
    Eval {
        #[arg(long)]
        cards: String,
    },
    /// Monte Carlo equity of a hand against one random opponent
    Equity {
        #[arg(long)]
        hand: String,
        #[arg(long)]
        board: Option<String>,
        #[arg(long)]
        trials: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Stop early after this many milliseconds
        #[arg(long)]
        time_ms: Option<u64>,
        /// Ignore the preflop cache
        #[arg(long)]
        no_cache: bool,
    },
    /// Build the preflop equity cache for all 1326 starting hands
    Preflop {
        #[arg(long)]
        trials: u32,
        #[arg(long)]
        output: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run the bot's decision for a single turn
    Turn {
        #[arg(long)]
        hand: Option<String>,
        #[arg(long)]
        board: Option<String>,
        #[arg(long, default_value_t = 0)]
        pot: u32,
        #[arg(long, default_value_t = 0)]
        side_pot: u32,
        #[arg(long, default_value_t = 0)]
        committed: u32,
        #[arg(long, default_value_t = 1000)]
        time_ms: u64,
        #[arg(long, default_value = "threshold")]
        policy: String,
        /// Append the decision to this JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Show blind assignments over a number of hands
    Blinds {
        #[arg(long)]
        players: String,
        #[arg(long)]
        hands: u32,
        #[arg(long)]
        hands_per_level: Option<u32>,
        #[arg(long, value_enum, default_value_t = Schedule::Fixed)]
        schedule: Schedule,
        /// HAND:PLAYER pairs, e.g. "3:C"
        #[arg(long)]
        eliminate: Option<String>,
    },
    /// Replay a scripted betting round
    Round {
        #[arg(long)]
        players: String,
        /// PLAYER:AMOUNT or PLAYER:fold steps, e.g. "C:20,D:fold"
        #[arg(long)]
        actions: String,
        #[arg(long, value_enum, default_value_t = Limit::NoLimit)]
        limit: Limit,
        /// Raise increment for fixed-limit
        #[arg(long)]
        bet_size: Option<u32>,
        /// Chips carried in from earlier streets
        #[arg(long, default_value_t = 0)]
        pot: u32,
    },
    /// Time the evaluator and the simulator
    Bench,
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Schedule {
    Fixed,
    Double,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Limit {
    NoLimit,
    PotLimit,
    FixedLimit,
}

impl Schedule {
    pub fn name(self) -> &'static str {
        match self {
            Schedule::Fixed => "fixed",
            Schedule::Double => "double",
        }
    }
}

impl Limit {
    pub fn name(self) -> &'static str {
        match self {
            Limit::NoLimit => "no-limit",
            Limit::PotLimit => "pot-limit",
            Limit::FixedLimit => "fixed-limit",
        }
    }
}
