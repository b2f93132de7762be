//! Bench command: quick timings for the evaluator and the simulator.
//!
//! Evaluates 200 seven-card draws from a deck seeded with 1, then runs a
//! fixed-seed AKs simulation of 10 000 trials.

use crate::error::CliError;
use pokeher_engine::cards::{Card, Hand};
use pokeher_engine::deck::Deck;
use pokeher_engine::equity::{EquitySimulator, SimulationBudget};
use pokeher_engine::hand::evaluate;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use std::time::Instant;

const EVAL_ITERS: u64 = 200;
const SIM_TRIALS: u32 = 10_000;

pub fn handle_bench_command(out: &mut dyn Write) -> Result<(), CliError> {
    let start = Instant::now();
    let mut cnt = 0u64;
    let mut deck = Deck::new_with_seed(1);
    deck.shuffle();
    while cnt < EVAL_ITERS {
        if deck.remaining() < 7 {
            deck.shuffle();
        }
        let cards: Vec<Card> = (0..7).filter_map(|_| deck.deal_card()).collect();
        // Only the timing matters.
        let _ = evaluate(&cards);
        cnt += 1;
    }
    writeln!(out, "Benchmark: {} iters in {:?}", cnt, start.elapsed())?;

    let hand: Hand = "As Ks"
        .parse()
        .map_err(|e| CliError::Engine(format!("bench hand: {}", e)))?;
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let start = Instant::now();
    let estimate = EquitySimulator::new(hand, &[])?.simulate(SimulationBudget::trials(SIM_TRIALS), &mut rng)?;
    let elapsed = start.elapsed();
    writeln!(
        out,
        "Simulation: {} trials in {:?} ({:.0} trials/s, equity {:.4})",
        estimate.trials(),
        elapsed,
        estimate.trials() as f64 / elapsed.as_secs_f64().max(f64::EPSILON),
        estimate.equity()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_reports_both_timings() {
        let mut out = Vec::new();
        handle_bench_command(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Benchmark: 200 iters"));
        assert!(output.contains("Simulation: 10000 trials"));
    }

    #[test]
    fn test_bench_simulation_is_seeded() {
        let run = || {
            let mut out = Vec::new();
            handle_bench_command(&mut out).unwrap();
            let output = String::from_utf8(out).unwrap();
            output
                .split("equity ")
                .nth(1)
                .map(|s| s.trim().to_string())
                .unwrap()
        };
        assert_eq!(run(), run());
    }
}
