//! Preflop command: precompute the equity of every starting hand.
//!
//! Writes the JSON cache the `equity` and `turn` commands read. Progress
//! goes to stderr every 100 hands.

use super::load_config;
use crate::error::CliError;
use crate::ui;
use pokeher_engine::equity::precompute_preflop;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

const PROGRESS_EVERY: usize = 100;

pub fn handle_preflop_command(
    trials: u32,
    output: Option<String>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = load_config(err)?;
    if trials == 0 {
        return Err(CliError::InvalidInput("trials must be > 0".into()));
    }
    let path = output.unwrap_or(cfg.preflop_cache);
    let seed = seed.or(cfg.seed).unwrap_or(0);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    let start = Instant::now();
    let cache = precompute_preflop(trials, &mut rng, |done, total| {
        if done % PROGRESS_EVERY == 0 || done == total {
            if let Err(e) = ui::write_progress(err, "precomputing", done, total) {
                debug!(error = %e, done, "progress line not written");
            }
        }
    })?;
    cache.save(&path)?;
    info!(path = %path, hands = cache.len(), trials, "preflop cache written");
    writeln!(
        out,
        "Saved {} hands ({} trials each) to {} in {:?}",
        cache.len(),
        trials,
        path,
        start.elapsed()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn unwritable_progress_does_not_abort() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        let mut out = Vec::new();
        let result = handle_preflop_command(
            1,
            Some(path.to_string_lossy().into_owned()),
            Some(2),
            &mut out,
            &mut BrokenPipe,
        );
        assert!(result.is_ok());
        assert!(path.exists());
    }
}
