//! Small helpers for consistent terminal messages.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Single-line progress report, e.g. `precomputing 100/1326`.
pub fn write_progress(err: &mut dyn Write, label: &str, done: usize, total: usize) -> std::io::Result<()> {
    writeln!(err, "{} {}/{}", label, done, total)
}
