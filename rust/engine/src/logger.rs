use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::equity::EquitySource;
use crate::player::PlayerAction;

/// One decision the bot made, as written to the turn history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Format: YYYYMMDD-NNNNNN
    pub turn_id: String,
    /// Hole cards, empty when the bot had no hand
    pub hand: Vec<Card>,
    pub board: Vec<Card>,
    pub pot: u32,
    pub to_call: u32,
    /// Estimated win probability in [0, 1]
    pub equity: f64,
    /// Percent, see [`crate::betting::pot_odds`]
    pub pot_odds: f64,
    pub action: PlayerAction,
    #[serde(default)]
    pub source: Option<EquitySource>,
    #[serde(default)]
    pub trials: u64,
    #[serde(default)]
    pub elapsed_ms: u64,
    /// RFC3339, filled in on write when missing
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_turn_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`TurnRecord`]s to a JSONL file.
pub struct TurnLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl TurnLogger {
    /// Opens `path` for appending, creating it and its parent directory.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that numbers turns but writes nowhere.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_turn_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &TurnRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
