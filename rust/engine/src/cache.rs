//! Precomputed preflop equity, keyed by unordered starting hand.
//!
//! Stored on disk as a JSON object mapping the canonical hand string (high
//! card first, e.g. `"AsAh"`) to an equity in `[0, 1]`.

use std::collections::{BTreeMap, HashMap};
use std::fs::{self, create_dir_all};
use std::path::Path;

use tracing::{info, warn};

use crate::cards::Hand;
use crate::errors::CacheError;

#[derive(Debug, Clone, Default)]
pub struct EquityCache {
    table: HashMap<Hand, f64>,
}

impl EquityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, hand: &Hand) -> Option<f64> {
        self.table.get(hand).copied()
    }

    pub fn insert(&mut self, hand: Hand, equity: f64) {
        self.table.insert(hand, equity);
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CacheError> {
        let text = fs::read_to_string(path)?;
        let raw: BTreeMap<String, f64> = serde_json::from_str(&text)?;
        let mut table = HashMap::with_capacity(raw.len());
        for (key, equity) in raw {
            let hand: Hand = key.parse().map_err(|e| CacheError::InvalidEntry {
                key: key.clone(),
                reason: format!("{e}"),
            })?;
            if !(0.0..=1.0).contains(&equity) {
                return Err(CacheError::InvalidEntry {
                    key,
                    reason: format!("equity {equity} outside [0, 1]"),
                });
            }
            table.insert(hand, equity);
        }
        Ok(Self { table })
    }

    /// Like [`EquityCache::load`], but a missing or unreadable file only logs
    /// a warning and yields an empty cache.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(cache) => {
                info!(path = %path.display(), entries = cache.len(), "loaded preflop equity cache");
                cache
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "preflop equity cache unavailable, simulating instead");
                Self::new()
            }
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CacheError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let raw: BTreeMap<String, f64> = self
            .table
            .iter()
            .map(|(hand, &equity)| (hand.to_string(), equity))
            .collect();
        fs::write(path, serde_json::to_string_pretty(&raw)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_keeps_unordered_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preflop.json");

        let mut cache = EquityCache::new();
        cache.insert("Ah Kd".parse().unwrap(), 0.65);
        cache.save(&path).unwrap();

        let loaded = EquityCache::load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get(&"Kd Ah".parse().unwrap()), Some(0.65));
    }

    #[test]
    fn missing_file_yields_empty_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = EquityCache::load_or_empty(dir.path().join("absent.json"));
        assert!(cache.is_empty());
    }

    #[test]
    fn rejects_out_of_range_equity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"AsAh": 85.0}"#).unwrap();
        assert!(matches!(
            EquityCache::load(&path),
            Err(CacheError::InvalidEntry { .. })
        ));
        assert!(EquityCache::load_or_empty(&path).is_empty());
    }
}
