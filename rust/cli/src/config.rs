use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub iterations: u32,
    pub fold_threshold: f64,
    pub small_blind: u32,
    pub big_blind: u32,
    pub hands_per_level: u32,
    pub preflop_cache: String,
    pub time_fraction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub iterations: ValueSource,
    pub fold_threshold: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub hands_per_level: ValueSource,
    pub preflop_cache: ValueSource,
    pub time_fraction: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            iterations: ValueSource::Default,
            fold_threshold: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            hands_per_level: ValueSource::Default,
            preflop_cache: ValueSource::Default,
            time_fraction: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            iterations: 2000,
            fold_threshold: 0.3,
            small_blind: 10,
            big_blind: 20,
            hands_per_level: 10,
            preflop_cache: "data/preflop_wins.json".into(),
            time_fraction: 0.8,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `POKEHER_CONFIG`, then individual
/// `POKEHER_*` variables. Empty variables are ignored.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("POKEHER_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.iterations {
            cfg.iterations = v;
            sources.iterations = ValueSource::File;
        }
        if let Some(v) = f.fold_threshold {
            cfg.fold_threshold = v;
            sources.fold_threshold = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.hands_per_level {
            cfg.hands_per_level = v;
            sources.hands_per_level = ValueSource::File;
        }
        if let Some(v) = f.preflop_cache {
            cfg.preflop_cache = v;
            sources.preflop_cache = ValueSource::File;
        }
        if let Some(v) = f.time_fraction {
            cfg.time_fraction = v;
            sources.time_fraction = ValueSource::File;
        }
    }

    if let Some(seed) = env_value("POKEHER_SEED") {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(iterations) = env_value("POKEHER_ITERATIONS") {
        cfg.iterations = iterations
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid iterations".into()))?;
        sources.iterations = ValueSource::Env;
    }
    if let Some(threshold) = env_value("POKEHER_FOLD_THRESHOLD") {
        cfg.fold_threshold = threshold
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid fold threshold".into()))?;
        sources.fold_threshold = ValueSource::Env;
    }
    if let Some(per_level) = env_value("POKEHER_HANDS_PER_LEVEL") {
        cfg.hands_per_level = per_level
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid hands per level".into()))?;
        sources.hands_per_level = ValueSource::Env;
    }
    if let Some(path) = env_value("POKEHER_PREFLOP_CACHE") {
        cfg.preflop_cache = path;
        sources.preflop_cache = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    iterations: Option<u32>,
    #[serde(default)]
    fold_threshold: Option<f64>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    hands_per_level: Option<u32>,
    #[serde(default)]
    preflop_cache: Option<String>,
    #[serde(default)]
    time_fraction: Option<f64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.iterations == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: iterations must be >0".into(),
        ));
    }
    if !(0.0..=1.0).contains(&cfg.fold_threshold) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: fold_threshold must be within [0, 1]".into(),
        ));
    }
    if cfg.hands_per_level == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: hands_per_level must be >=1".into(),
        ));
    }
    if cfg.big_blind <= cfg.small_blind {
        return Err(ConfigError::Invalid(
            "Invalid configuration: big_blind must exceed small_blind".into(),
        ));
    }
    if !(cfg.time_fraction > 0.0 && cfg.time_fraction <= 1.0) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: time_fraction must be within (0, 1]".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn rejects_inverted_blinds() {
        let cfg = Config {
            small_blind: 20,
            big_blind: 20,
            ..Config::default()
        };
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_threshold_outside_unit_range() {
        let cfg = Config {
            fold_threshold: 1.5,
            ..Config::default()
        };
        assert!(validate(&cfg).is_err());
    }
}
