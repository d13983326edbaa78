//! Layered settings: built-in defaults, then a TOML file named by
//! `HOLDEM_CONFIG`, then `HOLDEM_*` environment variables, then flags.
//! Every value remembers which layer set it.

use holdem_ai::available_ais;
use holdem_engine::rules::Blinds;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "HOLDEM_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub seed: Option<u64>,
    pub bluff_max: f64,
    pub ai: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_stack: 1000,
            small_blind: 5,
            big_blind: 10,
            seed: None,
            bluff_max: 0.08,
            ai: "rule-based".into(),
        }
    }
}

impl Config {
    pub fn blinds(&self) -> Blinds {
        Blinds {
            small: self.small_blind,
            big: self.big_blind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub seed: ValueSource,
    pub bluff_max: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            seed: ValueSource::Default,
            bluff_max: ValueSource::Default,
            ai: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Applies command-line flags on top of the file and environment layers.
    pub fn with_flags(mut self, seed: Option<u64>, stack: Option<u32>) -> Result<Self, ConfigError> {
        if let Some(v) = seed {
            self.config.seed = Some(v);
            self.sources.seed = ValueSource::Cli;
        }
        if let Some(v) = stack {
            self.config.starting_stack = v;
            self.sources.starting_stack = ValueSource::Cli;
        }
        validate(&self.config)?;
        Ok(self)
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

impl std::error::Error for ConfigError {}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.bluff_max {
            cfg.bluff_max = v;
            sources.bluff_max = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Some(v) = env_parsed("HOLDEM_STARTING_STACK")? {
        cfg.starting_stack = v;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(v) = env_parsed("HOLDEM_SMALL_BLIND")? {
        cfg.small_blind = v;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(v) = env_parsed("HOLDEM_BIG_BLIND")? {
        cfg.big_blind = v;
        sources.big_blind = ValueSource::Env;
    }
    if let Some(v) = env_parsed("HOLDEM_SEED")? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_parsed("HOLDEM_BLUFF_MAX")? {
        cfg.bluff_max = v;
        sources.bluff_max = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var("HOLDEM_AI")
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// Unset or empty variables are skipped; anything else must parse.
fn env_parsed<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) if !raw.is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {:?}", key, raw))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    bluff_max: Option<f64>,
    #[serde(default)]
    ai: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    cfg.blinds()
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))?;
    if cfg.bluff_max.is_nan() || cfg.bluff_max <= 0.0 || cfg.bluff_max > 1.0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: bluff_max must be within (0, 1]".into(),
        ));
    }
    if !available_ais().contains(&cfg.ai.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai {:?} (available: {})",
            cfg.ai,
            available_ais().join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const VARS: &[&str] = &[
        CONFIG_ENV,
        "HOLDEM_STARTING_STACK",
        "HOLDEM_SMALL_BLIND",
        "HOLDEM_BIG_BLIND",
        "HOLDEM_SEED",
        "HOLDEM_BLUFF_MAX",
        "HOLDEM_AI",
    ];

    fn clear_env() {
        for v in VARS {
            unsafe { std::env::remove_var(v) };
        }
    }

    fn set(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) };
    }

    #[test]
    #[serial]
    fn defaults_without_overrides() {
        clear_env();
        let r = load_with_sources().unwrap();
        assert_eq!(r.config, Config::default());
        assert_eq!(r.sources, ConfigSources::default());
    }

    #[test]
    #[serial]
    fn env_beats_file_beats_default() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "starting_stack = 500\nseed = 3\nsmall_blind = 10\nbig_blind = 20").unwrap();
        set(CONFIG_ENV, file.path().to_str().unwrap());
        set("HOLDEM_SEED", "99");

        let r = load_with_sources().unwrap();
        clear_env();

        assert_eq!(r.config.starting_stack, 500);
        assert_eq!(r.sources.starting_stack, ValueSource::File);
        assert_eq!(r.config.seed, Some(99));
        assert_eq!(r.sources.seed, ValueSource::Env);
        assert_eq!(r.config.big_blind, 20);
        assert_eq!(r.sources.bluff_max, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn flags_beat_env() {
        clear_env();
        set("HOLDEM_STARTING_STACK", "700");
        let r = load_with_sources().unwrap().with_flags(Some(1), Some(300)).unwrap();
        clear_env();

        assert_eq!(r.config.starting_stack, 300);
        assert_eq!(r.sources.starting_stack, ValueSource::Cli);
        assert_eq!(r.sources.seed, ValueSource::Cli);
    }

    #[test]
    #[serial]
    fn bad_values_are_rejected() {
        for (key, value) in [
            ("HOLDEM_SEED", "abc"),
            ("HOLDEM_SMALL_BLIND", "50"),
            ("HOLDEM_BLUFF_MAX", "0"),
            ("HOLDEM_AI", "oracle"),
            ("HOLDEM_STARTING_STACK", "0"),
        ] {
            clear_env();
            set(key, value);
            let r = load_with_sources();
            clear_env();
            assert!(matches!(r, Err(ConfigError::Invalid(_))), "{key}={value}");
        }
    }

    #[test]
    #[serial]
    fn malformed_file_is_a_parse_error() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "starting_stack = \"lots\"").unwrap();
        set(CONFIG_ENV, file.path().to_str().unwrap());
        let r = load_with_sources();
        clear_env();
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }

    #[test]
    #[serial]
    fn missing_file_is_an_io_error() {
        clear_env();
        set(CONFIG_ENV, "/nonexistent/holdem.toml");
        let r = load();
        clear_env();
        assert!(matches!(r, Err(ConfigError::Io(_))));
    }
}
