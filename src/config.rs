//! Runtime configuration from the environment.
//!
//! `main` loads `.env` with `dotenv` first, so any of these can live there:
//! - `VLSM_QUIZ_SEED` - fixed RNG seed for reproducible puzzles
//! - `VLSM_QUIZ_MAX_ATTEMPTS` - regeneration attempts per puzzle
//! - `VLSM_QUIZ_LOG_CONFIG` - path of the log4rs config file

use crate::processing::DEFAULT_MAX_ATTEMPTS;
use std::error::Error;

pub const ENV_SEED: &str = "VLSM_QUIZ_SEED";
pub const ENV_MAX_ATTEMPTS: &str = "VLSM_QUIZ_MAX_ATTEMPTS";
pub const ENV_LOG_CONFIG: &str = "VLSM_QUIZ_LOG_CONFIG";

/// Default log4rs config file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seed for the puzzle RNG; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Regeneration attempts before puzzle generation fails.
    pub max_attempts: usize,
    /// log4rs config file.
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(seed) = get(ENV_SEED) {
            config.seed = Some(
                seed.trim()
                    .parse()
                    .map_err(|e| format!("Invalid {ENV_SEED}={seed}: {e}"))?,
            );
        }
        if let Some(attempts) = get(ENV_MAX_ATTEMPTS) {
            config.max_attempts = attempts
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {ENV_MAX_ATTEMPTS}={attempts}: {e}"))?;
            if config.max_attempts == 0 {
                return Err(format!("{ENV_MAX_ATTEMPTS} must be at least 1").into());
            }
        }
        if let Some(path) = get(ENV_LOG_CONFIG) {
            config.log_config = path;
        }

        log::debug!("Config: {config:?}");
        Ok(config)
    }
}
