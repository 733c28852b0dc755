//! # Runtime Configuration
//!
//! With nothing set, the runtime uses the built-in genesis, the demo script
//! and a 3 second pause after every completed transaction.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};
use utxo_ledger::{Amount, GenesisError, GenesisSeed, LedgerConfig};

use crate::script::{demo_script, parse_script, ScriptCommand, ScriptError};

/// Pause after a completed transaction before new selections are accepted.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(3000);

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Genesis(#[from] GenesisError),

    #[error(transparent)]
    Script(#[from] ScriptError),
}

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Engine policy.
    pub ledger: LedgerConfig,
    /// JSON genesis seed. Built-in seed when absent.
    pub genesis_path: Option<PathBuf>,
    /// JSON command script. Demo script when absent.
    pub script_path: Option<PathBuf>,
    /// Presentation cooldown after each completed transaction.
    pub cooldown: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig::default(),
            genesis_path: None,
            script_path: None,
            cooldown: DEFAULT_COOLDOWN,
        }
    }
}

impl RuntimeConfig {
    /// Genesis seed from `genesis_path`, or the built-in one.
    pub fn load_genesis(&self) -> Result<GenesisSeed, ConfigError> {
        match &self.genesis_path {
            Some(path) => {
                let seed = GenesisSeed::from_json(&read(path)?)?;
                info!(path = %path.display(), "Loaded genesis seed");
                Ok(seed)
            }
            None => Ok(GenesisSeed::default()),
        }
    }

    /// Commands from `script_path`, or the demo script.
    pub fn load_script(&self) -> Result<Vec<ScriptCommand>, ConfigError> {
        match &self.script_path {
            Some(path) => {
                let script = parse_script(&read(path)?)?;
                info!(path = %path.display(), commands = script.len(), "Loaded script");
                Ok(script)
            }
            None => Ok(demo_script()),
        }
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load configuration from the environment.
///
/// - `LEDGER_GENESIS`: path to a genesis JSON file
/// - `LEDGER_SCRIPT`: path to a command script JSON file
/// - `LEDGER_COOLDOWN_MS`: cooldown in milliseconds (default: 3000)
/// - `LEDGER_MIN_CHANGE`: minimum change, decimal (default: 0.001)
pub fn load_config() -> RuntimeConfig {
    load_config_from(|key| std::env::var(key).ok())
}

/// Same as [`load_config`] with an injectable variable lookup.
pub fn load_config_from(lookup: impl Fn(&str) -> Option<String>) -> RuntimeConfig {
    let mut config = RuntimeConfig::default();

    if let Some(path) = lookup("LEDGER_GENESIS") {
        config.genesis_path = Some(PathBuf::from(path));
    }
    if let Some(path) = lookup("LEDGER_SCRIPT") {
        config.script_path = Some(PathBuf::from(path));
    }

    if let Some(ms) = lookup("LEDGER_COOLDOWN_MS") {
        match ms.parse::<u64>() {
            Ok(ms) => config.cooldown = Duration::from_millis(ms),
            Err(_) => warn!(value = %ms, "LEDGER_COOLDOWN_MS must be a whole number of milliseconds"),
        }
    }

    if let Some(text) = lookup("LEDGER_MIN_CHANGE") {
        match text.parse::<Amount>() {
            Ok(minimum) if !minimum.is_zero() => config.ledger.minimum_change = minimum,
            Ok(_) => warn!("LEDGER_MIN_CHANGE must be greater than 0"),
            Err(e) => warn!(value = %text, error = %e, "Ignoring invalid LEDGER_MIN_CHANGE"),
        }
    }

    config
}
