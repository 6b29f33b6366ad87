//! Solana CLI configuration loading.
//!
//! Every binary reads the operator's existing Solana CLI config
//! (`~/.config/solana/cli/config.yml`) rather than carrying its own
//! endpoint/keypair settings.  The `SOLANA_CONFIG` environment variable
//! overrides the path.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable overriding the config file path.
pub const CONFIG_PATH_ENV: &str = "SOLANA_CONFIG";

/// The subset of the Solana CLI config this toolkit needs.
///
/// Unknown fields (`websocket_url`, `commitment`, `address_labels`, ...)
/// are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SolanaConfig {
    /// RPC endpoint URL, e.g. `https://api.devnet.solana.com`.
    pub json_rpc_url: String,
    /// Path to the JSON keypair file holding the signing identity.
    pub keypair_path: String,
}

/// Errors loading or parsing the Solana CLI config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The home directory could not be determined and no override was set.
    #[error("Could not determine home directory; set {CONFIG_PATH_ENV} to your Solana CLI config path")]
    NoHomeDir,

    /// The config file could not be read.
    #[error("Failed to read Solana config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML or is missing required fields.
    #[error("Failed to parse Solana config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl SolanaConfig {
    /// Resolve the config path: `SOLANA_CONFIG` if set, otherwise
    /// `~/.config/solana/cli/config.yml`.
    pub fn resolve_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::home_dir()
            .map(|home| home.join(".config/solana/cli/config.yml"))
            .ok_or(ConfigError::NoHomeDir)
    }

    /// Load the config from the resolved default location.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::resolve_path()?;
        Self::load_from(&path)
    }

    /// Load the config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
