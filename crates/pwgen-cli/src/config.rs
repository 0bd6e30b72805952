use std::io;
use std::path::{Path, PathBuf};

use pwgen_core::{POLICY_VERSION, Policy};
use pwgen_generate::GenerateOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("toml encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
    #[error("unsupported policy_version {found} (expected {})", POLICY_VERSION)]
    UnsupportedVersion { found: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Output preferences; unset values fall back to the terminal defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// Contents of a `--config` file.
///
/// ```toml
/// policy_version = "0.1"
/// max_attempts = 10000
/// secure = false
///
/// [policy]
/// length = 12
/// require_symbol = true
///
/// [output]
/// columns = false
/// count = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PwgenConfig {
    pub policy_version: String,
    pub max_attempts: u32,
    /// Always use the flat random generator.
    pub secure: bool,
    pub policy: Policy,
    pub output: OutputConfig,
}

impl Default for PwgenConfig {
    fn default() -> Self {
        Self {
            policy_version: POLICY_VERSION.to_string(),
            max_attempts: GenerateOptions::default().max_attempts,
            secure: false,
            policy: Policy::default(),
            output: OutputConfig::default(),
        }
    }
}

impl PwgenConfig {
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        if config.policy_version != POLICY_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: config.policy_version,
            });
        }
        Ok(config)
    }

    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
