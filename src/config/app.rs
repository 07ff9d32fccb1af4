// src/config/app.rs
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::defaults::*;
use crate::error::{CoreError, Result};

/// Tunables for a `KeyManager`.
///
/// Key lengths and key-file permissions are fixed; unknown keys (including a
/// stale `[keys]` section) are rejected instead of silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub entropy: EntropySettings,
    pub asymmetric: AsymmetricSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntropySourceKind {
    Os,
    Device,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntropySettings {
    pub source: EntropySourceKind,
    pub device_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AsymmetricSettings {
    /// Modulus size for `KeyManager::generate_default_key_pair`
    pub rsa_bits: usize,
}

impl Default for EntropySettings {
    fn default() -> Self {
        default_entropy()
    }
}

impl Default for AsymmetricSettings {
    fn default() -> Self {
        default_asymmetric()
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
