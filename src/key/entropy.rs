// src/key/entropy.rs
//! Secure entropy sources used for key generation
//!
//! Sources report how many bytes they produced instead of padding a short
//! result; the `KeyManager` decides that anything short is fatal.

use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::config::{EntropySettings, EntropySourceKind};
use crate::error::{CoreError, Result};

pub trait EntropySource: Send + Sync + fmt::Debug {
    /// Fill `dest` with secure random bytes, returning how many were produced
    fn fill(&self, dest: &mut [u8]) -> Result<usize>;
}

/// Operating-system CSPRNG (`getrandom` and friends)
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<usize> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| CoreError::EntropySourceUnavailable(e.to_string()))?;
        Ok(dest.len())
    }
}

/// Character device such as `/dev/urandom`, opened per call
#[derive(Debug, Clone)]
pub struct DeviceEntropy {
    path: PathBuf,
}

impl DeviceEntropy {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntropySource for DeviceEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<usize> {
        let unavailable =
            |e: std::io::Error| CoreError::EntropySourceUnavailable(format!("{}: {e}", self.path.display()));

        let mut device = File::open(&self.path).map_err(unavailable)?;
        super::read_up_to(&mut device, dest).map_err(unavailable)
    }
}

/// Build the source selected in the config
pub fn from_settings(settings: &EntropySettings) -> Arc<dyn EntropySource> {
    match settings.source {
        EntropySourceKind::Os => Arc::new(OsEntropy),
        EntropySourceKind::Device => Arc::new(DeviceEntropy::new(&settings.device_path)),
    }
}
