// src/config/mod.rs
//! Configuration system for hft-security-core
//!
//! TOML tunables for entropy and RSA key generation, handed explicitly to
//! `KeyManager::from_config`. The crate never reads the environment.

pub use app::{AsymmetricSettings, Config, EntropySettings, EntropySourceKind};

mod app;
mod defaults;
