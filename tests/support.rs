// tests/support.rs
//! Test fixtures — shared RSA key pairs and key directories

use std::path::PathBuf;

use hft_security_core::{AsymmetricKeyPair, KeyManager};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// RSA key generation is slow; every test in a binary shares these pairs
#[allow(dead_code)]
pub static RSA_PAIR: Lazy<AsymmetricKeyPair> = Lazy::new(|| {
    KeyManager::new()
        .generate_key_pair(2048)
        .expect("generate RSA key pair")
});

#[allow(dead_code)]
pub static OTHER_RSA_PAIR: Lazy<AsymmetricKeyPair> = Lazy::new(|| {
    KeyManager::new()
        .generate_key_pair(2048)
        .expect("generate second RSA key pair")
});

#[allow(dead_code)]
pub struct KeyDir {
    dir: TempDir,
}

#[allow(dead_code)]
impl KeyDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp key dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
