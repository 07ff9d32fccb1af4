// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the algorithm and key-kind selectors callers pass
//! into the engines. Every enum is matched exhaustively inside the crate;
//! unknown values can only appear at the conversion boundary (`TryFrom<u8>`,
//! `FromStr`), which is where `InvalidKind` / `InvalidAlgorithm` are raised.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{AES_KEY_SIZE, RSA_KEY_SIZE, SHA256_DIGEST_LEN, SHA512_DIGEST_LEN};
use crate::error::CoreError;

/// Kind of key held by a `KeyMaterial`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyKind {
    SymmetricAes,
    AsymmetricRsa,
}

impl KeyKind {
    /// Buffer size used when no custom length is requested
    pub const fn default_length(self) -> usize {
        match self {
            KeyKind::SymmetricAes => AES_KEY_SIZE,
            KeyKind::AsymmetricRsa => RSA_KEY_SIZE,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            KeyKind::SymmetricAes => "aes",
            KeyKind::AsymmetricRsa => "rsa",
        }
    }
}

impl TryFrom<u8> for KeyKind {
    type Error = CoreError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(KeyKind::SymmetricAes),
            1 => Ok(KeyKind::AsymmetricRsa),
            other => Err(CoreError::InvalidKind(other.to_string())),
        }
    }
}

impl FromStr for KeyKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aes" | "symmetric" | "symmetric-aes" => Ok(KeyKind::SymmetricAes),
            "rsa" | "asymmetric" | "asymmetric-rsa" => Ok(KeyKind::AsymmetricRsa),
            _ => Err(CoreError::InvalidKind(s.to_owned())),
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Output length in bytes
    pub const fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => SHA256_DIGEST_LEN,
            HashAlgorithm::Sha512 => SHA512_DIGEST_LEN,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
        }
    }
}

impl TryFrom<u8> for HashAlgorithm {
    type Error = CoreError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(HashAlgorithm::Sha256),
            1 => Ok(HashAlgorithm::Sha512),
            other => Err(CoreError::InvalidAlgorithm(other.to_string())),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => Err(CoreError::InvalidAlgorithm(s.to_owned())),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported encryption algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EncryptionAlgorithm {
    /// AES-256, ECB mode, PKCS#7 padding
    #[default]
    Aes256Ecb,
    /// RSA, PKCS#1 v1.5 padding, PEM-encoded keys
    RsaPkcs1v15,
}

impl EncryptionAlgorithm {
    /// Key kind the algorithm consumes
    pub const fn key_kind(self) -> KeyKind {
        match self {
            EncryptionAlgorithm::Aes256Ecb => KeyKind::SymmetricAes,
            EncryptionAlgorithm::RsaPkcs1v15 => KeyKind::AsymmetricRsa,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            EncryptionAlgorithm::Aes256Ecb => "aes",
            EncryptionAlgorithm::RsaPkcs1v15 => "rsa",
        }
    }
}

impl TryFrom<u8> for EncryptionAlgorithm {
    type Error = CoreError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(EncryptionAlgorithm::Aes256Ecb),
            1 => Ok(EncryptionAlgorithm::RsaPkcs1v15),
            other => Err(CoreError::InvalidAlgorithm(other.to_string())),
        }
    }
}

impl FromStr for EncryptionAlgorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aes" | "aes256" | "aes-256-ecb" => Ok(EncryptionAlgorithm::Aes256Ecb),
            "rsa" | "rsa-pkcs1v15" => Ok(EncryptionAlgorithm::RsaPkcs1v15),
            _ => Err(CoreError::InvalidAlgorithm(s.to_owned())),
        }
    }
}

impl fmt::Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
