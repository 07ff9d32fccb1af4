// src/error.rs
//! Public error type for the entire crate

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::cipher::CipherStage;
use crate::enums::KeyKind;
use crate::key::KeyState;

/// Coarse error category, one per family of failures callers react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidArgument,
    AllocationFailure,
    IoFailure,
    CodecFailure,
    CryptoOperationFailure,
}

#[derive(Error, Debug)]
pub enum CoreError {
    // ── invalid argument ─────────────────────────────────────────
    #[error("Unrecognized key kind: {0}")]
    InvalidKind(String),

    #[error("Unrecognized algorithm: {0}")]
    InvalidAlgorithm(String),

    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Ciphertext length {0} is not a non-zero multiple of the block size")]
    InvalidCiphertextLength(usize),

    #[error("Key kind mismatch: expected {expected}, got {actual}")]
    KindMismatch { expected: KeyKind, actual: KeyKind },

    #[error("Key is not usable in state {0:?}")]
    KeyNotLive(KeyState),

    #[error("Message of {len} bytes exceeds the {max} byte capacity of this key")]
    MessageTooLong { len: usize, max: usize },

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    // ── allocation ───────────────────────────────────────────────
    #[error("Could not allocate {0} bytes for key material")]
    AllocationFailure(usize),

    // ── I/O ──────────────────────────────────────────────────────
    #[error("Entropy source unavailable: {0}")]
    EntropySourceUnavailable(String),

    #[error("Entropy source produced {actual} of {expected} bytes")]
    ShortRead { expected: usize, actual: usize },

    #[error("Key file not accessible: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Access denied: {}", .path.display())]
    AccessDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Key file {} holds {actual} bytes, expected {expected}", .path.display())]
    TruncatedRead {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    #[error("Key file {} is longer than the expected {expected} bytes", .path.display())]
    OversizedKeyFile { path: PathBuf, expected: usize },

    #[error("Write failed: {}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Incomplete write to {}: {written} of {expected} bytes", .path.display())]
    IncompleteWrite {
        path: PathBuf,
        expected: usize,
        written: usize,
    },

    // ── codec ────────────────────────────────────────────────────
    #[error("Key decode failed: {0}")]
    KeyDecodeFailure(String),

    #[error("Key encode failed: {0}")]
    KeyEncodeFailure(String),

    // ── crypto primitive ─────────────────────────────────────────
    #[error("Crypto operation failed during {stage:?}: {reason}")]
    CryptoOperation { stage: CipherStage, reason: String },

    #[error("Signing failed: {0}")]
    SigningFailure(String),

    #[error("Key generation failed: {0}")]
    KeyGenerationFailure(String),
}

impl CoreError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CoreError::InvalidKind(_)
            | CoreError::InvalidAlgorithm(_)
            | CoreError::InvalidKeyLength { .. }
            | CoreError::InvalidCiphertextLength(_)
            | CoreError::KindMismatch { .. }
            | CoreError::KeyNotLive(_)
            | CoreError::MessageTooLong { .. }
            | CoreError::Config(_) => ErrorCategory::InvalidArgument,
            CoreError::AllocationFailure(_) => ErrorCategory::AllocationFailure,
            CoreError::EntropySourceUnavailable(_)
            | CoreError::ShortRead { .. }
            | CoreError::NotFound { .. }
            | CoreError::AccessDenied { .. }
            | CoreError::TruncatedRead { .. }
            | CoreError::OversizedKeyFile { .. }
            | CoreError::WriteFailure { .. }
            | CoreError::IncompleteWrite { .. } => ErrorCategory::IoFailure,
            CoreError::KeyDecodeFailure(_) | CoreError::KeyEncodeFailure(_) => {
                ErrorCategory::CodecFailure
            }
            CoreError::CryptoOperation { .. }
            | CoreError::SigningFailure(_)
            | CoreError::KeyGenerationFailure(_) => ErrorCategory::CryptoOperationFailure,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
