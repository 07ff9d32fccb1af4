// src/lib.rs
//! hft-security-core — key lifecycle and cryptographic primitives
//!
//! Features:
//! - Key Manager: allocate, generate, load/save raw key files, rotate, erase
//! - Hash Engine: SHA-256 / SHA-512 digest + verify
//! - Cipher Engine: AES-256 (ECB, PKCS#7) and RSA (PKCS#1 v1.5)
//! - Signature Engine: RSA PKCS#1 v1.5 over SHA-256
//! - Every key buffer is zeroized on drop

pub mod aliases;
pub mod cipher;
pub mod config;
pub mod consts;
pub mod enums;
pub mod error;
pub mod hash;
pub mod key;
pub mod key_ops;
pub mod signature;

// Re-export everything users need at the crate root
pub use aliases::SymmetricKey32;
pub use cipher::{CipherOutput, CipherStage};
pub use config::Config;
pub use enums::{EncryptionAlgorithm, HashAlgorithm, KeyKind};
pub use error::{CoreError, ErrorCategory, Result as CoreResult};
pub use hash::DigestResult;
pub use key::{AsymmetricKeyPair, GuardedKey, KeyManager, KeyMaterial, KeyState};
pub use signature::SignatureOutput;
