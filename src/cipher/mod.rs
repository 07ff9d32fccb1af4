// src/cipher/mod.rs
//! Cipher Engine — symmetric and asymmetric bulk encryption
//!
//! Every call starts idle and walks `KeyValidated → Transformed → Finalized`.
//! A failure at any step returns an error and drops whatever the call had
//! produced so far; no partial output reaches the caller.

pub mod asymmetric;
pub mod symmetric;

use std::fmt;

use tracing::{debug, warn};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::enums::EncryptionAlgorithm;
use crate::error::Result;
use crate::key::KeyMaterial;

/// Step at which a cipher call failed, reported in `CoreError::CryptoOperation`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherStage {
    KeyValidated,
    Transformed,
    Finalized,
}

/// Output of one encrypt/decrypt call; zeroized on drop since it may hold plaintext
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct CipherOutput {
    bytes: Vec<u8>,
}

impl CipherOutput {
    fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Hand the bytes over, still wrapped so they are wiped when released
    pub fn into_zeroizing(mut self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(std::mem::take(&mut self.bytes))
    }
}

impl AsRef<[u8]> for CipherOutput {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for CipherOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherOutput")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

pub fn encrypt(data: &[u8], key: &[u8], algorithm: EncryptionAlgorithm) -> Result<CipherOutput> {
    let result = match algorithm {
        EncryptionAlgorithm::Aes256Ecb => symmetric::encrypt(data, key),
        EncryptionAlgorithm::RsaPkcs1v15 => asymmetric::encrypt(data, key),
    };
    match result {
        Ok(ciphertext) => {
            debug!(%algorithm, input = data.len(), output = ciphertext.len(), "encrypted");
            Ok(CipherOutput::new(ciphertext))
        }
        Err(err) => {
            warn!(%algorithm, error = %err, "encryption failed");
            Err(err)
        }
    }
}

pub fn decrypt(data: &[u8], key: &[u8], algorithm: EncryptionAlgorithm) -> Result<CipherOutput> {
    let result = match algorithm {
        EncryptionAlgorithm::Aes256Ecb => symmetric::decrypt(data, key),
        EncryptionAlgorithm::RsaPkcs1v15 => asymmetric::decrypt(data, key),
    };
    match result {
        Ok(mut plaintext) => {
            debug!(%algorithm, input = data.len(), output = plaintext.len(), "decrypted");
            Ok(CipherOutput::new(std::mem::take(&mut *plaintext)))
        }
        Err(err) => {
            warn!(%algorithm, error = %err, "decryption failed");
            Err(err)
        }
    }
}

/// `encrypt` with a managed key: the key must be live and of the algorithm's kind
pub fn encrypt_with_key(
    data: &[u8],
    key: &KeyMaterial,
    algorithm: EncryptionAlgorithm,
) -> Result<CipherOutput> {
    key.ensure_live()?;
    key.ensure_kind(algorithm.key_kind())?;
    encrypt(data, key.expose_secret(), algorithm)
}

/// `decrypt` with a managed key: the key must be live and of the algorithm's kind
pub fn decrypt_with_key(
    data: &[u8],
    key: &KeyMaterial,
    algorithm: EncryptionAlgorithm,
) -> Result<CipherOutput> {
    key.ensure_live()?;
    key.ensure_kind(algorithm.key_kind())?;
    decrypt(data, key.expose_secret(), algorithm)
}
