// src/key/material.rs
//! Owned key buffer with guaranteed zeroization
//!
//! This struct intentionally does NOT implement `Clone`: a key has exactly
//! one owner, and borrowed views (`expose_secret`) cannot outlive it.

use std::fmt;

use zeroize::Zeroize;

use crate::consts::FINGERPRINT_HEX_LEN;
use crate::enums::KeyKind;
use crate::error::{CoreError, Result};

/// Lifecycle state of a `KeyMaterial`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    /// Zero-filled buffer that has never held key bytes
    Allocated,
    /// Holds generated, loaded or imported key bytes
    Live,
    /// Securely erased; only a full replacement or drop is allowed
    Erased,
}

pub struct KeyMaterial {
    kind: KeyKind,
    bytes: Vec<u8>,
    state: KeyState,
}

impl KeyMaterial {
    /// Zero-filled buffer of exactly `len` bytes; allocation failure is reported, not aborted on
    pub(crate) fn zeroed(kind: KeyKind, len: usize) -> Result<Self> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len)
            .map_err(|_| CoreError::AllocationFailure(len))?;
        bytes.resize(len, 0);
        Ok(Self {
            kind,
            bytes,
            state: KeyState::Allocated,
        })
    }

    /// Wrap existing key bytes (PEM encodings, test vectors) as a live key
    pub fn from_bytes(kind: KeyKind, bytes: Vec<u8>) -> Self {
        Self {
            kind,
            bytes,
            state: KeyState::Live,
        }
    }

    #[inline]
    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn state(&self) -> KeyState {
        self.state
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.state == KeyState::Live
    }

    /// Borrow the raw key bytes.
    ///
    /// The borrow is tied to `self`; copy out only into buffers that are
    /// themselves zeroized.
    #[inline]
    pub fn expose_secret(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub(crate) fn expose_secret_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub(crate) fn mark_live(&mut self) {
        self.state = KeyState::Live;
    }

    /// True when every byte of the buffer is zero
    pub fn is_zeroed(&self) -> bool {
        self.bytes.iter().fold(0u8, |acc, b| acc | b) == 0
    }

    /// Overwrite the whole buffer with zeros, keeping its length
    pub fn erase(&mut self) {
        self.bytes.as_mut_slice().zeroize();
        self.state = KeyState::Erased;
    }

    pub(crate) fn ensure_live(&self) -> Result<()> {
        match self.state {
            KeyState::Live => Ok(()),
            other => Err(CoreError::KeyNotLive(other)),
        }
    }

    pub(crate) fn ensure_kind(&self, expected: KeyKind) -> Result<()> {
        if self.kind == expected {
            Ok(())
        } else {
            Err(CoreError::KindMismatch {
                expected,
                actual: self.kind,
            })
        }
    }

    /// Short BLAKE3-based identifier, safe to log
    pub fn fingerprint(&self) -> String {
        let mut hex = blake3::hash(&self.bytes).to_hex().to_string();
        hex.truncate(FINGERPRINT_HEX_LEN);
        hex
    }
}

impl Drop for KeyMaterial {
    fn drop(&mut self) {
        // Also clears spare capacity left behind by earlier reallocations
        self.bytes.zeroize();
    }
}

// Never print key bytes
impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("kind", &self.kind)
            .field("len", &self.bytes.len())
            .field("state", &self.state)
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// PEM-encoded RSA key pair produced by `KeyManager::generate_key_pair`
#[derive(Debug)]
pub struct AsymmetricKeyPair {
    /// PKCS#8 `PRIVATE KEY` PEM
    pub private: KeyMaterial,
    /// SPKI `PUBLIC KEY` PEM
    pub public: KeyMaterial,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_key_starts_allocated_and_zero() {
        let key = KeyMaterial::zeroed(KeyKind::SymmetricAes, 32).unwrap();
        assert_eq!(key.len(), 32);
        assert_eq!(key.state(), KeyState::Allocated);
        assert!(key.is_zeroed());
        assert!(matches!(key.ensure_live(), Err(CoreError::KeyNotLive(KeyState::Allocated))));
    }

    #[test]
    fn test_erase_keeps_length_and_blocks_use() {
        let mut key = KeyMaterial::from_bytes(KeyKind::SymmetricAes, vec![0xAB; 32]);
        assert!(key.ensure_live().is_ok());
        key.erase();
        assert_eq!(key.len(), 32);
        assert!(key.is_zeroed());
        assert!(matches!(key.ensure_live(), Err(CoreError::KeyNotLive(KeyState::Erased))));
    }

    #[test]
    fn test_absurd_allocation_is_reported() {
        let result = KeyMaterial::zeroed(KeyKind::AsymmetricRsa, usize::MAX);
        assert!(matches!(result, Err(CoreError::AllocationFailure(_))));
    }

    #[test]
    fn test_debug_output_redacts_bytes() {
        let key = KeyMaterial::from_bytes(KeyKind::SymmetricAes, vec![0x42; 32]);
        let rendered = format!("{key:?}");
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains("66"));
    }

    #[test]
    fn test_fingerprint_is_stable_and_short() {
        let a = KeyMaterial::from_bytes(KeyKind::SymmetricAes, vec![1; 32]);
        let b = KeyMaterial::from_bytes(KeyKind::SymmetricAes, vec![1; 32]);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), FINGERPRINT_HEX_LEN);
    }
}
