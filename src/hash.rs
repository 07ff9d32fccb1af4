// src/hash.rs
//! Hash Engine — SHA-256 / SHA-512 digests and integrity verification
//!
//! Pure functions; digests are not secret and carry no zeroization.

use sha2::{Digest, Sha256, Sha512};

use crate::enums::HashAlgorithm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestResult {
    algorithm: HashAlgorithm,
    bytes: Vec<u8>,
}

impl DigestResult {
    #[inline]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Always `algorithm().output_len()`
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lowercase hex rendering
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl AsRef<[u8]> for DigestResult {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

pub fn digest(data: &[u8], algorithm: HashAlgorithm) -> DigestResult {
    let bytes = match algorithm {
        HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
    };
    DigestResult { algorithm, bytes }
}

pub fn digest_hex(data: &[u8], algorithm: HashAlgorithm) -> String {
    digest(data, algorithm).to_hex()
}

/// Recompute and compare. Any mismatch, including a length mismatch, is `false`.
pub fn verify(data: &[u8], expected: &[u8], algorithm: HashAlgorithm) -> bool {
    constant_time_eq(digest(data, algorithm).as_bytes(), expected)
}

/// Compares every byte regardless of where the first difference is
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }

    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"digest", b"digest"));
        assert!(!constant_time_eq(b"digest", b"digesT"));
        assert!(!constant_time_eq(b"digest", b"dig"));
        assert!(constant_time_eq(b"", b""));
    }
}
