// src/cipher/asymmetric.rs
//! RSA with PKCS#1 v1.5 padding over PEM-encoded keys
//!
//! Accepted encodings:
//! - public: SPKI `PUBLIC KEY` or PKCS#1 `RSA PUBLIC KEY`
//! - private: PKCS#8 `PRIVATE KEY` or PKCS#1 `RSA PRIVATE KEY`

use rand_core::OsRng;
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

use super::CipherStage;
use crate::consts::PKCS1V15_PADDING_OVERHEAD;
use crate::error::{CoreError, Result};

fn pem_str(key: &[u8]) -> Result<&str> {
    std::str::from_utf8(key)
        .map_err(|e| CoreError::KeyDecodeFailure(format!("key is not PEM text: {e}")))
}

pub(crate) fn decode_public_key(key: &[u8]) -> Result<RsaPublicKey> {
    let pem = pem_str(key)?;
    RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|e| CoreError::KeyDecodeFailure(format!("public key: {e}")))
}

pub(crate) fn decode_private_key(key: &[u8]) -> Result<RsaPrivateKey> {
    let pem = pem_str(key)?;
    RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
        .map_err(|e| CoreError::KeyDecodeFailure(format!("private key: {e}")))
}

/// Largest plaintext a key of `modulus_len` bytes can carry
#[inline]
pub const fn max_plaintext_len(modulus_len: usize) -> usize {
    modulus_len.saturating_sub(PKCS1V15_PADDING_OVERHEAD)
}

pub fn encrypt(plaintext: &[u8], public_key: &[u8]) -> Result<Vec<u8>> {
    let key = decode_public_key(public_key)?;

    // Sizing pass: the output is always exactly one modulus long
    let out_len = key.size();
    let max = max_plaintext_len(out_len);
    if plaintext.len() > max {
        return Err(CoreError::MessageTooLong {
            len: plaintext.len(),
            max,
        });
    }

    let ciphertext = key
        .encrypt(&mut OsRng, Pkcs1v15Encrypt, plaintext)
        .map_err(|e| CoreError::CryptoOperation {
            stage: CipherStage::Transformed,
            reason: e.to_string(),
        })?;

    if ciphertext.len() != out_len {
        return Err(CoreError::CryptoOperation {
            stage: CipherStage::Finalized,
            reason: format!("ciphertext is {} bytes, expected {out_len}", ciphertext.len()),
        });
    }
    Ok(ciphertext)
}

pub fn decrypt(ciphertext: &[u8], private_key: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let key = decode_private_key(private_key)?;
    if ciphertext.len() != key.size() {
        return Err(CoreError::InvalidCiphertextLength(ciphertext.len()));
    }

    key.decrypt(Pkcs1v15Encrypt, ciphertext)
        .map(Zeroizing::new)
        .map_err(|e| CoreError::CryptoOperation {
            stage: CipherStage::Transformed,
            reason: e.to_string(),
        })
}

/// Fresh key pair as (PKCS#8 private PEM, SPKI public PEM)
pub(crate) fn generate_pem_pair(bits: usize) -> Result<(Zeroizing<String>, String)> {
    let private = RsaPrivateKey::new(&mut OsRng, bits)
        .map_err(|e| CoreError::KeyGenerationFailure(e.to_string()))?;
    let public = RsaPublicKey::from(&private);

    let private_pem = private
        .to_pkcs8_pem(LineEnding::LF)
        .map_err(|e| CoreError::KeyEncodeFailure(e.to_string()))?;
    let public_pem = public
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| CoreError::KeyEncodeFailure(e.to_string()))?;
    Ok((private_pem, public_pem))
}
