// src/cipher/symmetric.rs
//! AES-256 in ECB mode with PKCS#7 padding
//!
//! No IV: identical plaintext under the same key always yields identical
//! ciphertext. Callers needing semantic security across repeated messages
//! must salt the plaintext themselves.

use aes::Aes256;
use cipher::block_padding::Pkcs7;
use cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit};
use zeroize::Zeroizing;

use super::CipherStage;
use crate::consts::{AES_BLOCK_SIZE, AES_KEY_SIZE};
use crate::error::{CoreError, Result};

type Aes256EcbEnc = ecb::Encryptor<Aes256>;
type Aes256EcbDec = ecb::Decryptor<Aes256>;

/// Ciphertext length for `len` plaintext bytes (always at least one padding byte)
#[inline]
pub const fn padded_len(len: usize) -> usize {
    (len / AES_BLOCK_SIZE + 1) * AES_BLOCK_SIZE
}

fn validate_key(key: &[u8]) -> Result<()> {
    if key.len() != AES_KEY_SIZE {
        return Err(CoreError::InvalidKeyLength {
            expected: AES_KEY_SIZE,
            actual: key.len(),
        });
    }
    Ok(())
}

fn key_setup_failed(e: impl std::fmt::Display) -> CoreError {
    CoreError::CryptoOperation {
        stage: CipherStage::KeyValidated,
        reason: e.to_string(),
    }
}

pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    validate_key(key)?;
    let encryptor = Aes256EcbEnc::new_from_slice(key).map_err(key_setup_failed)?;

    let ciphertext = encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext);
    if ciphertext.len() != padded_len(plaintext.len()) {
        return Err(CoreError::CryptoOperation {
            stage: CipherStage::Finalized,
            reason: format!(
                "ciphertext is {} bytes, expected {}",
                ciphertext.len(),
                padded_len(plaintext.len())
            ),
        });
    }
    Ok(ciphertext)
}

pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    validate_key(key)?;
    if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
        return Err(CoreError::InvalidCiphertextLength(ciphertext.len()));
    }
    let decryptor = Aes256EcbDec::new_from_slice(key).map_err(key_setup_failed)?;

    // Decrypt in place inside a zeroizing buffer so a bad-padding failure
    // never leaves recovered plaintext behind.
    let mut buf = Zeroizing::new(ciphertext.to_vec());
    let plaintext_len = decryptor
        .decrypt_padded_mut::<Pkcs7>(&mut buf)
        .map_err(|_| CoreError::CryptoOperation {
            stage: CipherStage::Transformed,
            reason: "invalid PKCS#7 padding".into(),
        })?
        .len();
    buf.truncate(plaintext_len);
    Ok(buf)
}
