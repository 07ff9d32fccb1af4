// src/signature.rs
//! Signature Engine — RSASSA-PKCS1-v1_5 over SHA-256
//!
//! Key decoding is shared with the asymmetric cipher path.

use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::traits::PublicKeyParts;
use sha2::Sha256;
use tracing::{debug, warn};

use crate::cipher::asymmetric::{decode_private_key, decode_public_key};
use crate::enums::KeyKind;
use crate::error::{CoreError, Result};
use crate::key::KeyMaterial;

/// Opaque signature bytes; length is the signing key's modulus size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureOutput {
    bytes: Vec<u8>,
}

impl SignatureOutput {
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

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for SignatureOutput {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Sign `data` with a PEM private key.
///
/// The signature length is queried from the key first and the produced
/// signature must match it exactly.
pub fn sign(data: &[u8], private_key: &[u8]) -> Result<SignatureOutput> {
    let key = decode_private_key(private_key)?;
    let expected_len = key.size();

    let signing_key = SigningKey::<Sha256>::new(key);
    let signature = signing_key.try_sign(data).map_err(|e| {
        warn!(error = %e, "signing failed");
        CoreError::SigningFailure(e.to_string())
    })?;

    let bytes = signature.to_vec();
    if bytes.len() != expected_len {
        return Err(CoreError::SigningFailure(format!(
            "signature is {} bytes, expected {expected_len}",
            bytes.len()
        )));
    }
    debug!(input = data.len(), signature = bytes.len(), "signed");
    Ok(SignatureOutput { bytes })
}

/// Check `signature` over `data`.
///
/// Returns `false` both for a mismatch and for a key that cannot be decoded;
/// use `verify_strict` to tell the two apart.
pub fn verify(data: &[u8], signature: &[u8], public_key: &[u8]) -> bool {
    match verify_strict(data, signature, public_key) {
        Ok(valid) => valid,
        Err(err) => {
            debug!(error = %err, "verification key rejected");
            false
        }
    }
}

/// Like `verify`, but a key decode failure is an error instead of `false`
pub fn verify_strict(data: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
    let key = decode_public_key(public_key)?;
    let verifying_key = VerifyingKey::<Sha256>::new(key);

    let Ok(signature) = Signature::try_from(signature) else {
        return Ok(false);
    };
    Ok(verifying_key.verify(data, &signature).is_ok())
}

pub fn sign_with_key(data: &[u8], private_key: &KeyMaterial) -> Result<SignatureOutput> {
    private_key.ensure_live()?;
    private_key.ensure_kind(KeyKind::AsymmetricRsa)?;
    sign(data, private_key.expose_secret())
}

/// `verify` with a managed public key; an unusable key verifies nothing
pub fn verify_with_key(data: &[u8], signature: &[u8], public_key: &KeyMaterial) -> bool {
    public_key.is_live()
        && public_key.kind() == KeyKind::AsymmetricRsa
        && verify(data, signature, public_key.expose_secret())
}
