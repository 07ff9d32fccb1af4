// src/key_ops.rs
//! Key generation shortcuts and representation utilities
//!
//! This module handles the fixed-size 256-bit symmetric fast path and
//! multiple string representations (hex, base64, etc.) of a key for export.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::aliases::{RandomSymmetricKey32, SecureRandomExt, SymmetricKey32};
use crate::enums::KeyKind;
use crate::error::Result;
use crate::key::KeyMaterial;

/// Generate a new random 256-bit AES key straight from the OS CSPRNG
#[inline]
pub fn generate_symmetric_key() -> SymmetricKey32 {
    SymmetricKey32::new(**RandomSymmetricKey32::new())
}

/// Copy a fixed-size key into a managed, live `KeyMaterial`
pub fn to_key_material(key: &SymmetricKey32) -> KeyMaterial {
    KeyMaterial::from_bytes(KeyKind::SymmetricAes, key.expose_secret().to_vec())
}

/// Multiple string representations of a key for export/display
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
    pub base64url_no_pad: String,
}

pub fn key_representations(key: &KeyMaterial) -> Result<KeyRepr> {
    key.ensure_live()?;
    let bytes = key.expose_secret();
    Ok(KeyRepr {
        hex: hex::encode(bytes),
        base64: STANDARD.encode(bytes),
        base64url_no_pad: URL_SAFE_NO_PAD.encode(bytes),
    })
}
