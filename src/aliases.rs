// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! Fixed-size secrets used by the fast symmetric-key path in `key_ops`.

pub use secure_gate::{fixed_alias, random_alias, SecureRandomExt};

// Fixed-size secrets
fixed_alias!(SymmetricKey32, 32); // 256-bit AES key

// Random secrets
random_alias!(RandomSymmetricKey32, 32);
