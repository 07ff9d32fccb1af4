// src/consts.rs
//! Shared constants — key sizes, digest sizes and security defaults

/// AES-256 key size in bytes
pub const AES_KEY_SIZE: usize = 32;

/// AES block size in bytes (PKCS#7 padding boundary)
pub const AES_BLOCK_SIZE: usize = 16;

/// Placeholder buffer size for an RSA key (2048-bit key encoding)
pub const RSA_KEY_SIZE: usize = 256;

/// Modulus size used when generating fresh RSA key pairs
pub const DEFAULT_RSA_BITS: usize = 2048;

/// PKCS#1 v1.5 encryption padding overhead in bytes
pub const PKCS1V15_PADDING_OVERHEAD: usize = 11;

/// SHA-256 output length in bytes
pub const SHA256_DIGEST_LEN: usize = 32;

/// SHA-512 output length in bytes
pub const SHA512_DIGEST_LEN: usize = 64;

/// Owner read/write only
pub const KEY_FILE_MODE: u32 = 0o600;

/// Device read by `DeviceEntropy` when none is configured
pub const DEFAULT_ENTROPY_DEVICE: &str = "/dev/urandom";

/// Number of hex characters in a key fingerprint
pub const FINGERPRINT_HEX_LEN: usize = 16;
