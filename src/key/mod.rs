// src/key/mod.rs
//! Key lifecycle — allocation, generation, persistence, rotation, erasure
//!
//! `KeyMaterial` is the only type that ever owns raw key bytes. It zeroizes
//! itself on every drop path, so callers never pair allocate/free by hand.

pub mod entropy;
pub mod guarded;
pub mod manager;
pub mod material;

pub use entropy::{DeviceEntropy, EntropySource, OsEntropy};
pub use guarded::GuardedKey;
pub use manager::KeyManager;
pub use material::{AsymmetricKeyPair, KeyMaterial, KeyState};

use std::io::{self, Read, Write};

/// Read until `buf` is full or the reader hits EOF; returns bytes read
pub(crate) fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Write until `buf` is drained or the writer accepts nothing more; returns bytes written
pub(crate) fn write_up_to<W: Write>(writer: &mut W, buf: &[u8]) -> io::Result<usize> {
    let mut written = 0;
    while written < buf.len() {
        match writer.write(&buf[written..]) {
            Ok(0) => break,
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(written)
}
