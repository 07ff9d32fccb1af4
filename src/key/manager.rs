// src/key/manager.rs
//! Key Manager — full lifecycle of `KeyMaterial`
//!
//! - Allocation with fallible reservation
//! - Generation from a pluggable `EntropySource`, zero retries
//! - Raw key files: exactly `key.len()` bytes, owner-only permissions
//! - Rotation: erase in place, then regenerate

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};
use zeroize::{Zeroize, Zeroizing};

use super::entropy::{self, EntropySource, OsEntropy};
use super::material::{AsymmetricKeyPair, KeyMaterial};
use super::{read_up_to, write_up_to};
use crate::cipher::asymmetric;
use crate::config::Config;
use crate::consts::DEFAULT_RSA_BITS;
use crate::enums::KeyKind;
use crate::error::{CoreError, Result};

#[derive(Debug, Clone)]
pub struct KeyManager {
    entropy: Arc<dyn EntropySource>,
    rsa_bits: usize,
}

impl Default for KeyManager {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyManager {
    /// Manager backed by the OS CSPRNG and built-in defaults
    pub fn new() -> Self {
        Self::with_entropy(OsEntropy)
    }

    pub fn with_entropy(source: impl EntropySource + 'static) -> Self {
        Self {
            entropy: Arc::new(source),
            rsa_bits: DEFAULT_RSA_BITS,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            entropy: entropy::from_settings(&config.entropy),
            rsa_bits: config.asymmetric.rsa_bits,
        }
    }

    /// Zero-initialized key buffer; `custom_length` of `None` or `Some(0)` means the default
    pub fn allocate(&self, kind: KeyKind, custom_length: Option<usize>) -> Result<KeyMaterial> {
        let len = match custom_length {
            Some(n) if n > 0 => n,
            _ => kind.default_length(),
        };
        let key = KeyMaterial::zeroed(kind, len)?;
        debug!(%kind, len, "allocated key buffer");
        Ok(key)
    }

    /// Allocate + generate in one step
    pub fn create_random(&self, kind: KeyKind, custom_length: Option<usize>) -> Result<KeyMaterial> {
        let mut key = self.allocate(kind, custom_length)?;
        self.generate_random(&mut key)?;
        Ok(key)
    }

    /// Fill the whole buffer from the entropy source.
    ///
    /// On any failure the buffer is zeroed and the key is left `Erased`.
    pub fn generate_random(&self, key: &mut KeyMaterial) -> Result<()> {
        let expected = key.len();
        match self.entropy.fill(key.expose_secret_mut()) {
            Ok(actual) if actual == expected => {
                key.mark_live();
                debug!(kind = %key.kind(), len = expected, fingerprint = %key.fingerprint(), "generated key");
                Ok(())
            }
            Ok(actual) => {
                key.erase();
                warn!(expected, actual, "entropy source returned short read");
                Err(CoreError::ShortRead { expected, actual })
            }
            Err(err) => {
                key.erase();
                warn!(error = %err, "entropy source failed");
                Err(err)
            }
        }
    }

    /// Read exactly `key.len()` bytes from `path`.
    ///
    /// The file must be exactly that long. Bytes are staged in a zeroizing
    /// buffer, so a failed load leaves the existing key content untouched.
    pub fn load_from_path(&self, key: &mut KeyMaterial, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let expected = key.len();
        let not_found = |source: io::Error| CoreError::NotFound {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(not_found)?;

        let mut staged = Zeroizing::new(Vec::<u8>::new());
        staged
            .try_reserve_exact(expected)
            .map_err(|_| CoreError::AllocationFailure(expected))?;
        staged.resize(expected, 0);

        let actual = read_up_to(&mut file, &mut staged).map_err(not_found)?;
        if actual < expected {
            warn!(path = %path.display(), expected, actual, "key file truncated");
            return Err(CoreError::TruncatedRead {
                path: path.to_path_buf(),
                expected,
                actual,
            });
        }

        let mut probe = [0u8; 1];
        let trailing = read_up_to(&mut file, &mut probe).map_err(not_found)?;
        probe.zeroize();
        if trailing > 0 {
            warn!(path = %path.display(), expected, "key file longer than expected");
            return Err(CoreError::OversizedKeyFile {
                path: path.to_path_buf(),
                expected,
            });
        }

        key.expose_secret_mut().copy_from_slice(&staged);
        key.mark_live();
        info!(path = %path.display(), kind = %key.kind(), fingerprint = %key.fingerprint(), "loaded key");
        Ok(())
    }

    /// Write exactly `key.len()` bytes to `path`, creating it owner-only and truncating old content.
    ///
    /// After `IncompleteWrite` the destination must be treated as corrupt.
    pub fn save_to_path(&self, key: &KeyMaterial, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        key.ensure_live()?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(crate::consts::KEY_FILE_MODE);
        }

        let mut file = options.open(path).map_err(|source| open_error(path, source))?;
        // `mode` only applies on creation; an existing file is tightened too
        #[cfg(unix)]
        restrict_to_owner(&file, path)?;
        self.write_key(key, &mut file, path)?;
        info!(path = %path.display(), kind = %key.kind(), fingerprint = %key.fingerprint(), "saved key");
        Ok(())
    }

    /// Securely erase, then generate. A failed generation leaves the buffer zeroed.
    pub fn rotate(&self, key: &mut KeyMaterial) -> Result<()> {
        let previous = key.fingerprint();
        key.erase();
        self.generate_random(key)?;
        info!(kind = %key.kind(), from = %previous, to = %key.fingerprint(), "rotated key");
        Ok(())
    }

    /// Overwrite the whole key buffer with zeros. Idempotent.
    pub fn secure_erase(&self, key: &mut KeyMaterial) {
        key.erase();
        debug!(kind = %key.kind(), len = key.len(), "erased key");
    }

    /// Rotate a persisted key without ever leaving a half-written key file.
    ///
    /// A replacement key is generated and written to a temp file next to
    /// `path`, which is then renamed over it. `key` is only replaced (and the
    /// old bytes dropped, hence zeroized) once the new file is in place; on
    /// error both `key` and the file keep their old content.
    pub fn rotate_key_file(&self, key: &mut KeyMaterial, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut fresh = self.allocate(key.kind(), Some(key.len()))?;
        self.generate_random(&mut fresh)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = tempfile::Builder::new()
            .prefix(".key-rotate-")
            .tempfile_in(dir)
            .map_err(|source| open_error(path, source))?;

        #[cfg(unix)]
        restrict_to_owner(temp.as_file(), path)?;

        self.write_key(&fresh, temp.as_file_mut(), path)?;
        temp.persist(path)
            .map_err(|e| write_error(path, e.error))?;

        info!(path = %path.display(), from = %key.fingerprint(), to = %fresh.fingerprint(), "rotated key file");
        std::mem::swap(key, &mut fresh);
        Ok(())
    }

    /// Fresh RSA key pair using the configured modulus size
    pub fn generate_default_key_pair(&self) -> Result<AsymmetricKeyPair> {
        self.generate_key_pair(self.rsa_bits)
    }

    /// Fresh RSA key pair, PEM-encoded (PKCS#8 private, SPKI public)
    pub fn generate_key_pair(&self, bits: usize) -> Result<AsymmetricKeyPair> {
        let (private_pem, public_pem) = asymmetric::generate_pem_pair(bits)?;
        let pair = AsymmetricKeyPair {
            private: KeyMaterial::from_bytes(KeyKind::AsymmetricRsa, private_pem.as_bytes().to_vec()),
            public: KeyMaterial::from_bytes(KeyKind::AsymmetricRsa, public_pem.into_bytes()),
        };
        info!(bits, fingerprint = %pair.public.fingerprint(), "generated RSA key pair");
        Ok(pair)
    }

    fn write_key(&self, key: &KeyMaterial, file: &mut File, path: &Path) -> Result<()> {
        let expected = key.len();
        let written =
            write_up_to(file, key.expose_secret()).map_err(|source| write_error(path, source))?;
        if written != expected {
            warn!(path = %path.display(), expected, written, "short write, key file is corrupt");
            return Err(CoreError::IncompleteWrite {
                path: path.to_path_buf(),
                expected,
                written,
            });
        }
        file.sync_all().map_err(|source| write_error(path, source))
    }
}

/// Owner read/write only; device nodes and other special files are left alone
#[cfg(unix)]
fn restrict_to_owner(file: &File, path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let metadata = file.metadata().map_err(|source| open_error(path, source))?;
    if !metadata.is_file() {
        return Ok(());
    }
    file.set_permissions(std::fs::Permissions::from_mode(crate::consts::KEY_FILE_MODE))
        .map_err(|source| open_error(path, source))
}

fn open_error(path: &Path, source: io::Error) -> CoreError {
    match source.kind() {
        io::ErrorKind::PermissionDenied => CoreError::AccessDenied {
            path: path.to_path_buf(),
            source,
        },
        _ => write_error(path, source),
    }
}

fn write_error(path: &Path, source: io::Error) -> CoreError {
    CoreError::WriteFailure {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Produces only half of what is asked for
    #[derive(Debug)]
    struct HalfEntropy;

    impl EntropySource for HalfEntropy {
        fn fill(&self, dest: &mut [u8]) -> Result<usize> {
            let half = dest.len() / 2;
            dest[..half].fill(0xEE);
            Ok(half)
        }
    }

    #[test]
    fn test_short_read_leaves_key_zeroed() {
        let manager = KeyManager::with_entropy(HalfEntropy);
        let mut key = manager.allocate(KeyKind::SymmetricAes, None).unwrap();
        let err = manager.generate_random(&mut key).unwrap_err();
        assert!(matches!(err, CoreError::ShortRead { expected: 32, actual: 16 }));
        assert!(key.is_zeroed());
        assert!(!key.is_live());
    }

    #[test]
    fn test_config_keeps_builtin_key_lengths() {
        let config = Config::from_toml_str("[entropy]\nsource = \"os\"").unwrap();
        let manager = KeyManager::from_config(&config);
        let aes = manager.allocate(KeyKind::SymmetricAes, None).unwrap();
        let rsa = manager.allocate(KeyKind::AsymmetricRsa, None).unwrap();
        assert_eq!(aes.len(), 32);
        assert_eq!(rsa.len(), 256);
    }
}
