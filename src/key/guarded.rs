// src/key/guarded.rs
//! Scoped exclusive access to a key shared between threads
//!
//! Each `GuardedKey` owns its own lock; there is no crate-wide lock.

use std::sync::{Mutex, MutexGuard};

use tracing::warn;

use super::manager::KeyManager;
use super::material::KeyMaterial;
use crate::error::Result;

#[derive(Debug)]
pub struct GuardedKey {
    inner: Mutex<KeyMaterial>,
}

impl GuardedKey {
    pub fn new(key: KeyMaterial) -> Self {
        Self {
            inner: Mutex::new(key),
        }
    }

    /// Run `f` with shared access; the lock is held for the whole call
    pub fn with_key<R>(&self, f: impl FnOnce(&KeyMaterial) -> R) -> R {
        f(&self.lock())
    }

    /// Run `f` with exclusive mutable access
    pub fn with_key_mut<R>(&self, f: impl FnOnce(&mut KeyMaterial) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn rotate(&self, manager: &KeyManager) -> Result<()> {
        self.with_key_mut(|key| manager.rotate(key))
    }

    pub fn into_inner(self) -> KeyMaterial {
        match self.inner.into_inner() {
            Ok(key) => key,
            Err(poisoned) => {
                let mut key = poisoned.into_inner();
                key.erase();
                key
            }
        }
    }

    // A panic while the lock was held may have left a half-written buffer,
    // so a poisoned key is erased before anyone sees it again.
    fn lock(&self) -> MutexGuard<'_, KeyMaterial> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                let mut guard = poisoned.into_inner();
                guard.erase();
                self.inner.clear_poison();
                warn!(kind = %guard.kind(), "recovered poisoned key lock, key erased");
                guard
            }
        }
    }
}
