//! Secret store backends
//!
//! The vault core talks to an injected `SecretStore` capability rather
//! than a concrete backend, so the executor is unit-testable against an
//! in-memory store and never depends on platform error codes.

use crate::error::StoreError;
use keyring::Entry;
use std::collections::HashMap;
use std::sync::Mutex;

/// Capability contract for a named-secret backend
///
/// Every call is fallible and no atomicity is assumed across keys;
/// callers sequence multi-key work themselves.
pub trait SecretStore {
    /// Fetch the value stored under `key`
    fn get(&self, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Store `value` under `key`, creating or overwriting (upsert)
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Remove the value stored under `key`
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// OS keyring backend
///
/// Entries are scoped to the service namespace passed at construction,
/// with the key as the account name. When entries are readable (device
/// unlocked, keyring unlocked) is the keyring's own policy; the core
/// only requests access.
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    /// Create a store scoped to `service`
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> Result<Entry, StoreError> {
        Entry::new(&self.service, key).map_err(|e| StoreError::Unavailable {
            message: e.to_string(),
        })
    }
}

impl SecretStore for KeyringStore {
    fn get(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        match self.entry(key)?.get_secret() {
            Ok(bytes) => Ok(bytes),
            Err(keyring::Error::NoEntry) => Err(StoreError::NotFound),
            Err(e) => Err(StoreError::Backend {
                message: e.to_string(),
            }),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        // set_secret overwrites an existing entry, which gives us upsert
        self.entry(key)?
            .set_secret(value)
            .map_err(|e| StoreError::Backend {
                message: e.to_string(),
            })
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        match self.entry(key)?.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Err(StoreError::NotFound),
            Err(e) => Err(StoreError::Backend {
                message: e.to_string(),
            }),
        }
    }
}

/// In-memory store for tests and development
///
/// Mirrors the upsert and not-found semantics the executor expects
/// from a real backend, without touching the system keyring.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SecretStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Backend {
            message: "store mutex poisoned".to_string(),
        })?;
        entries.get(key).cloned().ok_or(StoreError::NotFound)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Backend {
            message: "store mutex poisoned".to_string(),
        })?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Backend {
            message: "store mutex poisoned".to_string(),
        })?;
        entries.remove(key).map(|_| ()).ok_or(StoreError::NotFound)
    }
}
