//! Client-local key-value storage.
//!
//! TRADE-OFFS
//! ==========
//! Operations report failure as a value instead of panicking or throwing.
//! Callers that treat persistence as best-effort must say so explicitly by
//! discarding the `Err`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::error::StorageError;

/// Durable string key-value store scoped to the page origin.
pub trait KeyValueStore {
    /// Read `key`. `Ok(None)` means the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store cannot be reached or refuses
    /// the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read a `"0"`/`"1"` flag. Anything other than `"1"` (including absence)
/// reads as `false`.
///
/// # Errors
///
/// Propagates the store's [`StorageError`].
pub fn read_flag(store: &dyn KeyValueStore, key: &str) -> Result<bool, StorageError> {
    Ok(store.get(key)?.as_deref() == Some("1"))
}

/// Write a boolean as `"1"` or `"0"`.
///
/// # Errors
///
/// Propagates the store's [`StorageError`].
pub fn write_flag(store: &dyn KeyValueStore, key: &str, value: bool) -> Result<(), StorageError> {
    store.set(key, if value { "1" } else { "0" })
}

/// `window.localStorage`, looked up on every call so a storage area that
/// becomes unavailable mid-session degrades instead of failing hard.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }
}
