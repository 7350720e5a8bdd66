//! Key-value persistence behind a small trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! Theme and form persistence only need `get`/`set`/`remove` of strings. The
//! browser build talks to `window.localStorage`. During SSR the same type
//! reports [`StorageError::Unavailable`], which callers already tolerate, and
//! tests swap in `test_helpers::MemoryStorage`.
//!
//! ERROR HANDLING
//! ==============
//! Every operation may fail (private browsing, quota, no window). Callers log
//! and continue; persistence is never required for the form to work.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "userPreferredTheme";
/// Key holding the raw name field text.
pub const NAME_KEY: &str = "savedFormName";
/// Key holding the raw email field text.
pub const EMAIL_KEY: &str = "savedFormEmail";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to read '{key}': {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
    #[error("failed to remove '{key}': {reason}")]
    Remove { key: String, reason: String },
}

/// Minimal string key-value store.
pub trait KeyValueStore {
    /// Read the value for `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the write is rejected.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// BROWSER STORAGE
// =============================================================================

/// `window.localStorage`, looked up on every call.
///
/// Holds no handle so it stays `Send + Sync` and can live inside signals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) | Err(_) => Err(StorageError::Unavailable),
    }
}

#[cfg(feature = "hydrate")]
fn js_reason(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read { key: key.to_owned(), reason: js_reason(&e) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write { key: key.to_owned(), reason: js_reason(&e) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Remove { key: key.to_owned(), reason: js_reason(&e) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    use super::{KeyValueStore, StorageError};

    /// How a [`MemoryStorage`] misbehaves.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub enum FailureMode {
        #[default]
        None,
        /// Every operation fails with [`StorageError::Unavailable`].
        Unavailable,
        /// Reads work; writes and removals fail as if the quota were exhausted.
        ReadOnly,
    }

    /// In-process store. Clones share the same entries, which lets a test keep a
    /// handle while the app owns another (a "reload" is a new app over a clone).
    #[derive(Clone, Debug, Default)]
    pub struct MemoryStorage {
        entries: Arc<Mutex<HashMap<String, String>>>,
        failure: FailureMode,
    }

    impl MemoryStorage {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        #[must_use]
        pub fn unavailable() -> Self {
            Self { failure: FailureMode::Unavailable, ..Self::default() }
        }

        #[must_use]
        pub fn read_only() -> Self {
            Self { failure: FailureMode::ReadOnly, ..Self::default() }
        }

        /// Same entries, different failure behavior.
        #[must_use]
        pub fn with_failure(&self, failure: FailureMode) -> Self {
            Self { entries: Arc::clone(&self.entries), failure }
        }

        /// Number of stored keys.
        #[must_use]
        pub fn len(&self) -> usize {
            self.lock().len()
        }

        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.lock().is_empty()
        }

        fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
            self.entries.lock().unwrap_or_else(PoisonError::into_inner)
        }

        fn check_read(&self) -> Result<(), StorageError> {
            match self.failure {
                FailureMode::Unavailable => Err(StorageError::Unavailable),
                FailureMode::None | FailureMode::ReadOnly => Ok(()),
            }
        }
    }

    impl KeyValueStore for MemoryStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.check_read()?;
            Ok(self.lock().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.check_read()?;
            if self.failure == FailureMode::ReadOnly {
                return Err(StorageError::Write { key: key.to_owned(), reason: "quota exceeded".to_owned() });
            }
            self.lock().insert(key.to_owned(), value.to_owned());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.check_read()?;
            if self.failure == FailureMode::ReadOnly {
                return Err(StorageError::Remove { key: key.to_owned(), reason: "storage is read-only".to_owned() });
            }
            self.lock().remove(key);
            Ok(())
        }
    }
}
