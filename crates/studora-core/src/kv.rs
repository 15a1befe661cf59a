//! Key-value store boundary.
//!
//! The browser build of Studora leaned on global mutable storage as an
//! ad-hoc cross-page cache. Here the same concern is an injected interface
//! so callers can be wired to a file-backed store in production and an
//! in-memory fake in tests. Records are JSON-serializable, keyed by a
//! string, and have no TTL; a value is replaced only by an explicit
//! overwrite or removal.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Raw string-keyed storage of serialized records.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the raw serialized value for `key`, or `None` if absent.
    async fn get_raw(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set_raw(&self, key: &str, value: String) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Typed convenience layer over [`KeyValueStore`].
///
/// A stored value that fails to deserialize is treated as absent: the bad
/// payload is discarded and the caller sees the default instead. Callers
/// that need to distinguish corruption from absence should use `get_raw`.
#[async_trait]
pub trait KeyValueStoreExt: KeyValueStore {
    /// Reads and deserializes the value under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent or the stored payload
    /// does not deserialize as `T`.
    async fn get_value<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send;

    /// Reads the value under `key`, falling back to `default` when the key
    /// is absent or the stored payload is corrupt.
    async fn get_or<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: DeserializeOwned + Send;

    /// Serializes `value` and stores it under `key`.
    async fn set_value<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + Sync;
}

#[async_trait]
impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {
    async fn get_value<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        let raw = self.get_raw(key).await?;
        Ok(raw.and_then(|s| serde_json::from_str(&s).ok()))
    }

    async fn get_or<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        Ok(self.get_value(key).await?.unwrap_or(default))
    }

    async fn set_value<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + Sync,
    {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, raw).await
    }
}
