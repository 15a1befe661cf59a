//! Local profile cache.
//!
//! Holds the signed-in user's profile in the key-value store under a fixed
//! key, with no expiry. The guard trusts a cached copy only when its
//! identity matches the current session; this module just stores and
//! retrieves, and recovers locally from corrupt payloads.

use std::sync::Arc;

use studora_core::error::Result;
use studora_core::kv::KeyValueStore;
use studora_core::profile::Profile;

/// Fixed key the cached profile record lives under.
pub const PROFILE_CACHE_KEY: &str = "user_profile";

/// Cache of the signed-in user's profile.
#[derive(Clone)]
pub struct ProfileCache {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the cached profile, if a valid one is stored.
    ///
    /// A corrupt payload is discarded and reported as absent; an unreadable
    /// store is treated the same way so the caller falls back to a fresh
    /// fetch instead of failing the render pass.
    pub async fn get(&self) -> Result<Option<Profile>> {
        let raw = match self.store.get_raw(PROFILE_CACHE_KEY).await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "profile cache unreadable, treating as empty");
                return Ok(None);
            }
        };

        let Some(raw) = raw else {
            return Ok(None);
        };

        match serde_json::from_str::<Profile>(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(err) => {
                tracing::warn!(error = %err, "discarding corrupt cached profile");
                let _ = self.store.remove(PROFILE_CACHE_KEY).await;
                Ok(None)
            }
        }
    }

    /// Stores `profile`, replacing any previous cached copy.
    pub async fn put(&self, profile: &Profile) -> Result<()> {
        let raw = serde_json::to_string(profile)?;
        self.store.set_raw(PROFILE_CACHE_KEY, raw).await
    }

    /// Removes the cached profile (e.g. on sign-out).
    pub async fn clear(&self) -> Result<()> {
        self.store.remove(PROFILE_CACHE_KEY).await
    }
}
