//! Profile repository trait.
//!
//! Defines the interface to the hosted document database's `users`
//! collection.

use async_trait::async_trait;

use super::model::Profile;
use crate::error::Result;

/// Repository for profile persistence.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Treat a missing document as `Ok(None)`, never as an error
/// - Overwrite on save (last writer wins, no versioning)
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Finds the profile stored at `users/{user_id}`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Profile))`: profile found
    /// - `Ok(None)`: no document exists for this identity
    /// - `Err(_)`: the lookup itself failed (network/permission)
    async fn find_by_id(&self, user_id: &str) -> Result<Option<Profile>>;

    /// Creates or overwrites the profile at `users/{profile.id}`.
    async fn save(&self, profile: &Profile) -> Result<()>;

    /// Lists all provider profiles for the marketplace browse view.
    async fn list_providers(&self) -> Result<Vec<Profile>>;

    /// Checks whether a profile exists for `user_id`.
    async fn exists(&self, user_id: &str) -> Result<bool> {
        Ok(self.find_by_id(user_id).await?.is_some())
    }
}
