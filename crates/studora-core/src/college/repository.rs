//! College repository trait.

use async_trait::async_trait;

use super::model::College;
use crate::error::Result;

/// Repository for the `colleges` reference collection.
#[async_trait]
pub trait CollegeRepository: Send + Sync {
    /// Finds a college by its ID.
    async fn find_by_id(&self, college_id: &str) -> Result<Option<College>>;

    /// Lists all colleges, approved or not.
    async fn list_all(&self) -> Result<Vec<College>>;

    /// Bulk-writes the given colleges in one operation.
    ///
    /// Used only by the one-time seed; callers must check
    /// [`CollegeRepository::is_empty`] first.
    async fn save_all(&self, colleges: &[College]) -> Result<()>;

    /// Checks whether the collection currently holds any records.
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.list_all().await?.is_empty())
    }

    /// Lists only approved colleges, for the signup selection.
    async fn list_approved(&self) -> Result<Vec<College>> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .filter(|c| c.approved)
            .collect())
    }
}
