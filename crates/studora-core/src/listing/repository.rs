//! Listing repository trait.

use async_trait::async_trait;

use super::model::ServiceRequest;
use crate::error::Result;

/// Repository for the `service_requests` collection.
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Finds a request by its ID.
    async fn find_by_id(&self, request_id: &str) -> Result<Option<ServiceRequest>>;

    /// Creates or overwrites a request.
    async fn save(&self, request: &ServiceRequest) -> Result<()>;

    /// Lists all requests, newest first.
    async fn list_all(&self) -> Result<Vec<ServiceRequest>>;
}
