//! REST-backed listing repository.

use std::sync::Arc;

use async_trait::async_trait;

use studora_core::error::Result;
use studora_core::listing::{ListingRepository, ServiceRequest};

use super::client::DocumentApiClient;

const COLLECTION: &str = "service_requests";

/// [`ListingRepository`] over the hosted document database.
#[derive(Clone)]
pub struct RestListingRepository {
    client: Arc<DocumentApiClient>,
}

impl RestListingRepository {
    pub fn new(client: Arc<DocumentApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ListingRepository for RestListingRepository {
    async fn find_by_id(&self, request_id: &str) -> Result<Option<ServiceRequest>> {
        self.client.get_document(COLLECTION, request_id).await
    }

    async fn save(&self, request: &ServiceRequest) -> Result<()> {
        self.client
            .put_document(COLLECTION, &request.id, request)
            .await
    }

    async fn list_all(&self) -> Result<Vec<ServiceRequest>> {
        let documents = self
            .client
            .list_collection::<ServiceRequest>(COLLECTION)
            .await?;
        let mut requests: Vec<ServiceRequest> = documents.into_values().collect();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }
}
