//! REST-backed profile repository.

use std::sync::Arc;

use async_trait::async_trait;

use studora_core::error::Result;
use studora_core::profile::{Profile, ProfileRepository};

use super::client::DocumentApiClient;

const COLLECTION: &str = "users";

/// [`ProfileRepository`] over the hosted document database.
#[derive(Clone)]
pub struct RestProfileRepository {
    client: Arc<DocumentApiClient>,
}

impl RestProfileRepository {
    pub fn new(client: Arc<DocumentApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileRepository for RestProfileRepository {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<Profile>> {
        self.client.get_document(COLLECTION, user_id).await
    }

    async fn save(&self, profile: &Profile) -> Result<()> {
        self.client
            .put_document(COLLECTION, &profile.id, profile)
            .await
    }

    async fn list_providers(&self) -> Result<Vec<Profile>> {
        let documents = self.client.list_collection::<Profile>(COLLECTION).await?;
        let mut providers: Vec<Profile> = documents
            .into_values()
            .filter(|p| p.is_provider())
            .collect();
        providers.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(providers)
    }
}
