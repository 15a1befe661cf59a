//! REST-backed college repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use studora_core::college::{College, CollegeRepository};
use studora_core::error::Result;

use super::client::DocumentApiClient;

const COLLECTION: &str = "colleges";

/// [`CollegeRepository`] over the hosted document database.
#[derive(Clone)]
pub struct RestCollegeRepository {
    client: Arc<DocumentApiClient>,
}

impl RestCollegeRepository {
    pub fn new(client: Arc<DocumentApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CollegeRepository for RestCollegeRepository {
    async fn find_by_id(&self, college_id: &str) -> Result<Option<College>> {
        self.client.get_document(COLLECTION, college_id).await
    }

    async fn list_all(&self) -> Result<Vec<College>> {
        let documents = self.client.list_collection::<College>(COLLECTION).await?;
        let mut colleges: Vec<College> = documents.into_values().collect();
        colleges.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(colleges)
    }

    async fn save_all(&self, colleges: &[College]) -> Result<()> {
        let documents: HashMap<String, &College> =
            colleges.iter().map(|c| (c.id.clone(), c)).collect();
        self.client.patch_collection(COLLECTION, &documents).await
    }
}
