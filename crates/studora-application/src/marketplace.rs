//! Marketplace use cases: browsing providers and posting service requests.

use std::sync::Arc;

use studora_core::error::{Result, StudoraError};
use studora_core::listing::{ListingRepository, ServiceRequest};
use studora_core::profile::{Profile, ProfileRepository};

/// Form data for a new service request.
#[derive(Debug, Clone)]
pub struct NewServiceRequest {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub budget: Option<f64>,
}

/// Provider browsing and request posting.
pub struct MarketplaceService {
    profiles: Arc<dyn ProfileRepository>,
    listings: Arc<dyn ListingRepository>,
}

impl MarketplaceService {
    pub fn new(profiles: Arc<dyn ProfileRepository>, listings: Arc<dyn ListingRepository>) -> Self {
        Self { profiles, listings }
    }

    /// Lists providers, filtered case-insensitively by name or username
    /// when `query` is non-empty.
    pub async fn search_providers(&self, query: &str) -> Result<Vec<Profile>> {
        let providers = self.profiles.list_providers().await?;

        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(providers);
        }

        Ok(providers
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.username.to_lowercase().contains(&query)
            })
            .collect())
    }

    /// Posts a new service request on behalf of `requester`.
    pub async fn post_request(
        &self,
        requester: &Profile,
        form: NewServiceRequest,
    ) -> Result<ServiceRequest> {
        let title = form.title.trim();
        if title.len() < 3 {
            return Err(StudoraError::validation(
                "Title must be at least 3 characters.",
            ));
        }
        if form.description.trim().is_empty() {
            return Err(StudoraError::validation("Description is required."));
        }
        if form.budget.is_some_and(|b| b < 0.0) {
            return Err(StudoraError::validation("Budget cannot be negative."));
        }

        let request = ServiceRequest::new(
            requester.id.as_str(),
            title,
            form.description.trim(),
            form.skills,
            form.budget,
        );
        self.listings.save(&request).await?;

        tracing::info!(request_id = %request.id, requester = %requester.id, "service request posted");
        Ok(request)
    }

    /// Lists all service requests, newest first.
    pub async fn list_requests(&self) -> Result<Vec<ServiceRequest>> {
        self.listings.list_all().await
    }
}
