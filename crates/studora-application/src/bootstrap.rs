//! Startup wiring helpers.

use std::sync::Arc;

use anyhow::{Context, Result};

use studora_core::auth::IdentityProvider;
use studora_core::college::{CollegeRepository, default_colleges};
use studora_core::config::AppConfig;
use studora_core::kv::KeyValueStore;
use studora_core::listing::ListingRepository;
use studora_core::profile::ProfileRepository;
use studora_core::secret::SecretService;
use studora_infrastructure::{
    DocumentApiClient, ProfileCache, RestCollegeRepository, RestListingRepository,
    RestProfileRepository,
};
use studora_interaction::{GeminiClient, GenerativeModel, IdentityApiClient};

use crate::access_guard::AccessGuardService;
use crate::marketplace::MarketplaceService;
use crate::onboarding::OnboardingService;
use crate::recommendation::RecommendationService;

/// What the college seed did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The directory was empty; this many colleges were written.
    Seeded(usize),
    /// The directory already held records; nothing was written.
    AlreadyPopulated,
}

/// Seeds the college directory if, and only if, it is currently empty.
///
/// Idempotent: a populated directory is left untouched, so repeated
/// startups never overwrite edits made since the first seed.
pub async fn ensure_college_directory(colleges: &dyn CollegeRepository) -> Result<SeedOutcome> {
    let empty = colleges
        .is_empty()
        .await
        .context("Failed to inspect the college directory")?;
    if !empty {
        tracing::info!("[Bootstrap] College directory already populated, skipping preload");
        return Ok(SeedOutcome::AlreadyPopulated);
    }

    let preset = default_colleges();
    colleges
        .save_all(&preset)
        .await
        .context("Failed to preload the college directory")?;

    tracing::info!(count = preset.len(), "[Bootstrap] Preloaded college directory");
    Ok(SeedOutcome::Seeded(preset.len()))
}

/// The fully wired use-case services a front end talks to.
pub struct AppServices {
    pub guard: AccessGuardService,
    pub onboarding: OnboardingService,
    pub marketplace: MarketplaceService,
    pub recommendations: RecommendationService,
}

impl std::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppServices").finish_non_exhaustive()
    }
}

/// Builds the document-database client from configuration and secrets.
pub async fn build_document_client(
    config: &AppConfig,
    secrets: &dyn SecretService,
) -> Result<DocumentApiClient> {
    let mut client = DocumentApiClient::new(config.services.database_url.clone())
        .context("Failed to create the document database client")?;

    if let Some(database) = secrets
        .load_secrets()
        .await
        .context("Failed to load secrets")?
        .database
    {
        client = client.with_auth_token(database.auth_token);
    }

    Ok(client)
}

/// Wires every service against the hosted backends.
///
/// Pure construction: nothing here performs network I/O, so the caller
/// decides when to run [`ensure_college_directory`] (typically right after
/// this, once at startup).
pub async fn build_services(
    config: &AppConfig,
    secrets: &dyn SecretService,
    store: Arc<dyn KeyValueStore>,
) -> Result<AppServices> {
    let document_client = Arc::new(build_document_client(config, secrets).await?);

    let profiles: Arc<dyn ProfileRepository> =
        Arc::new(RestProfileRepository::new(document_client.clone()));
    let colleges: Arc<dyn CollegeRepository> =
        Arc::new(RestCollegeRepository::new(document_client.clone()));
    let listings: Arc<dyn ListingRepository> =
        Arc::new(RestListingRepository::new(document_client));

    let identity: Arc<dyn IdentityProvider> = Arc::new(
        IdentityApiClient::try_from_secrets(secrets)
            .await
            .context("Failed to create the identity client")?
            .with_base_url(config.services.identity_url.clone()),
    );
    let model: Arc<dyn GenerativeModel> = Arc::new(
        GeminiClient::try_from_secrets(secrets)
            .await
            .context("Failed to create the model client")?
            .with_model(config.model.model.clone()),
    );

    let cache = ProfileCache::new(store.clone());

    Ok(AppServices {
        guard: AccessGuardService::new(profiles.clone(), cache.clone(), config.guard.clone()),
        onboarding: OnboardingService::new(identity, profiles.clone(), colleges, store, cache),
        marketplace: MarketplaceService::new(profiles, listings),
        recommendations: RecommendationService::new(model),
    })
}
