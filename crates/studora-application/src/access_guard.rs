//! Access guard for protected views.
//!
//! Resolves the observed authentication session plus the local profile
//! cache into exactly one outcome per render pass: render, show a loading
//! placeholder, or redirect. The one asynchronous edge is the profile
//! fetch; it runs under an explicit timeout, honors the caller's
//! cancellation token, and is serialized by an in-flight gate so two
//! overlapping render passes cannot race the cache.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use studora_core::access::AccessDecision;
use studora_core::auth::AuthSession;
use studora_core::config::GuardConfig;
use studora_core::error::{Result, StudoraError};
use studora_core::profile::ProfileRepository;
use studora_core::route::Route;
use studora_infrastructure::ProfileCache;

/// Gate deciding whether protected content may render.
pub struct AccessGuardService {
    profiles: Arc<dyn ProfileRepository>,
    cache: ProfileCache,
    config: GuardConfig,
    /// Serializes the fetch-and-cache critical section.
    fetch_gate: Mutex<()>,
}

impl AccessGuardService {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        cache: ProfileCache,
        config: GuardConfig,
    ) -> Self {
        Self {
            profiles,
            cache,
            config,
            fetch_gate: Mutex::new(()),
        }
    }

    /// Resolves one render pass without external cancellation.
    pub async fn resolve(&self, session: &AuthSession) -> Result<AccessDecision> {
        self.resolve_with_cancel(session, &CancellationToken::new())
            .await
    }

    /// Resolves one render pass.
    ///
    /// The decision is terminal for this pass; the caller re-invokes the
    /// guard only when the session or the cache changes. Cancelling the
    /// token (e.g. the user navigated away mid-check) aborts an outstanding
    /// fetch and surfaces [`StudoraError::Cancelled`].
    pub async fn resolve_with_cancel(
        &self,
        session: &AuthSession,
        cancel: &CancellationToken,
    ) -> Result<AccessDecision> {
        if self.config.skip_auth_for_local_dev {
            tracing::warn!("access guard bypassed by skip_auth_for_local_dev");
            return Ok(AccessDecision::Render);
        }

        let user_id = match session {
            AuthSession::Resolving => return Ok(AccessDecision::ShowLoading),
            AuthSession::SignedOut => return Ok(AccessDecision::Redirect(Route::Login)),
            AuthSession::SignedIn { user_id } => user_id,
        };

        if self.cached_matches(user_id).await? {
            return Ok(AccessDecision::Render);
        }

        // One fetch at a time. A second render pass arriving while a fetch
        // is outstanding waits here, then re-checks the cache that fetch
        // may have filled.
        let _gate = self.fetch_gate.lock().await;
        if self.cached_matches(user_id).await? {
            return Ok(AccessDecision::Render);
        }

        let fetch = tokio::time::timeout(
            self.config.profile_fetch_timeout(),
            self.profiles.find_by_id(user_id),
        );
        let fetched = tokio::select! {
            _ = cancel.cancelled() => return Err(StudoraError::Cancelled),
            result = fetch => result,
        };

        match fetched {
            Err(_elapsed) => {
                tracing::warn!(%user_id, "profile fetch timed out, redirecting to login");
                Ok(AccessDecision::Redirect(Route::Login))
            }
            Ok(Err(err)) => {
                tracing::warn!(%user_id, error = %err, "profile fetch failed, redirecting to login");
                Ok(AccessDecision::Redirect(Route::Login))
            }
            Ok(Ok(Some(profile))) => {
                if let Err(err) = self.cache.put(&profile).await {
                    // The profile is known; only persisting it failed.
                    tracing::warn!(error = %err, "failed to cache fetched profile");
                }
                Ok(AccessDecision::Render)
            }
            Ok(Ok(None)) => Ok(AccessDecision::Redirect(Route::ProfileCreate)),
        }
    }

    /// True when a cached profile exists and belongs to `user_id`.
    async fn cached_matches(&self, user_id: &str) -> Result<bool> {
        Ok(self
            .cache
            .get()
            .await?
            .is_some_and(|profile| profile.id == user_id))
    }
}
