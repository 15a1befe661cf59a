//! Onboarding use cases: account signup, sign-in, and profile creation.
//!
//! Validation happens before any network call; identity-provider failures
//! surface as [`StudoraError::Auth`] messages the front end shows verbatim.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use studora_core::auth::{
    AuthUser, CaptchaVerifier, IdentityProvider, PendingSignup, PhoneCodeSession, SIGNUP_DATA_KEY,
};
use studora_core::college::CollegeRepository;
use studora_core::error::{Result, StudoraError};
use studora_core::kv::{KeyValueStore, KeyValueStoreExt};
use studora_core::profile::{AccountRole, Profile, ProfileRepository};
use studora_infrastructure::ProfileCache;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));
static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_.]+$").expect("username regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[0-9]{7,15}$").expect("phone regex"));

/// Signup form data.
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub college_id: String,
    pub role: AccountRole,
}

/// Profile creation form data.
#[derive(Debug, Clone)]
pub struct CreateProfileForm {
    pub name: String,
    pub username: String,
    pub avatar_url: String,
}

/// Signup, sign-in, and profile creation flows.
pub struct OnboardingService {
    identity: Arc<dyn IdentityProvider>,
    profiles: Arc<dyn ProfileRepository>,
    colleges: Arc<dyn CollegeRepository>,
    store: Arc<dyn KeyValueStore>,
    cache: ProfileCache,
}

impl OnboardingService {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        profiles: Arc<dyn ProfileRepository>,
        colleges: Arc<dyn CollegeRepository>,
        store: Arc<dyn KeyValueStore>,
        cache: ProfileCache,
    ) -> Self {
        Self {
            identity,
            profiles,
            colleges,
            store,
            cache,
        }
    }

    /// Registers a new account and stashes the signup data the profile
    /// creation step needs. The caller navigates to `/profile/create` next.
    pub async fn sign_up(&self, form: &SignupForm) -> Result<AuthUser> {
        if !EMAIL_RE.is_match(form.email.trim()) {
            return Err(StudoraError::validation("Please enter a valid email."));
        }
        if form.password.len() < 8 {
            return Err(StudoraError::validation(
                "Password must be at least 8 characters.",
            ));
        }

        let college = self
            .colleges
            .find_by_id(&form.college_id)
            .await?
            .ok_or_else(|| StudoraError::validation("Please select your college."))?;
        if !college.approved {
            return Err(StudoraError::validation(
                "This college is not approved yet.",
            ));
        }

        let user = self
            .identity
            .sign_up_with_password(form.email.trim(), &form.password)
            .await?;

        let pending = PendingSignup {
            uid: user.uid.clone(),
            email: form.email.trim().to_string(),
            college_id: form.college_id.clone(),
            role: form.role,
        };
        self.store.set_value(SIGNUP_DATA_KEY, &pending).await?;

        tracing::info!(uid = %user.uid, "account created, profile setup pending");
        Ok(user)
    }

    /// Signs in with email and password. The caller navigates to
    /// `/dashboard`; the access guard takes it from there.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser> {
        if !EMAIL_RE.is_match(email.trim()) {
            return Err(StudoraError::validation("Please enter a valid email."));
        }
        if password.is_empty() {
            return Err(StudoraError::validation("Password is required."));
        }

        self.identity
            .sign_in_with_password(email.trim(), password)
            .await
    }

    /// Signs in with a federated identity token.
    pub async fn sign_in_federated(&self, provider_id: &str, id_token: &str) -> Result<AuthUser> {
        if id_token.trim().is_empty() {
            return Err(StudoraError::validation("Federated token is missing."));
        }
        self.identity
            .sign_in_with_federated(provider_id, id_token)
            .await
    }

    /// Starts phone sign-in. The verifier is consumed; build a fresh one
    /// per attempt.
    pub async fn start_phone_sign_in(
        &self,
        phone_number: &str,
        verifier: CaptchaVerifier,
    ) -> Result<PhoneCodeSession> {
        let normalized: String = phone_number.chars().filter(|c| !c.is_whitespace()).collect();
        if !PHONE_RE.is_match(&normalized) {
            return Err(StudoraError::validation(
                "Enter the phone number in international format, e.g. +919876543210.",
            ));
        }
        self.identity.send_phone_code(&normalized, verifier).await
    }

    /// Completes phone sign-in with the one-time code.
    pub async fn confirm_phone_sign_in(
        &self,
        session: PhoneCodeSession,
        code: &str,
    ) -> Result<AuthUser> {
        let code = code.trim();
        if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(StudoraError::validation("Enter the 6-digit code."));
        }
        self.identity.sign_in_with_phone_code(session, code).await
    }

    /// Creates the profile for a freshly authenticated identity.
    ///
    /// Merges the pending signup data, persists the profile, primes the
    /// local cache, and removes the pending record. New profiles start
    /// with zero rating and earnings.
    pub async fn create_profile(&self, uid: &str, form: &CreateProfileForm) -> Result<Profile> {
        let name = form.name.trim();
        if name.len() < 2 {
            return Err(StudoraError::validation(
                "Name must be at least 2 characters.",
            ));
        }
        if form.username.len() < 3 {
            return Err(StudoraError::validation(
                "Username must be at least 3 characters.",
            ));
        }
        if !USERNAME_RE.is_match(&form.username) {
            return Err(StudoraError::validation(
                "Username can only contain lowercase letters, numbers, underscores, and dots.",
            ));
        }
        if form.avatar_url.trim().is_empty() {
            return Err(StudoraError::validation("Please select an avatar."));
        }

        let pending = self
            .store
            .get_value::<PendingSignup>(SIGNUP_DATA_KEY)
            .await?
            .filter(|p| p.uid == uid);

        let (email, college_id, role) = match &pending {
            Some(p) => (p.email.clone(), p.college_id.clone(), p.role),
            None => {
                tracing::warn!(%uid, "no pending signup data for this identity");
                (String::new(), String::new(), AccountRole::default())
            }
        };

        let profile = Profile {
            id: uid.to_string(),
            name: name.to_string(),
            username: form.username.clone(),
            email,
            college_id,
            avatar_url: form.avatar_url.clone(),
            role,
            skills: Vec::new(),
            tagline: None,
            rating: 0.0,
            earnings: 0.0,
        };

        self.profiles.save(&profile).await?;
        if let Err(err) = self.cache.put(&profile).await {
            tracing::warn!(error = %err, "failed to prime profile cache");
        }
        self.store.remove(SIGNUP_DATA_KEY).await?;

        tracing::info!(uid = %profile.id, "profile created");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use studora_core::college::default_colleges;
    use studora_infrastructure::memory::{
        MemoryCollegeRepository, MemoryKeyValueStore, MemoryProfileRepository,
    };

    /// Identity stub that accepts everything and counts the calls made.
    #[derive(Default)]
    struct FakeIdentity {
        calls: AtomicUsize,
    }

    impl FakeIdentity {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn user(&self) -> AuthUser {
            AuthUser {
                uid: "u-new".to_string(),
                email: Some("jane@example.edu".to_string()),
                phone_number: None,
            }
        }
    }

    #[async_trait]
    impl IdentityProvider for FakeIdentity {
        async fn sign_up_with_password(&self, _email: &str, _password: &str) -> Result<AuthUser> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.user())
        }

        async fn sign_in_with_password(&self, _email: &str, _password: &str) -> Result<AuthUser> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.user())
        }

        async fn sign_in_with_federated(
            &self,
            _provider_id: &str,
            _id_token: &str,
        ) -> Result<AuthUser> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.user())
        }

        async fn send_phone_code(
            &self,
            _phone_number: &str,
            _verifier: CaptchaVerifier,
        ) -> Result<PhoneCodeSession> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(PhoneCodeSession {
                session_info: "session-1".to_string(),
            })
        }

        async fn sign_in_with_phone_code(
            &self,
            _session: PhoneCodeSession,
            _code: &str,
        ) -> Result<AuthUser> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.user())
        }
    }

    struct Harness {
        identity: Arc<FakeIdentity>,
        profiles: Arc<MemoryProfileRepository>,
        store: Arc<MemoryKeyValueStore>,
        service: OnboardingService,
    }

    async fn harness() -> Harness {
        let identity = Arc::new(FakeIdentity::default());
        let profiles = Arc::new(MemoryProfileRepository::new());
        let colleges = Arc::new(MemoryCollegeRepository::new());
        colleges.save_all(&default_colleges()).await.unwrap();
        let store = Arc::new(MemoryKeyValueStore::new());
        let cache = ProfileCache::new(store.clone());

        let service = OnboardingService::new(
            identity.clone(),
            profiles.clone(),
            colleges,
            store.clone(),
            cache,
        );
        Harness {
            identity,
            profiles,
            store,
            service,
        }
    }

    fn signup_form() -> SignupForm {
        SignupForm {
            email: "jane@example.edu".to_string(),
            password: "longenough".to_string(),
            college_id: "cbit".to_string(),
            role: AccountRole::Provider,
        }
    }

    #[tokio::test]
    async fn test_sign_up_rejects_short_password_before_any_network_call() {
        let h = harness().await;
        let form = SignupForm {
            password: "short".to_string(),
            ..signup_form()
        };

        let err = h.service.sign_up(&form).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(h.identity.calls(), 0);
    }

    #[tokio::test]
    async fn test_sign_up_rejects_bad_email() {
        let h = harness().await;
        let form = SignupForm {
            email: "not-an-email".to_string(),
            ..signup_form()
        };

        assert!(h.service.sign_up(&form).await.unwrap_err().is_validation());
        assert_eq!(h.identity.calls(), 0);
    }

    #[tokio::test]
    async fn test_sign_up_rejects_unknown_and_unapproved_colleges() {
        let h = harness().await;

        let unknown = SignupForm {
            college_id: "nowhere".to_string(),
            ..signup_form()
        };
        assert!(h.service.sign_up(&unknown).await.unwrap_err().is_validation());

        // "stanley" ships unapproved in the preset.
        let unapproved = SignupForm {
            college_id: "stanley".to_string(),
            ..signup_form()
        };
        assert!(
            h.service
                .sign_up(&unapproved)
                .await
                .unwrap_err()
                .is_validation()
        );
        assert_eq!(h.identity.calls(), 0);
    }

    #[tokio::test]
    async fn test_sign_up_stores_pending_signup() {
        let h = harness().await;

        let user = h.service.sign_up(&signup_form()).await.unwrap();
        assert_eq!(user.uid, "u-new");

        let pending: PendingSignup = h
            .store
            .get_value(SIGNUP_DATA_KEY)
            .await
            .unwrap()
            .expect("pending signup stored");
        assert_eq!(pending.uid, "u-new");
        assert_eq!(pending.college_id, "cbit");
        assert_eq!(pending.role, AccountRole::Provider);
    }

    #[tokio::test]
    async fn test_sign_in_validates_before_calling_provider() {
        let h = harness().await;

        assert!(
            h.service
                .sign_in("bad-email", "pw")
                .await
                .unwrap_err()
                .is_validation()
        );
        assert!(
            h.service
                .sign_in("jane@example.edu", "")
                .await
                .unwrap_err()
                .is_validation()
        );
        assert_eq!(h.identity.calls(), 0);

        h.service
            .sign_in("jane@example.edu", "pw")
            .await
            .unwrap();
        assert_eq!(h.identity.calls(), 1);
    }

    #[tokio::test]
    async fn test_phone_sign_in_validation() {
        let h = harness().await;

        let err = h
            .service
            .start_phone_sign_in("12345", CaptchaVerifier::new("tok"))
            .await
            .unwrap_err();
        assert!(err.is_validation());

        let session = h
            .service
            .start_phone_sign_in("+91 98765 43210", CaptchaVerifier::new("tok"))
            .await
            .unwrap();

        assert!(
            h.service
                .confirm_phone_sign_in(session.clone(), "12ab56")
                .await
                .unwrap_err()
                .is_validation()
        );
        h.service
            .confirm_phone_sign_in(session, "123456")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_profile_merges_pending_and_primes_cache() {
        let h = harness().await;
        h.service.sign_up(&signup_form()).await.unwrap();

        let profile = h
            .service
            .create_profile(
                "u-new",
                &CreateProfileForm {
                    name: "Jane Doe".to_string(),
                    username: "jane.doe".to_string(),
                    avatar_url: "https://img.example/avatar-1.png".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(profile.college_id, "cbit");
        assert_eq!(profile.role, AccountRole::Provider);
        assert_eq!(profile.email, "jane@example.edu");
        assert_eq!(profile.rating, 0.0);
        assert_eq!(profile.earnings, 0.0);

        // Persisted, cached, and the pending record cleaned up.
        assert!(h.profiles.find_by_id("u-new").await.unwrap().is_some());
        let cache = ProfileCache::new(h.store.clone());
        assert_eq!(cache.get().await.unwrap().unwrap().id, "u-new");
        assert!(
            h.store
                .get_value::<PendingSignup>(SIGNUP_DATA_KEY)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_create_profile_without_pending_uses_defaults() {
        let h = harness().await;

        let profile = h
            .service
            .create_profile(
                "u-solo",
                &CreateProfileForm {
                    name: "Ravi K".to_string(),
                    username: "ravi_k".to_string(),
                    avatar_url: "https://img.example/avatar-2.png".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(profile.role, AccountRole::Seeker);
        assert!(profile.college_id.is_empty());
    }

    #[tokio::test]
    async fn test_create_profile_rejects_bad_username() {
        let h = harness().await;

        let err = h
            .service
            .create_profile(
                "u-new",
                &CreateProfileForm {
                    name: "Jane Doe".to_string(),
                    username: "Jane Doe!".to_string(),
                    avatar_url: "https://img.example/a.png".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(h.profiles.find_by_id("u-new").await.unwrap().is_none());
    }
}
