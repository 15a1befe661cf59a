//! Identity provider trait and credential types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The identity every credential path converges on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Opaque user identifier assigned by the provider.
    pub uid: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

/// Human-verification token holder for phone sign-in.
///
/// Construct one per sign-in form and pass it to
/// [`IdentityProvider::send_phone_code`], which consumes it. A verifier is
/// scoped to a single form's lifetime and is never shared or reused.
#[derive(Debug)]
pub struct CaptchaVerifier {
    token: String,
}

impl CaptchaVerifier {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Consumes the verifier, yielding its one-shot token.
    pub fn into_token(self) -> String {
        self.token
    }
}

/// Server-side handle for an in-progress phone sign-in.
///
/// Returned by [`IdentityProvider::send_phone_code`] and redeemed together
/// with the one-time code the user received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneCodeSession {
    pub session_info: String,
}

/// Credential operations of the hosted identity provider.
///
/// Implementations perform the actual credential exchange; session
/// observation is separate (see [`crate::auth::AuthSession`]).
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Registers a new account with email and password.
    async fn sign_up_with_password(&self, email: &str, password: &str) -> Result<AuthUser>;

    /// Signs in with email and password.
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthUser>;

    /// Signs in with a federated identity token (e.g. `google.com`).
    async fn sign_in_with_federated(&self, provider_id: &str, id_token: &str) -> Result<AuthUser>;

    /// Starts phone sign-in by sending a one-time code to `phone_number`.
    ///
    /// Consumes the verifier; a fresh one must be constructed for every
    /// attempt.
    async fn send_phone_code(
        &self,
        phone_number: &str,
        verifier: CaptchaVerifier,
    ) -> Result<PhoneCodeSession>;

    /// Completes phone sign-in with the code the user received.
    async fn sign_in_with_phone_code(
        &self,
        session: PhoneCodeSession,
        code: &str,
    ) -> Result<AuthUser>;
}
