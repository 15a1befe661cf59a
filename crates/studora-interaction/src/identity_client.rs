//! IdentityApiClient - REST implementation of the identity provider.
//!
//! Talks to an Identity-Toolkit-style endpoint. All credential paths
//! (password, federated token, phone one-time-code) converge on the same
//! account response, mapped to [`AuthUser`]. Provider error codes become
//! user-visible [`StudoraError::Auth`] messages.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use studora_core::auth::{AuthUser, CaptchaVerifier, IdentityProvider, PhoneCodeSession};
use studora_core::error::{Result, StudoraError};
use studora_core::secret::SecretService;

const DEFAULT_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

/// REST client for the hosted identity provider.
#[derive(Clone)]
pub struct IdentityApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl IdentityApiClient {
    /// Creates a client with the provided API key against the default
    /// endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Loads the API key from the secret store.
    pub async fn try_from_secrets(secrets: &dyn SecretService) -> Result<Self> {
        let config = secrets.load_secrets().await?;
        let identity = config.identity.ok_or_else(|| {
            StudoraError::config("Identity configuration not found in secret.json")
        })?;

        Ok(Self::new(identity.api_key))
    }

    /// Overrides the endpoint base URL (used against emulators in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self, operation: &str) -> String {
        format!(
            "{}/v1/accounts:{}?key={}",
            self.base_url, operation, self.api_key
        )
    }

    async fn post<Req, Resp>(&self, operation: &str, body: &Req) -> Result<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.endpoint(operation))
            .json(body)
            .send()
            .await
            .map_err(|err| {
                StudoraError::api(None, format!("identity request failed: {err}"))
            })?;

        if !response.status().is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(map_provider_error(&body_text));
        }

        response.json().await.map_err(|err| {
            StudoraError::api(None, format!("Failed to parse identity response: {err}"))
        })
    }
}

#[async_trait]
impl IdentityProvider for IdentityApiClient {
    async fn sign_up_with_password(&self, email: &str, password: &str) -> Result<AuthUser> {
        let response: AccountResponse = self
            .post(
                "signUp",
                &PasswordCredentials {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;
        Ok(response.into())
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthUser> {
        let response: AccountResponse = self
            .post(
                "signInWithPassword",
                &PasswordCredentials {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;
        Ok(response.into())
    }

    async fn sign_in_with_federated(&self, provider_id: &str, id_token: &str) -> Result<AuthUser> {
        let response: AccountResponse = self
            .post(
                "signInWithIdp",
                &FederatedCredentials {
                    post_body: format!("id_token={}&providerId={}", id_token, provider_id),
                    request_uri: "http://localhost",
                    return_secure_token: true,
                },
            )
            .await?;
        Ok(response.into())
    }

    async fn send_phone_code(
        &self,
        phone_number: &str,
        verifier: CaptchaVerifier,
    ) -> Result<PhoneCodeSession> {
        let response: SendCodeResponse = self
            .post(
                "sendVerificationCode",
                &SendCodeRequest {
                    phone_number,
                    recaptcha_token: verifier.into_token(),
                },
            )
            .await?;

        Ok(PhoneCodeSession {
            session_info: response.session_info,
        })
    }

    async fn sign_in_with_phone_code(
        &self,
        session: PhoneCodeSession,
        code: &str,
    ) -> Result<AuthUser> {
        let response: AccountResponse = self
            .post(
                "signInWithPhoneNumber",
                &PhoneCredentials {
                    session_info: session.session_info,
                    code,
                },
            )
            .await?;
        Ok(response.into())
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordCredentials<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FederatedCredentials<'a> {
    post_body: String,
    request_uri: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendCodeRequest<'a> {
    phone_number: &'a str,
    recaptcha_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhoneCredentials<'a> {
    session_info: String,
    code: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendCodeResponse {
    session_info: String,
}

impl From<AccountResponse> for AuthUser {
    fn from(response: AccountResponse) -> Self {
        AuthUser {
            uid: response.local_id,
            email: response.email,
            phone_number: response.phone_number,
        }
    }
}

// ============================================================================
// Error mapping
// ============================================================================

#[derive(Deserialize)]
struct ProviderErrorWrapper {
    error: ProviderErrorBody,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    message: Option<String>,
}

fn map_provider_error(body: &str) -> StudoraError {
    let code = serde_json::from_str::<ProviderErrorWrapper>(body)
        .ok()
        .and_then(|wrapper| wrapper.error.message)
        .unwrap_or_else(|| "UNKNOWN".to_string());

    // Codes sometimes carry a suffix like "WEAK_PASSWORD : Password should
    // be at least 6 characters"; only the leading token identifies them.
    let key = code.split([' ', ':']).next().unwrap_or("UNKNOWN");

    let message = match key {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Invalid email or password."
        }
        "EMAIL_EXISTS" => "An account with this email already exists.",
        "WEAK_PASSWORD" => "Password is too weak.",
        "USER_DISABLED" => "This account has been disabled.",
        "INVALID_PHONE_NUMBER" => "The phone number is not valid.",
        "INVALID_CODE" => "The verification code is incorrect.",
        "SESSION_EXPIRED" => "The verification code has expired. Request a new one.",
        "CAPTCHA_CHECK_FAILED" => "Human verification failed. Please try again.",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many attempts. Please try again later.",
        other => return StudoraError::auth(format!("Sign-in failed: {other}")),
    };

    StudoraError::auth(message)
}
