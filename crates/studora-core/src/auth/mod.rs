//! Authentication boundary.
//!
//! Sessions are created and destroyed entirely by the hosted identity
//! provider; the application only observes them. The [`IdentityProvider`]
//! trait covers the credential paths the provider supports (password,
//! federated, phone one-time-code), all converging on the same [`AuthUser`]
//! identity representation.

pub mod pending;
pub mod provider;
pub mod session;

pub use pending::{PendingSignup, SIGNUP_DATA_KEY};
pub use provider::{AuthUser, CaptchaVerifier, IdentityProvider, PhoneCodeSession};
pub use session::AuthSession;
