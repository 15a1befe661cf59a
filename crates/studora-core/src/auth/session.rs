//! Observed authentication session state.

use crate::auth::provider::AuthUser;

/// What the identity provider currently reports for this client.
///
/// `Resolving` holds only during the provider's initial determination;
/// once determined, the session is either signed out or carries the
/// opaque identity of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthSession {
    /// The provider has not yet decided whether a user is signed in.
    Resolving,
    /// No identity is present.
    SignedOut,
    /// A user is signed in under the given identity.
    SignedIn { user_id: String },
}

impl AuthSession {
    /// Creates a signed-in session for the given identity.
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self::SignedIn {
            user_id: user_id.into(),
        }
    }

    /// True while the provider is still determining the session.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Resolving)
    }

    /// The signed-in identity, if any.
    pub fn identity(&self) -> Option<&str> {
        match self {
            Self::SignedIn { user_id } => Some(user_id),
            _ => None,
        }
    }
}

impl From<&AuthUser> for AuthSession {
    fn from(user: &AuthUser) -> Self {
        Self::signed_in(user.uid.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolving_is_loading() {
        assert!(AuthSession::Resolving.is_loading());
        assert!(AuthSession::Resolving.identity().is_none());
    }

    #[test]
    fn test_signed_in_identity() {
        let session = AuthSession::signed_in("u-42");
        assert!(!session.is_loading());
        assert_eq!(session.identity(), Some("u-42"));
    }

    #[test]
    fn test_signed_out_has_no_identity() {
        assert_eq!(AuthSession::SignedOut.identity(), None);
        assert!(!AuthSession::SignedOut.is_loading());
    }
}
