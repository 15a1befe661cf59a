//! Profile domain model.
//!
//! The application-level user record, distinct from the authentication
//! identity. Stored in the hosted document database at `users/{id}` and
//! mirrored into the local cache.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The two marketplace roles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AccountRole {
    /// Offers skills and services.
    Provider,
    /// Requests services.
    #[default]
    Seeker,
}

/// Marketplace user record, keyed by the authentication identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Identity uid this profile belongs to.
    pub id: String,
    pub name: String,
    /// Lowercase handle shown as `@username`.
    pub username: String,
    pub email: String,
    pub college_id: String,
    pub avatar_url: String,
    #[serde(rename = "accountType")]
    pub role: AccountRole,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub earnings: f64,
}

impl Profile {
    pub fn is_provider(&self) -> bool {
        self.role == AccountRole::Provider
    }
}
