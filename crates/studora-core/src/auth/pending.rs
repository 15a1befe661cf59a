//! Signup data carried between account creation and profile creation.

use serde::{Deserialize, Serialize};

use crate::profile::AccountRole;

/// Key-value store key for the pending signup record.
pub const SIGNUP_DATA_KEY: &str = "signup_data";

/// Data captured at signup and consumed when the profile is created.
///
/// Stored under [`SIGNUP_DATA_KEY`] after a successful account
/// registration and removed once profile creation merges it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingSignup {
    pub uid: String,
    pub email: String,
    pub college_id: String,
    pub role: AccountRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_json() {
        let pending = PendingSignup {
            uid: "u-1".to_string(),
            email: "jane@example.edu".to_string(),
            college_id: "cbit".to_string(),
            role: AccountRole::Provider,
        };

        let raw = serde_json::to_string(&pending).unwrap();
        assert!(raw.contains("\"collegeId\""));

        let back: PendingSignup = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, pending);
    }
}
