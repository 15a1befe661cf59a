//! Service request domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A service request posted by a seeker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub id: String,
    /// Identity uid of the seeker who posted the request.
    pub requester_id: String,
    pub title: String,
    pub description: String,
    /// Skills the requester believes the job needs.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl ServiceRequest {
    /// Creates a new request with a fresh ID and the current timestamp.
    pub fn new(
        requester_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        skills: Vec<String>,
        budget: Option<f64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            requester_id: requester_id.into(),
            title: title.into(),
            description: description.into(),
            skills,
            budget,
            created_at: Utc::now(),
        }
    }
}
