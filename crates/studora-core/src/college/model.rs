//! College domain model.

use serde::{Deserialize, Serialize};

/// A college a student can sign up under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    pub id: String,
    pub name: String,
    /// Free-text category, e.g. "Engineering" or "Degree".
    pub college_type: String,
    pub city: String,
    pub state: String,
    /// Only approved colleges are offered during signup.
    #[serde(rename = "approvalStatus")]
    pub approved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_field_names() {
        let college = College {
            id: "cbit".to_string(),
            name: "Chaitanya Bharathi Institute of Technology (CBIT)".to_string(),
            college_type: "Engineering".to_string(),
            city: "Hyderabad".to_string(),
            state: "Telangana".to_string(),
            approved: true,
        };

        let json = serde_json::to_value(&college).unwrap();
        assert_eq!(json["collegeType"], "Engineering");
        assert_eq!(json["approvalStatus"], true);
    }
}
