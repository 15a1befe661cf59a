//! Built-in college seed data.

use super::model::College;

fn college(id: &str, name: &str, college_type: &str, approved: bool) -> College {
    College {
        id: id.to_string(),
        name: name.to_string(),
        college_type: college_type.to_string(),
        city: "Hyderabad".to_string(),
        state: "Telangana".to_string(),
        approved,
    }
}

/// The colleges preloaded into an empty directory at bootstrap.
pub fn default_colleges() -> Vec<College> {
    vec![
        college(
            "cbit",
            "Chaitanya Bharathi Institute of Technology (CBIT)",
            "Engineering",
            true,
        ),
        college("osmania", "Osmania University", "Degree", true),
        college("nizam", "Nizam College", "Degree", true),
        college(
            "st-francis",
            "St. Francis College for Women",
            "Women\u{2019}s",
            true,
        ),
        college("loyola", "Loyola Academy", "Degree", true),
        college(
            "aurora",
            "Aurora\u{2019}s Degree & PG College",
            "Degree",
            true,
        ),
        college(
            "mjcet",
            "Muffakham Jah College of Engineering and Technology",
            "Engineering",
            true,
        ),
        // Not yet approved; kept out of the signup selection.
        college(
            "stanley",
            "Stanley College of Engineering and Technology for Women",
            "Women\u{2019}s",
            false,
        ),
        college("vasavi", "Vasavi College of Engineering", "Engineering", true),
        college(
            "av-college",
            "AV College of Arts, Science and Commerce",
            "Degree",
            true,
        ),
    ]
}
