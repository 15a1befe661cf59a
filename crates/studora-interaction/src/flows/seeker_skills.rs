//! Skill recommendations for service seekers.
//!
//! Given a service request description, suggests the skills a provider
//! would need to fulfill it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use studora_core::error::{Result, StudoraError};

use super::{parse_output, render_prompt};
use crate::model::GenerativeModel;

pub(crate) const SEEKER_SKILLS_TEMPLATE: &str = r#"You are a service recommendation expert. Based on the service request
description provided, suggest the most relevant skills a service provider
should have.

Service Request Description: {{ request_description }}

Provide a list of skills that would be most beneficial for a service
provider to possess to fulfill this request.
Format your response as a JSON object with a "recommendedSkills" field (an
array of strings).
IMPORTANT: Output ONLY valid JSON, no markdown formatting or code blocks."#;

/// Input to the seeker recommendation flow.
#[derive(Debug, Clone, Serialize)]
pub struct SeekerSkillInput {
    pub request_description: String,
}

/// Validated output of the seeker recommendation flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeekerSkillRecommendation {
    pub recommended_skills: Vec<String>,
}

/// Single-shot recommendation flow for seekers.
pub struct SeekerSkillFlow {
    model: Arc<dyn GenerativeModel>,
}

impl SeekerSkillFlow {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Runs the flow once. An empty skill list is a schema violation.
    pub async fn run(&self, input: &SeekerSkillInput) -> Result<SeekerSkillRecommendation> {
        let prompt = render_prompt("seeker_skills", input)?;
        let raw = self.model.generate(&prompt).await?;
        let recommendation: SeekerSkillRecommendation = parse_output(&raw)?;

        if recommendation.recommended_skills.is_empty() {
            return Err(StudoraError::validation(
                "model returned no recommended skills",
            ));
        }

        Ok(recommendation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::test_support::CannedModel;

    fn input() -> SeekerSkillInput {
        SeekerSkillInput {
            request_description: "Need an A3 poster for the college fest by Friday".to_string(),
        }
    }

    #[test]
    fn test_prompt_contains_request() {
        let prompt = render_prompt("seeker_skills", &input()).unwrap();
        assert!(prompt.contains("A3 poster for the college fest"));
    }

    #[tokio::test]
    async fn test_run_returns_skills() {
        let model = Arc::new(CannedModel::new(
            r#"{"recommendedSkills":["Graphic Design","Illustration"]}"#,
        ));
        let flow = SeekerSkillFlow::new(model);

        let recommendation = flow.run(&input()).await.unwrap();
        assert_eq!(
            recommendation.recommended_skills,
            vec!["Graphic Design", "Illustration"]
        );
    }

    #[tokio::test]
    async fn test_malformed_payload_fails() {
        let model = Arc::new(CannedModel::new(r#"{"skills":["wrong field"]}"#));
        let flow = SeekerSkillFlow::new(model);

        let err = flow.run(&input()).await.unwrap_err();
        assert!(err.is_validation());
    }
}
