//! Skill recommendations for service providers.
//!
//! Given a provider's profile summary and a description of the services
//! currently in demand, recommends skills the provider should list and
//! explains why.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use studora_core::error::{Result, StudoraError};

use super::{parse_output, render_prompt};
use crate::model::GenerativeModel;

pub(crate) const PROVIDER_SKILLS_TEMPLATE: &str = r#"You are an AI skill recommendation tool for a campus service marketplace.

Based on the service provider's profile summary and the current services in
demand, recommend a list of skills that the provider should list to attract
more orders. Also, provide a rationale for why these skills are recommended.

Profile Summary: {{ profile_summary }}
Services in Demand: {{ services_in_demand }}

Format your response as a JSON object with "recommendedSkills" (an array of
strings) and "rationale" (a string) fields.
IMPORTANT: Output ONLY valid JSON, no markdown formatting or code blocks."#;

/// Input to the provider recommendation flow.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderSkillInput {
    /// Summary of the provider's profile: experience, education, skills.
    pub profile_summary: String,
    /// Description of the services currently in high demand.
    pub services_in_demand: String,
}

/// Validated output of the provider recommendation flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSkillRecommendation {
    /// Skills the provider should list on their profile.
    pub recommended_skills: Vec<String>,
    /// Why these skills are recommended.
    pub rationale: String,
}

/// Single-shot recommendation flow for providers.
pub struct ProviderSkillFlow {
    model: Arc<dyn GenerativeModel>,
}

impl ProviderSkillFlow {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Runs the flow once.
    ///
    /// Fails with a validation error when the model's payload is missing a
    /// field, carries no skills, or has a blank rationale; a partial result
    /// is never returned.
    pub async fn run(&self, input: &ProviderSkillInput) -> Result<ProviderSkillRecommendation> {
        let prompt = render_prompt("provider_skills", input)?;
        let raw = self.model.generate(&prompt).await?;
        let recommendation: ProviderSkillRecommendation = parse_output(&raw)?;

        if recommendation.recommended_skills.is_empty() {
            return Err(StudoraError::validation(
                "model returned no recommended skills",
            ));
        }
        if recommendation.rationale.trim().is_empty() {
            return Err(StudoraError::validation("model returned an empty rationale"));
        }

        Ok(recommendation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::test_support::CannedModel;

    fn input() -> ProviderSkillInput {
        ProviderSkillInput {
            profile_summary: "CS junior, tutors math, knows Figma".to_string(),
            services_in_demand: "poster design, exam prep".to_string(),
        }
    }

    #[test]
    fn test_prompt_contains_inputs() {
        let prompt = render_prompt("provider_skills", &input()).unwrap();
        assert!(prompt.contains("CS junior, tutors math, knows Figma"));
        assert!(prompt.contains("poster design, exam prep"));
        assert!(prompt.contains("recommendedSkills"));
    }

    #[tokio::test]
    async fn test_run_returns_validated_recommendation() {
        let model = Arc::new(CannedModel::new(
            r#"{"recommendedSkills":["Graphic Design","Tutoring"],"rationale":"Both are in demand."}"#,
        ));
        let flow = ProviderSkillFlow::new(model);

        let recommendation = flow.run(&input()).await.unwrap();
        assert_eq!(
            recommendation.recommended_skills,
            vec!["Graphic Design", "Tutoring"]
        );
        assert_eq!(recommendation.rationale, "Both are in demand.");
    }

    #[tokio::test]
    async fn test_run_accepts_fenced_payload() {
        let model = Arc::new(CannedModel::new(
            "```json\n{\"recommendedSkills\":[\"Tutoring\"],\"rationale\":\"Exam season.\"}\n```",
        ));
        let flow = ProviderSkillFlow::new(model);

        assert!(flow.run(&input()).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_rationale_fails() {
        let model = Arc::new(CannedModel::new(r#"{"recommendedSkills":["Tutoring"]}"#));
        let flow = ProviderSkillFlow::new(model);

        let err = flow.run(&input()).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_empty_skill_list_fails() {
        let model = Arc::new(CannedModel::new(
            r#"{"recommendedSkills":[],"rationale":"Nothing fits."}"#,
        ));
        let flow = ProviderSkillFlow::new(model);

        let err = flow.run(&input()).await.unwrap_err();
        assert!(err.is_validation());
    }
}
