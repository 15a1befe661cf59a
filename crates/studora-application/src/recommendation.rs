//! Recommendation use cases.
//!
//! Thin composition over the interaction-layer flows: builds the provider
//! profile summary text and forwards to the single-shot model calls.

use std::sync::Arc;

use studora_core::error::{Result, StudoraError};
use studora_core::profile::Profile;
use studora_interaction::{
    GenerativeModel, ProviderSkillFlow, ProviderSkillInput, ProviderSkillRecommendation,
    SeekerSkillFlow, SeekerSkillInput, SeekerSkillRecommendation,
};

/// Skill recommendation service for both marketplace roles.
pub struct RecommendationService {
    provider_flow: ProviderSkillFlow,
    seeker_flow: SeekerSkillFlow,
}

impl RecommendationService {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            provider_flow: ProviderSkillFlow::new(model.clone()),
            seeker_flow: SeekerSkillFlow::new(model),
        }
    }

    /// Recommends skills a provider should list, with a rationale.
    pub async fn recommend_for_provider(
        &self,
        profile: &Profile,
        services_in_demand: &str,
    ) -> Result<ProviderSkillRecommendation> {
        if services_in_demand.trim().is_empty() {
            return Err(StudoraError::validation(
                "Describe the services currently in demand.",
            ));
        }

        let input = ProviderSkillInput {
            profile_summary: profile_summary(profile),
            services_in_demand: services_in_demand.trim().to_string(),
        };
        self.provider_flow.run(&input).await
    }

    /// Recommends the skills a provider would need for a request.
    pub async fn recommend_for_seeker(
        &self,
        request_description: &str,
    ) -> Result<SeekerSkillRecommendation> {
        if request_description.trim().is_empty() {
            return Err(StudoraError::validation("Describe the service you need."));
        }

        let input = SeekerSkillInput {
            request_description: request_description.trim().to_string(),
        };
        self.seeker_flow.run(&input).await
    }
}

/// Renders the free-text profile summary the provider prompt expects.
fn profile_summary(profile: &Profile) -> String {
    let mut summary = format!(
        "{} (@{}), {} at college '{}'",
        profile.name, profile.username, profile.role, profile.college_id
    );

    if !profile.skills.is_empty() {
        summary.push_str(&format!(". Current skills: {}", profile.skills.join(", ")));
    }
    if let Some(tagline) = &profile.tagline {
        summary.push_str(&format!(". Tagline: {}", tagline));
    }
    summary
}
