//! Skill recommendation flows.
//!
//! Each flow fills a prompt template, makes one model call, and validates
//! the JSON the model returns against its output type. There is no retry
//! and no fallback recommendation; a payload that violates the schema is
//! a hard failure the caller surfaces to the user.

pub mod provider_skills;
pub mod seeker_skills;

pub use provider_skills::{ProviderSkillFlow, ProviderSkillInput, ProviderSkillRecommendation};
pub use seeker_skills::{SeekerSkillFlow, SeekerSkillInput, SeekerSkillRecommendation};

use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde::de::DeserializeOwned;

use studora_core::error::{Result, StudoraError};

static PROMPTS: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template("provider_skills", provider_skills::PROVIDER_SKILLS_TEMPLATE)
        .expect("Failed to register provider_skills template");
    env.add_template("seeker_skills", seeker_skills::SEEKER_SKILLS_TEMPLATE)
        .expect("Failed to register seeker_skills template");
    env
});

/// Renders one of the registered prompt templates.
pub(crate) fn render_prompt<S: Serialize>(name: &str, input: &S) -> Result<String> {
    let template = PROMPTS
        .get_template(name)
        .map_err(|err| StudoraError::internal(format!("unknown prompt template: {err}")))?;

    template
        .render(input)
        .map_err(|err| StudoraError::internal(format!("prompt rendering failed: {err}")))
}

/// Strips the markdown code fences models sometimes wrap JSON in.
pub(crate) fn extract_json_payload(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim()
}

/// Deserializes a model response against the flow's output type.
pub(crate) fn parse_output<T: DeserializeOwned>(raw: &str) -> Result<T> {
    serde_json::from_str(extract_json_payload(raw)).map_err(|err| {
        StudoraError::validation(format!("model response violated the output schema: {err}"))
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;

    use studora_core::error::Result;

    use crate::model::GenerativeModel;

    /// Model stub returning a fixed reply.
    pub struct CannedModel {
        reply: String,
    }

    impl CannedModel {
        pub fn new(reply: impl Into<String>) -> Self {
            Self {
                reply: reply.into(),
            }
        }
    }

    #[async_trait]
    impl GenerativeModel for CannedModel {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Ok(self.reply.clone())
        }
    }
}
