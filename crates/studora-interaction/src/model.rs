//! Generative-model boundary.

use async_trait::async_trait;

use studora_core::error::Result;

/// A hosted text-generation model.
///
/// One-shot request/response; implementations do not retry and do not
/// cache. The recommendation flows sit on top of this trait so tests can
/// substitute a canned model.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Sends one prompt and returns the model's text response.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
