pub mod flows;
pub mod gemini_client;
pub mod identity_client;
pub mod model;

pub use crate::flows::{
    ProviderSkillFlow, ProviderSkillInput, ProviderSkillRecommendation, SeekerSkillFlow,
    SeekerSkillInput, SeekerSkillRecommendation,
};
pub use crate::gemini_client::GeminiClient;
pub use crate::identity_client::IdentityApiClient;
pub use crate::model::GenerativeModel;
