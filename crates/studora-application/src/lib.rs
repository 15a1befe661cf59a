pub mod access_guard;
pub mod bootstrap;
pub mod marketplace;
pub mod onboarding;
pub mod recommendation;

pub use crate::access_guard::AccessGuardService;
pub use crate::bootstrap::{
    AppServices, SeedOutcome, build_document_client, build_services, ensure_college_directory,
};
pub use crate::marketplace::{MarketplaceService, NewServiceRequest};
pub use crate::onboarding::{CreateProfileForm, OnboardingService, SignupForm};
pub use crate::recommendation::RecommendationService;
