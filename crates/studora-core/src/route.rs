//! Navigation targets.
//!
//! Routes are pure navigation values; they carry no protocol semantics.
//! The access guard redirects to them and front ends render them as paths.

use std::fmt;

/// A navigable location in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The unauthenticated landing page (account type selection).
    Home,
    Login,
    Signup,
    /// Profile setup for a user who authenticated but never finished onboarding.
    ProfileCreate,
    Dashboard,
    /// Form for posting a new service request.
    NewService,
    /// The signed-in user's own profile.
    MyProfile,
    /// Another user's public profile.
    Profile(String),
}

impl Route {
    /// Renders the route as a URL path.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::ProfileCreate => "/profile/create".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::NewService => "/services/new".to_string(),
            Route::MyProfile => "/profile".to_string(),
            Route::Profile(id) => format!("/profile/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
