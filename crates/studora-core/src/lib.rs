pub mod access;
pub mod auth;
pub mod college;
pub mod config;
pub mod error;
pub mod kv;
pub mod listing;
pub mod profile;
pub mod route;
pub mod secret;

// Re-export common error type
pub use access::AccessDecision;
pub use error::{Result, StudoraError};
pub use route::Route;
