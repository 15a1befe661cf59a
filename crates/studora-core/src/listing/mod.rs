//! Service request listings.

pub mod model;
pub mod repository;

pub use model::ServiceRequest;
pub use repository::ListingRepository;
