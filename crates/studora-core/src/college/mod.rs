//! College reference data.
//!
//! Static records used to populate the signup selection. Seeded once at
//! bootstrap, never mutated at runtime.

pub mod model;
pub mod preset;
pub mod repository;

pub use model::College;
pub use preset::default_colleges;
pub use repository::CollegeRepository;
