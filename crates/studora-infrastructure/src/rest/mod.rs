//! REST document-database boundary.
//!
//! The hosted database exposes collections of JSON documents addressed as
//! `{base}/{collection}/{id}.json`. These modules provide the HTTP client
//! and the repository implementations built on it.

pub mod client;
pub mod college_repository;
pub mod listing_repository;
pub mod profile_repository;

pub use client::DocumentApiClient;
pub use college_repository::RestCollegeRepository;
pub use listing_repository::RestListingRepository;
pub use profile_repository::RestProfileRepository;
