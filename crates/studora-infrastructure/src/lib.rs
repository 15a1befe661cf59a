pub mod config_service;
pub mod file_key_value_store;
pub mod memory;
pub mod paths;
pub mod profile_cache;
pub mod rest;
pub mod secret_service;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::file_key_value_store::FileKeyValueStore;
pub use crate::profile_cache::{PROFILE_CACHE_KEY, ProfileCache};
pub use crate::rest::{
    DocumentApiClient, RestCollegeRepository, RestListingRepository, RestProfileRepository,
};
pub use crate::secret_service::SecretServiceImpl;
