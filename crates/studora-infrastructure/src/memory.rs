//! In-memory implementations of the storage boundaries.
//!
//! Used by tests and by local development setups that don't want to touch
//! the hosted services. The profile repository additionally exposes a fetch
//! call counter and failure/latency injection so guard behavior can be
//! asserted precisely.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use studora_core::college::{College, CollegeRepository};
use studora_core::error::{Result, StudoraError};
use studora_core::kv::KeyValueStore;
use studora_core::listing::{ListingRepository, ServiceRequest};
use studora_core::profile::{Profile, ProfileRepository};

/// In-memory [`KeyValueStore`].
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }
}

/// In-memory [`ProfileRepository`] with observable fetch behavior.
#[derive(Default)]
pub struct MemoryProfileRepository {
    profiles: RwLock<HashMap<String, Profile>>,
    find_calls: AtomicUsize,
    failure: RwLock<Option<StudoraError>>,
    latency: RwLock<Option<Duration>>,
}

impl MemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a profile record.
    pub async fn insert(&self, profile: Profile) {
        let mut profiles = self.profiles.write().await;
        profiles.insert(profile.id.clone(), profile);
    }

    /// Number of `find_by_id` calls observed so far.
    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    /// Makes every subsequent fetch fail with the given error.
    pub async fn set_failure(&self, error: StudoraError) {
        *self.failure.write().await = Some(error);
    }

    /// Delays every subsequent fetch by the given duration.
    pub async fn set_latency(&self, latency: Duration) {
        *self.latency.write().await = Some(latency);
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfileRepository {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<Profile>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(latency) = *self.latency.read().await {
            tokio::time::sleep(latency).await;
        }

        if let Some(error) = self.failure.read().await.clone() {
            return Err(error);
        }

        let profiles = self.profiles.read().await;
        Ok(profiles.get(user_id).cloned())
    }

    async fn save(&self, profile: &Profile) -> Result<()> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    async fn list_providers(&self) -> Result<Vec<Profile>> {
        let profiles = self.profiles.read().await;
        let mut providers: Vec<Profile> =
            profiles.values().filter(|p| p.is_provider()).cloned().collect();
        providers.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(providers)
    }
}

/// In-memory [`CollegeRepository`].
#[derive(Default)]
pub struct MemoryCollegeRepository {
    colleges: RwLock<Vec<College>>,
    save_all_calls: AtomicUsize,
}

impl MemoryCollegeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bulk writes observed so far.
    pub fn save_all_calls(&self) -> usize {
        self.save_all_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CollegeRepository for MemoryCollegeRepository {
    async fn find_by_id(&self, college_id: &str) -> Result<Option<College>> {
        let colleges = self.colleges.read().await;
        Ok(colleges.iter().find(|c| c.id == college_id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<College>> {
        Ok(self.colleges.read().await.clone())
    }

    async fn save_all(&self, new_colleges: &[College]) -> Result<()> {
        self.save_all_calls.fetch_add(1, Ordering::SeqCst);
        let mut colleges = self.colleges.write().await;
        for college in new_colleges {
            match colleges.iter_mut().find(|c| c.id == college.id) {
                Some(existing) => *existing = college.clone(),
                None => colleges.push(college.clone()),
            }
        }
        Ok(())
    }
}

/// In-memory [`ListingRepository`].
#[derive(Default)]
pub struct MemoryListingRepository {
    requests: RwLock<HashMap<String, ServiceRequest>>,
}

impl MemoryListingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListingRepository for MemoryListingRepository {
    async fn find_by_id(&self, request_id: &str) -> Result<Option<ServiceRequest>> {
        let requests = self.requests.read().await;
        Ok(requests.get(request_id).cloned())
    }

    async fn save(&self, request: &ServiceRequest) -> Result<()> {
        let mut requests = self.requests.write().await;
        requests.insert(request.id.clone(), request.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ServiceRequest>> {
        let requests = self.requests.read().await;
        let mut all: Vec<ServiceRequest> = requests.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studora_core::profile::AccountRole;

    fn provider(id: &str, username: &str) -> Profile {
        Profile {
            id: id.to_string(),
            name: username.to_string(),
            username: username.to_string(),
            email: format!("{}@example.edu", username),
            college_id: "cbit".to_string(),
            avatar_url: "https://img.example/a.png".to_string(),
            role: AccountRole::Provider,
            skills: vec![],
            tagline: None,
            rating: 0.0,
            earnings: 0.0,
        }
    }

    #[tokio::test]
    async fn test_profile_repository_counts_fetches() {
        let repo = MemoryProfileRepository::new();
        repo.insert(provider("u-1", "jane")).await;

        assert_eq!(repo.find_calls(), 0);
        let found = repo.find_by_id("u-1").await.unwrap();
        assert!(found.is_some());
        assert_eq!(repo.find_calls(), 1);
    }

    #[tokio::test]
    async fn test_profile_repository_injected_failure() {
        let repo = MemoryProfileRepository::new();
        repo.set_failure(StudoraError::api(Some(503), "unavailable"))
            .await;

        assert!(repo.find_by_id("u-1").await.is_err());
    }

    #[tokio::test]
    async fn test_list_providers_sorted_by_username() {
        let repo = MemoryProfileRepository::new();
        repo.insert(provider("u-2", "zara")).await;
        repo.insert(provider("u-1", "arun")).await;

        let providers = repo.list_providers().await.unwrap();
        let usernames: Vec<_> = providers.iter().map(|p| p.username.as_str()).collect();
        assert_eq!(usernames, vec!["arun", "zara"]);
    }

    #[tokio::test]
    async fn test_college_repository_bulk_write_counts() {
        let repo = MemoryCollegeRepository::new();
        assert!(repo.is_empty().await.unwrap());

        repo.save_all(&studora_core::college::default_colleges())
            .await
            .unwrap();

        assert!(!repo.is_empty().await.unwrap());
        assert_eq!(repo.save_all_calls(), 1);
        assert!(repo.find_by_id("cbit").await.unwrap().is_some());
    }
}
