// Host-independent adapters: an in-memory profile store, a no-op status
// sink, and a simulated form control for tests and DOM-less embedders.

pub mod sim;

pub use sim::SimField;

use crate::domain::model::Profile;
use crate::domain::ports::{ProfileStore, StatusSink};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct MemoryProfileStore {
    profile: Arc<Mutex<Option<Profile>>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile: Arc::new(Mutex::new(Some(profile))),
        }
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn load(&self) -> Result<Option<Profile>> {
        Ok(self.profile.lock().await.clone())
    }

    async fn store(&self, profile: &Profile) -> Result<()> {
        *self.profile.lock().await = Some(profile.clone());
        Ok(())
    }
}

/// Status sink for embedders with no user-facing surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStatus;

impl StatusSink for NullStatus {
    fn show_busy(&self) {}

    fn hide_busy(&self) {}

    fn notify(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryProfileStore::new();
        assert!(store.load().await.unwrap().is_none());

        let profile = Profile::basic("Jane", "jane@example.com", "", "", "");
        store.store(&profile).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(profile));
    }
}
