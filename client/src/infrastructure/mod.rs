// Infrastructure layer - configuration, hosted backend client, CLI
// Implements interfaces defined in application layer

use std::sync::Arc;

use crate::application::ports::{ChallengeCatalog, SavedChallengeRepository};
use crate::application::SaveStateStore;

pub mod config;
pub mod driven;    // Output adapters (REST backend, in-memory backend)
pub mod driving;   // Input adapters (CLI)

use self::config::AppConfig;
use self::driven::{InMemoryBackend, PostgrestClient};

#[derive(Clone)]
pub struct AppState {
    pub saved_repo: Arc<dyn SavedChallengeRepository>,
    pub catalog: Arc<dyn ChallengeCatalog>,
    pub store: SaveStateStore,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        if config.offline {
            tracing::info!("Using in-memory demo backend");
            return Ok(Self::in_memory(Arc::new(InMemoryBackend::demo()?)));
        }

        let remote = config.remote()?;
        tracing::info!("Using hosted backend at {}", remote.base_url);
        let client = Arc::new(PostgrestClient::new(&remote)?);
        Ok(Self {
            saved_repo: client.clone(),
            catalog: client,
            store: SaveStateStore::new(),
        })
    }

    pub fn in_memory(backend: Arc<InMemoryBackend>) -> Self {
        Self {
            saved_repo: backend.clone(),
            catalog: backend,
            store: SaveStateStore::new(),
        }
    }
}
