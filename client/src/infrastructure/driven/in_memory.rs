use std::collections::BTreeSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{ChallengeCatalog, RemoteError, SavedChallengeRepository};
use crate::domain::{ChallengeId, ChallengeSummary, Resource};

/// How the in-memory backend should fail the next toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Refuse the write (`Ok(None)`)
    Reject,
    /// Fail the call itself (`Err`)
    Transport,
}

/// Backend kept entirely in process memory. Backs offline mode and tests.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    saved: RwLock<BTreeSet<ChallengeId>>,
    challenges: Vec<ChallengeSummary>,
    resources: Vec<Resource>,
    failure: RwLock<Option<FailureMode>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_saved(mut self, ids: impl IntoIterator<Item = ChallengeId>) -> Self {
        self.saved = RwLock::new(ids.into_iter().collect());
        self
    }

    pub fn with_challenges(mut self, challenges: Vec<ChallengeSummary>) -> Self {
        self.challenges = challenges;
        self
    }

    pub fn with_resources(mut self, resources: Vec<Resource>) -> Self {
        self.resources = resources;
        self
    }

    /// Small fixed catalog used by `--offline`
    pub fn demo() -> Result<Self, crate::domain::DomainError> {
        let challenges = vec![
            ChallengeSummary::new(ChallengeId::new("two-sum")?, "Two Sum").with_category("Arrays"),
            ChallengeSummary::new(ChallengeId::new("fizzbuzz")?, "FizzBuzz").with_category("Basics"),
            ChallengeSummary::new(ChallengeId::new("lru-cache")?, "LRU Cache")
                .with_category("Data Structures"),
            ChallengeSummary::new(ChallengeId::new("todo-app")?, "Todo App").with_category("Frontend"),
        ];
        let resources = vec![
            Resource::new("react-basics", "React Basics")
                .with_description("Components, props and hooks")
                .with_category("Frontend")
                .with_author("Jane Doe"),
            Resource::new("css-grid", "CSS Grid")
                .with_description("Two-dimensional layouts")
                .with_category("Styling")
                .with_creator("John Roe"),
            Resource::new("big-o", "Big-O Cheatsheet")
                .with_description("Complexity of common operations")
                .with_category("Algorithms")
                .with_author("Ada")
                .with_creator("Lovelace"),
        ];

        Ok(Self::new()
            .with_saved([ChallengeId::new("fizzbuzz")?])
            .with_challenges(challenges)
            .with_resources(resources))
    }

    pub async fn set_failure(&self, mode: Option<FailureMode>) {
        *self.failure.write().await = mode;
    }

    pub async fn saved_ids(&self) -> BTreeSet<ChallengeId> {
        self.saved.read().await.clone()
    }
}

#[async_trait]
impl SavedChallengeRepository for InMemoryBackend {
    async fn toggle_challenge_save(
        &self,
        challenge_id: &ChallengeId,
        currently_saved: bool,
    ) -> Result<Option<Vec<ChallengeId>>, RemoteError> {
        match *self.failure.read().await {
            Some(FailureMode::Reject) => return Ok(None),
            Some(FailureMode::Transport) => {
                return Err(RemoteError::Transport("in-memory backend offline".to_string()))
            }
            None => {}
        }

        let mut saved = self.saved.write().await;
        if currently_saved {
            saved.remove(challenge_id);
        } else {
            saved.insert(challenge_id.clone());
        }
        Ok(Some(saved.iter().cloned().collect()))
    }

    async fn list_saved_challenge_ids(&self) -> Result<Vec<ChallengeId>, RemoteError> {
        Ok(self.saved.read().await.iter().cloned().collect())
    }
}

#[async_trait]
impl ChallengeCatalog for InMemoryBackend {
    async fn list_challenges(&self) -> Result<Vec<ChallengeSummary>, RemoteError> {
        Ok(self.challenges.clone())
    }

    async fn list_resources(&self) -> Result<Vec<Resource>, RemoteError> {
        Ok(self.resources.clone())
    }
}
