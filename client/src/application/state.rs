use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{ChallengeId, ChallengeSummary, SavedChallenges, SavedSetSnapshot};

/// Shared handle to the session's saved-challenges state.
///
/// Commands receive it explicitly. Every write goes through a single lock
/// acquisition, so readers never see the saved set and the `is_saved` flags
/// disagree.
#[derive(Debug, Clone, Default)]
pub struct SaveStateStore {
    inner: Arc<RwLock<SavedChallenges>>,
}

impl SaveStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn initialize(&self, saved: Vec<ChallengeId>, summaries: Vec<ChallengeSummary>) {
        *self.inner.write().await = SavedChallenges::new(saved, summaries);
    }

    pub async fn flip(&self, id: &ChallengeId) -> (SavedSetSnapshot, bool) {
        self.inner.write().await.flip(id)
    }

    pub async fn apply_authoritative(&self, ids: Vec<ChallengeId>) {
        self.inner.write().await.apply_authoritative(ids);
    }

    pub async fn restore(&self, snapshot: SavedSetSnapshot) {
        self.inner.write().await.restore(snapshot);
    }

    pub async fn replace_summaries(&self, summaries: Vec<ChallengeSummary>) {
        self.inner.write().await.replace_summaries(summaries);
    }

    pub async fn clear(&self) {
        self.inner.write().await.clear();
    }

    pub async fn saved_ids(&self) -> BTreeSet<ChallengeId> {
        self.inner.read().await.saved().clone()
    }

    pub async fn summaries(&self) -> Vec<ChallengeSummary> {
        self.inner.read().await.summaries().to_vec()
    }

    pub async fn is_saved(&self, id: &ChallengeId) -> bool {
        self.inner.read().await.is_saved(id)
    }

    pub async fn is_consistent(&self) -> bool {
        self.inner.read().await.is_consistent()
    }
}
