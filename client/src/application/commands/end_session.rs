use crate::application::state::SaveStateStore;

/// Drop the cached saved set and listing, e.g. on logout.
pub async fn execute(store: &SaveStateStore) {
    store.clear().await;
    tracing::info!("[session] cleared saved challenges");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChallengeId, ChallengeSummary};

    #[tokio::test]
    async fn test_end_session_discards_state() {
        let id = ChallengeId::new("a").unwrap();
        let store = SaveStateStore::new();
        store
            .initialize(vec![id.clone()], vec![ChallengeSummary::new(id.clone(), "Two Sum")])
            .await;

        execute(&store).await;

        assert!(!store.is_saved(&id).await);
        assert!(store.summaries().await.is_empty());
    }
}
