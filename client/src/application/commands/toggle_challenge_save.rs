use crate::application::ports::SavedChallengeRepository;
use crate::application::state::SaveStateStore;
use crate::domain::ChallengeId;

/// Optimistically flip the saved state of one challenge and reconcile it with
/// the backend.
///
/// The local flip is visible immediately. A successful remote call replaces
/// the saved set with the list the backend returned; a refused write or a
/// failed call puts back the set captured right before this call's flip.
/// Failures are logged, never returned.
pub async fn execute<R: SavedChallengeRepository + ?Sized>(
    repo: &R,
    store: &SaveStateStore,
    challenge_id: &ChallengeId,
) {
    let (snapshot, was_saved) = store.flip(challenge_id).await;
    tracing::debug!(
        "[challenge {}] optimistic toggle, was_saved={}",
        challenge_id,
        was_saved
    );

    match repo.toggle_challenge_save(challenge_id, was_saved).await {
        Ok(Some(saved_ids)) => {
            tracing::info!(
                "[challenge {}] {} ({} saved)",
                challenge_id,
                if was_saved { "unsaved" } else { "saved" },
                saved_ids.len()
            );
            store.apply_authoritative(saved_ids).await;
        }
        Ok(None) => {
            tracing::error!(
                "[challenge {}] backend rejected save toggle, was_saved={}, reverting",
                challenge_id,
                was_saved
            );
            store.restore(snapshot).await;
        }
        Err(e) => {
            tracing::error!(
                "[challenge {}] save toggle failed, was_saved={}, reverting: {}",
                challenge_id,
                was_saved,
                e
            );
            store.restore(snapshot).await;
        }
    }
}
