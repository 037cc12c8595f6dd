use crate::application::errors::ApplicationError;
use crate::application::ports::{ChallengeCatalog, SavedChallengeRepository};
use crate::application::state::SaveStateStore;

/// Fill the store with the challenge listing and the user's saved ids.
///
/// Both reads run concurrently. The store is only touched once both succeed.
pub async fn execute<R, C>(
    saved_repo: &R,
    catalog: &C,
    store: &SaveStateStore,
) -> Result<(), ApplicationError>
where
    R: SavedChallengeRepository + ?Sized,
    C: ChallengeCatalog + ?Sized,
{
    let (summaries, saved) =
        tokio::try_join!(catalog.list_challenges(), saved_repo.list_saved_challenge_ids())?;

    tracing::info!(
        "[session] loaded {} challenges, {} saved",
        summaries.len(),
        saved.len()
    );
    store.initialize(saved, summaries).await;
    Ok(())
}
