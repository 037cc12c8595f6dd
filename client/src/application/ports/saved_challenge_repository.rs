// Driven port - saved challenges of the signed-in user

use async_trait::async_trait;

use super::RemoteError;
use crate::domain::ChallengeId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SavedChallengeRepository: Send + Sync {
    /// Apply the inverse of `currently_saved` for `challenge_id` remotely.
    ///
    /// Returns the full post-update list of saved ids, `Ok(None)` when the
    /// backend refused the write, or `Err` when the call itself failed.
    async fn toggle_challenge_save(
        &self,
        challenge_id: &ChallengeId,
        currently_saved: bool,
    ) -> Result<Option<Vec<ChallengeId>>, RemoteError>;

    async fn list_saved_challenge_ids(&self) -> Result<Vec<ChallengeId>, RemoteError>;
}
