// Driven port - read-only challenge and resource listings

use async_trait::async_trait;

use super::RemoteError;
use crate::domain::{ChallengeSummary, Resource};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChallengeCatalog: Send + Sync {
    async fn list_challenges(&self) -> Result<Vec<ChallengeSummary>, RemoteError>;
    async fn list_resources(&self) -> Result<Vec<Resource>, RemoteError>;
}
