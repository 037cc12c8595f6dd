use crate::application::errors::ApplicationError;
use crate::application::ports::ChallengeCatalog;
use crate::domain::services::filter_resources;
use crate::domain::Resource;

pub async fn execute<C: ChallengeCatalog + ?Sized>(
    catalog: &C,
    query: &str,
) -> Result<Vec<Resource>, ApplicationError> {
    let resources = catalog.list_resources().await?;
    let found: Vec<Resource> = filter_resources(&resources, query)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(
        "[resources] query {:?} matched {} of {}",
        query,
        found.len(),
        resources.len()
    );
    Ok(found)
}
