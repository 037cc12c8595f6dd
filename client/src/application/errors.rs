use super::ports::RemoteError;

#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Remote(#[from] RemoteError),
}
