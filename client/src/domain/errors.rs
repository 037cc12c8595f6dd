#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Challenge id must not be empty")]
    EmptyChallengeId,

    #[error("User id must not be empty")]
    EmptyUserId,
}
