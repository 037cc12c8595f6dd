// Application ports - Driven ports (output ports implemented by infrastructure)

pub mod challenge_catalog;
pub mod errors;
pub mod saved_challenge_repository;

pub use challenge_catalog::ChallengeCatalog;
pub use errors::RemoteError;
pub use saved_challenge_repository::SavedChallengeRepository;

#[cfg(test)]
pub use challenge_catalog::MockChallengeCatalog;
#[cfg(test)]
pub use saved_challenge_repository::MockSavedChallengeRepository;
