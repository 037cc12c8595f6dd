pub mod protocol;

pub use protocol::{ChallengeRow, ResourceRow, SavedChallengeId, SavedChallengeRow};
