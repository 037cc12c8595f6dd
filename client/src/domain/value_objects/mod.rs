pub mod challenge_id;
pub mod user_id;

pub use challenge_id::ChallengeId;
pub use user_id::UserId;
