pub mod challenge_summary;
pub mod resource;

pub use challenge_summary::ChallengeSummary;
pub use resource::Resource;
