pub mod saved_challenges;

pub use saved_challenges::{SavedChallenges, SavedSetSnapshot};
