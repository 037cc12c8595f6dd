pub mod end_session;
pub mod load_saved_challenges;
pub mod search_resources;
pub mod toggle_challenge_save;
