use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of the `saved_challenges` table, one per (user, challenge) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedChallengeRow {
    pub user_id: String,
    pub challenge_id: String,
}

/// Projection returned by `select=challenge_id` on `saved_challenges`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedChallengeId {
    pub challenge_id: String,
}

/// Row of the `challenges` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeRow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Row of the `resources` table
///
/// Older rows carry the author in `author`, newer ones in `creator`;
/// either (or both) may be missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
}
