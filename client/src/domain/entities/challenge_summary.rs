use chrono::{DateTime, Utc};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::ChallengeId;

/// Display data for one challenge in a listing
///
/// `is_saved` mirrors membership in the user's saved set. Only
/// [`SavedChallenges`](crate::domain::aggregates::SavedChallenges) writes it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeSummary {
    pub id: ChallengeId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    is_saved: bool,
}

impl ChallengeSummary {
    pub fn new(id: ChallengeId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            category: String::new(),
            difficulty: None,
            created_at: None,
            is_saved: false,
        }
    }

    pub fn from_row(row: shared::ChallengeRow) -> Result<Self, DomainError> {
        Ok(Self {
            id: ChallengeId::new(row.id)?,
            title: row.title,
            description: row.description.unwrap_or_default(),
            category: row.category.unwrap_or_default(),
            difficulty: row.difficulty,
            created_at: row.created_at,
            is_saved: false,
        })
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn is_saved(&self) -> bool {
        self.is_saved
    }

    pub(crate) fn set_saved(&mut self, saved: bool) {
        self.is_saved = saved;
    }
}
