use std::collections::BTreeSet;

use crate::domain::entities::ChallengeSummary;
use crate::domain::value_objects::ChallengeId;

/// Saved-challenges aggregate root
///
/// Owns the user's saved set together with the challenge listing whose
/// `is_saved` flags are derived from it. Every mutation recomputes the flags
/// before returning, so `summary.is_saved() == saved.contains(&summary.id)`
/// holds whenever the aggregate is observable.
#[derive(Debug, Clone, Default)]
pub struct SavedChallenges {
    saved: BTreeSet<ChallengeId>,
    summaries: Vec<ChallengeSummary>,
}

/// The saved set as it was right before an optimistic flip.
///
/// Deliberately not `Clone`: each toggle owns exactly one snapshot and gives
/// it back through [`SavedChallenges::restore`].
#[derive(Debug, PartialEq, Eq)]
pub struct SavedSetSnapshot(BTreeSet<ChallengeId>);

impl SavedSetSnapshot {
    pub fn ids(&self) -> &BTreeSet<ChallengeId> {
        &self.0
    }
}

impl SavedChallenges {
    pub fn new(
        saved: impl IntoIterator<Item = ChallengeId>,
        summaries: Vec<ChallengeSummary>,
    ) -> Self {
        let mut aggregate = Self {
            saved: saved.into_iter().collect(),
            summaries,
        };
        aggregate.sync_flags();
        aggregate
    }

    pub fn saved(&self) -> &BTreeSet<ChallengeId> {
        &self.saved
    }

    pub fn summaries(&self) -> &[ChallengeSummary] {
        &self.summaries
    }

    pub fn is_saved(&self, id: &ChallengeId) -> bool {
        self.saved.contains(id)
    }

    /// Flip membership of `id` locally and hand back the pre-flip state.
    ///
    /// Returns the snapshot and whether `id` was saved before the flip.
    pub fn flip(&mut self, id: &ChallengeId) -> (SavedSetSnapshot, bool) {
        let snapshot = SavedSetSnapshot(self.saved.clone());
        let was_saved = self.saved.contains(id);
        if was_saved {
            self.saved.remove(id);
        } else {
            self.saved.insert(id.clone());
        }
        self.sync_flags();
        (snapshot, was_saved)
    }

    /// Replace the saved set with the list the backend reported
    pub fn apply_authoritative(&mut self, ids: impl IntoIterator<Item = ChallengeId>) {
        self.saved = ids.into_iter().collect();
        self.sync_flags();
    }

    pub fn restore(&mut self, snapshot: SavedSetSnapshot) {
        self.saved = snapshot.0;
        self.sync_flags();
    }

    pub fn replace_summaries(&mut self, summaries: Vec<ChallengeSummary>) {
        self.summaries = summaries;
        self.sync_flags();
    }

    pub fn clear(&mut self) {
        self.saved.clear();
        self.summaries.clear();
    }

    pub fn is_consistent(&self) -> bool {
        self.summaries
            .iter()
            .all(|summary| summary.is_saved() == self.saved.contains(&summary.id))
    }

    fn sync_flags(&mut self) {
        for summary in &mut self.summaries {
            summary.set_saved(self.saved.contains(&summary.id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ChallengeId {
        ChallengeId::new(s).unwrap()
    }

    fn listing() -> Vec<ChallengeSummary> {
        ["a", "b", "c"]
            .iter()
            .map(|s| ChallengeSummary::new(id(s), format!("Challenge {}", s)))
            .collect()
    }

    fn flags(aggregate: &SavedChallenges) -> Vec<bool> {
        aggregate.summaries().iter().map(|s| s.is_saved()).collect()
    }

    #[test]
    fn test_new_derives_flags() {
        let aggregate = SavedChallenges::new([id("a")], listing());
        assert_eq!(flags(&aggregate), vec![true, false, false]);
        assert!(aggregate.is_consistent());
    }

    #[test]
    fn test_flip_adds_missing_id() {
        let mut aggregate = SavedChallenges::new([id("a"), id("b")], listing());
        let (snapshot, was_saved) = aggregate.flip(&id("c"));

        assert!(!was_saved);
        assert!(aggregate.is_saved(&id("c")));
        assert_eq!(flags(&aggregate), vec![true, true, true]);
        assert_eq!(snapshot.ids(), &BTreeSet::from([id("a"), id("b")]));
    }

    #[test]
    fn test_flip_then_restore_returns_exact_snapshot() {
        let mut aggregate = SavedChallenges::new([id("a"), id("b")], listing());
        let (snapshot, was_saved) = aggregate.flip(&id("a"));

        assert!(was_saved);
        assert_eq!(aggregate.saved(), &BTreeSet::from([id("b")]));
        assert_eq!(flags(&aggregate), vec![false, true, false]);

        aggregate.restore(snapshot);
        assert_eq!(aggregate.saved(), &BTreeSet::from([id("a"), id("b")]));
        assert_eq!(flags(&aggregate), vec![true, true, false]);
    }

    #[test]
    fn test_authoritative_list_wins_over_optimistic_guess() {
        let mut aggregate = SavedChallenges::new([id("a")], listing());
        aggregate.flip(&id("b"));

        // another device unsaved "a" meanwhile
        aggregate.apply_authoritative([id("b")]);
        assert_eq!(flags(&aggregate), vec![false, true, false]);
    }

    #[test]
    fn test_saved_ids_outside_listing_are_kept() {
        let mut aggregate = SavedChallenges::new([id("zzz")], listing());
        assert!(aggregate.is_saved(&id("zzz")));
        assert_eq!(flags(&aggregate), vec![false, false, false]);

        aggregate.replace_summaries(vec![ChallengeSummary::new(id("zzz"), "Late")]);
        assert_eq!(flags(&aggregate), vec![true]);
    }

    #[test]
    fn test_clear() {
        let mut aggregate = SavedChallenges::new([id("a")], listing());
        aggregate.clear();
        assert!(aggregate.saved().is_empty());
        assert!(aggregate.summaries().is_empty());
    }
}
