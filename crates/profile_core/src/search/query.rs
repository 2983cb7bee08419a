//! Search, filter and sort over a profile slice.

use crate::model::profile::{Feeling, Profile};
use std::cmp::Ordering;

/// Ordering of composite query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most recently updated first.
    #[default]
    UpdatedDesc,
    /// Most recently created first.
    CreatedDesc,
    /// Name ascending, case-insensitive.
    NameAsc,
    /// Highest rating first.
    RatingDesc,
}

/// Composite query as driven by the search and filter panel.
///
/// `ProfileQuery::default()` is the cleared state: no text, no filters,
/// sorted by `UpdatedDesc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileQuery {
    pub text: String,
    pub feeling: Option<Feeling>,
    pub min_rating: Option<u8>,
    pub sort: SortKey,
}

impl ProfileQuery {
    /// Runs search, then the feeling filter, then the rating filter, then a
    /// stable sort.
    pub fn apply(&self, profiles: &[Profile]) -> Vec<Profile> {
        let needle = normalized_needle(&self.text);
        let mut matched: Vec<Profile> = profiles
            .iter()
            .filter(|profile| {
                needle
                    .as_deref()
                    .map_or(true, |needle| profile.matches_lowercase(needle))
            })
            .filter(|profile| matches_filter(profile, self.feeling, self.min_rating))
            .cloned()
            .collect();
        sort_profiles(&mut matched, self.sort);
        matched
    }

    /// Number of active narrowing criteria (text, feeling, rating).
    pub fn active_filter_count(&self) -> usize {
        [
            !self.text.trim().is_empty(),
            self.feeling.is_some(),
            self.min_rating.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Case-insensitive substring search over name, observations and points.
///
/// A blank query returns every profile in its original order.
pub fn search_profiles(profiles: &[Profile], query: &str) -> Vec<Profile> {
    match normalized_needle(query) {
        Some(needle) => profiles
            .iter()
            .filter(|profile| profile.matches_lowercase(&needle))
            .cloned()
            .collect(),
        None => profiles.to_vec(),
    }
}

/// Keeps profiles matching `feeling` (when given) and rated at least
/// `min_rating` (when given). Order is preserved.
pub fn filter_profiles(
    profiles: &[Profile],
    feeling: Option<Feeling>,
    min_rating: Option<u8>,
) -> Vec<Profile> {
    profiles
        .iter()
        .filter(|profile| matches_filter(profile, feeling, min_rating))
        .cloned()
        .collect()
}

/// Stable in-place sort by `key`.
pub fn sort_profiles(profiles: &mut [Profile], key: SortKey) {
    match key {
        SortKey::UpdatedDesc => profiles.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        SortKey::CreatedDesc => profiles.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::NameAsc => profiles.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::RatingDesc => profiles.sort_by(|a, b| b.rating.cmp(&a.rating)),
    }
}

fn matches_filter(profile: &Profile, feeling: Option<Feeling>, min_rating: Option<u8>) -> bool {
    feeling.map_or(true, |feeling| profile.feeling == feeling)
        && min_rating.map_or(true, |min| profile.rating >= min)
}

fn normalized_needle(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        return None;
    }
    Some(query.to_lowercase())
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
