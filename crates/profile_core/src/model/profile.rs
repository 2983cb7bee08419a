//! Profile domain model.
//!
//! # Responsibility
//! - Define the canonical profile record and its form-input projection.
//! - Provide the boundary checks a form runs before calling the repository.
//!
//! # Invariants
//! - `id` is stable and never reused for another profile.
//! - `created_at` never changes after creation.
//! - `updated_at >= created_at`.

use crate::clock::{truncate_to_millis, Timestamp};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Lowest accepted star rating.
pub const RATING_MIN: u8 = 1;
/// Highest accepted star rating.
pub const RATING_MAX: u8 = 5;
/// Rating pre-selected on a fresh form.
pub const RATING_DEFAULT: u8 = 3;

/// Opaque profile identifier.
///
/// New ids are UUID v4 text; ids loaded from older data are kept verbatim
/// whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProfileId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProfileId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for ProfileId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the user feels about the person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feeling {
    Good,
    Bad,
    #[default]
    Neutral,
}

impl Feeling {
    pub const ALL: [Feeling; 3] = [Feeling::Good, Feeling::Bad, Feeling::Neutral];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Bad => "bad",
            Self::Neutral => "neutral",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "good" => Some(Self::Good),
            "bad" => Some(Self::Bad),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

/// Category of a free-text point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    Positive,
    Negative,
    Interesting,
}

/// Stored profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub feeling: Feeling,
    /// 1..=5 when written through a validated form.
    pub rating: u8,
    #[serde(default)]
    pub positive_points: Vec<String>,
    #[serde(default)]
    pub negative_points: Vec<String>,
    #[serde(default)]
    pub interesting_points: Vec<String>,
    #[serde(default)]
    pub observations: String,
    #[serde(with = "iso_millis")]
    pub created_at: Timestamp,
    #[serde(with = "iso_millis")]
    pub updated_at: Timestamp,
}

impl Profile {
    /// Builds a new record from form data; both timestamps are `now`.
    pub fn from_form(id: ProfileId, data: ProfileFormData, now: Timestamp) -> Self {
        Self {
            id,
            name: data.name,
            feeling: data.feeling,
            rating: data.rating,
            positive_points: data.positive_points,
            negative_points: data.negative_points,
            interesting_points: data.interesting_points,
            observations: data.observations,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites every user-editable field and bumps `updated_at`.
    ///
    /// `updated_at` never moves backwards, so a wall clock stepping back
    /// cannot break `updated_at >= created_at`.
    pub fn apply_form(&mut self, data: ProfileFormData, now: Timestamp) {
        self.name = data.name;
        self.feeling = data.feeling;
        self.rating = data.rating;
        self.positive_points = data.positive_points;
        self.negative_points = data.negative_points;
        self.interesting_points = data.interesting_points;
        self.observations = data.observations;
        self.updated_at = now.max(self.updated_at);
    }

    pub fn points(&self, kind: PointKind) -> &[String] {
        match kind {
            PointKind::Positive => &self.positive_points,
            PointKind::Negative => &self.negative_points,
            PointKind::Interesting => &self.interesting_points,
        }
    }

    /// Case-insensitive substring match over name, observations and every
    /// point entry. `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        let contains = |text: &str| text.to_lowercase().contains(needle);
        contains(&self.name)
            || contains(&self.observations)
            || self.positive_points.iter().any(|point| contains(point))
            || self.negative_points.iter().any(|point| contains(point))
            || self.interesting_points.iter().any(|point| contains(point))
    }
}

/// Editable projection of a profile, as submitted by a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFormData {
    pub name: String,
    pub feeling: Feeling,
    pub rating: u8,
    #[serde(default)]
    pub positive_points: Vec<String>,
    #[serde(default)]
    pub negative_points: Vec<String>,
    #[serde(default)]
    pub interesting_points: Vec<String>,
    #[serde(default)]
    pub observations: String,
}

impl Default for ProfileFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            feeling: Feeling::Neutral,
            rating: RATING_DEFAULT,
            positive_points: Vec::new(),
            negative_points: Vec::new(),
            interesting_points: Vec::new(),
            observations: String::new(),
        }
    }
}

impl ProfileFormData {
    /// Pre-fills an edit form from an existing record.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            feeling: profile.feeling,
            rating: profile.rating,
            positive_points: profile.positive_points.clone(),
            negative_points: profile.negative_points.clone(),
            interesting_points: profile.interesting_points.clone(),
            observations: profile.observations.clone(),
        }
    }

    /// Checks the fields a form must enforce before submitting.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is empty or whitespace only.
    /// - `RatingOutOfRange` when `rating` is outside `1..=5`.
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProfileValidationError::EmptyName);
        }
        if !(RATING_MIN..=RATING_MAX).contains(&self.rating) {
            return Err(ProfileValidationError::RatingOutOfRange(self.rating));
        }
        Ok(())
    }

    /// Appends a trimmed point. Blank input is ignored.
    ///
    /// Returns whether a point was added.
    pub fn add_point(&mut self, kind: PointKind, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.points_mut(kind).push(trimmed.to_string());
        true
    }

    /// Removes the point at `index`; out-of-range indexes are ignored.
    pub fn remove_point(&mut self, kind: PointKind, index: usize) -> Option<String> {
        let points = self.points_mut(kind);
        (index < points.len()).then(|| points.remove(index))
    }

    fn points_mut(&mut self, kind: PointKind) -> &mut Vec<String> {
        match kind {
            PointKind::Positive => &mut self.positive_points,
            PointKind::Negative => &mut self.negative_points,
            PointKind::Interesting => &mut self.interesting_points,
        }
    }
}

/// Form-boundary validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    EmptyName,
    RatingOutOfRange(u8),
}

impl Display for ProfileValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "profile name must not be empty"),
            Self::RatingOutOfRange(value) => write!(
                f,
                "rating {value} is outside {RATING_MIN}..={RATING_MAX}"
            ),
        }
    }
}

impl Error for ProfileValidationError {}

/// ISO-8601 with millisecond precision and a `Z` suffix
/// (`2024-05-01T12:00:00.000Z`).
mod iso_millis {
    use super::truncate_to_millis;
    use crate::clock::Timestamp;
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(at: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| truncate_to_millis(parsed.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::{Feeling, PointKind, Profile, ProfileFormData, ProfileId, ProfileValidationError};
    use chrono::{TimeZone, Utc};

    fn form(name: &str) -> ProfileFormData {
        ProfileFormData {
            name: name.to_string(),
            ..ProfileFormData::default()
        }
    }

    #[test]
    fn validate_rejects_blank_name_and_bad_rating() {
        assert_eq!(form("  ").validate(), Err(ProfileValidationError::EmptyName));

        let mut data = form("Ana");
        data.rating = 0;
        assert_eq!(
            data.validate(),
            Err(ProfileValidationError::RatingOutOfRange(0))
        );
        data.rating = 5;
        assert!(data.validate().is_ok());
    }

    #[test]
    fn add_point_trims_and_skips_blank_input() {
        let mut data = form("Ana");
        assert!(data.add_point(PointKind::Positive, "  Kind  "));
        assert!(!data.add_point(PointKind::Positive, "   "));
        assert!(data.add_point(PointKind::Positive, "Kind"));
        assert_eq!(data.positive_points, vec!["Kind", "Kind"]);

        assert_eq!(data.remove_point(PointKind::Positive, 7), None);
        assert_eq!(
            data.remove_point(PointKind::Positive, 0).as_deref(),
            Some("Kind")
        );
        assert_eq!(data.positive_points.len(), 1);
    }

    #[test]
    fn apply_form_never_moves_updated_at_backwards() {
        let created = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let mut profile = Profile::from_form(ProfileId::generate(), form("Ana"), created);

        let earlier = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        profile.apply_form(form("Ana B"), earlier);

        assert_eq!(profile.name, "Ana B");
        assert_eq!(profile.updated_at, created);
        assert!(profile.updated_at >= profile.created_at);
    }

    #[test]
    fn timestamps_serialize_as_iso_millis() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let mut data = form("Ana");
        data.feeling = Feeling::Good;
        let profile = Profile::from_form(ProfileId::from("p-1"), data, at);

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["createdAt"], "2024-05-01T12:00:00.000Z");
        assert_eq!(json["feeling"], "good");
        assert_eq!(json["positivePoints"], serde_json::json!([]));
    }
}
