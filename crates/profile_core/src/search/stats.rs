//! Collection statistics shown in the settings view.

use crate::model::profile::{Feeling, Profile};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProfileStats {
    pub total: usize,
    pub good: usize,
    pub bad: usize,
    pub neutral: usize,
    /// Mean rating; `0.0` for an empty collection.
    pub average_rating: f64,
}

impl ProfileStats {
    pub fn collect(profiles: &[Profile]) -> Self {
        let mut stats = Self {
            total: profiles.len(),
            ..Self::default()
        };
        let mut rating_sum: u64 = 0;

        for profile in profiles {
            match profile.feeling {
                Feeling::Good => stats.good += 1,
                Feeling::Bad => stats.bad += 1,
                Feeling::Neutral => stats.neutral += 1,
            }
            rating_sum += u64::from(profile.rating);
        }

        if stats.total > 0 {
            stats.average_rating = rating_sum as f64 / stats.total as f64;
        }
        stats
    }

    /// Average rating with one decimal, e.g. `"3.7"`.
    pub fn average_rating_label(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}
