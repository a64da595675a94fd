//! Date nights.
//!
//! Unlike coupons, date-night progress is a single counter shared by both
//! partners: every household deed not yet spent on a date night counts,
//! whoever completed it.

use kingdom_config::RewardPolicy;
use kingdom_core::{KingdomError, Snapshot, Timestamp};
use rand::Rng;

use crate::deed::HouseholdDeeds;

pub const DATE_VIBES: [&str; 7] = [
    "Cozy",
    "Fancy",
    "Adventurous",
    "Chill",
    "Romantic",
    "Spooky",
    "Nostalgic",
];

pub const DATE_ACTIVITIES: [&str; 8] = [
    "Mini Golf",
    "Board Games",
    "Stargazing",
    "Arcade",
    "Cooking Class",
    "Museum",
    "Hiking",
    "Movie Marathon",
];

pub const DATE_FOODS: [&str; 8] = [
    "Sushi", "Pizza", "Tacos", "Thai", "Burgers", "Fondue", "Pasta", "Picnic",
];

pub const DATE_PLACES: [&str; 7] = [
    "Living Room Fort",
    "Downtown",
    "New Restaurant",
    "The Park",
    "Beach/Lake",
    "Rooftop Bar",
    "Local Cafe",
];

/// A randomly generated outing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateNightProposal {
    pub vibe: String,
    pub activity: String,
    pub food: String,
    pub place: String,
    pub date: Timestamp,
}

/// Refusal to redeem a date night below the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateNightLocked {
    pub progress: usize,
    pub threshold: usize,
}

impl From<DateNightLocked> for KingdomError {
    fn from(locked: DateNightLocked) -> Self {
        KingdomError::DateNightLocked {
            progress: locked.progress,
            threshold: locked.threshold,
        }
    }
}

/// Combined count of household deeds not yet spent on a date night.
pub fn date_night_progress(snapshot: &Snapshot) -> usize {
    HouseholdDeeds::new(&snapshot.chores, &snapshot.goals)
        .iter()
        .filter(|c| !c.redeemed_for_date)
        .count()
}

/// Draws each attribute independently and uniformly from its list.
pub fn propose_date_night(rng: &mut impl Rng, now: Timestamp) -> DateNightProposal {
    DateNightProposal {
        vibe: pick(rng, &DATE_VIBES),
        activity: pick(rng, &DATE_ACTIVITIES),
        food: pick(rng, &DATE_FOODS),
        place: pick(rng, &DATE_PLACES),
        date: now,
    }
}

fn pick(rng: &mut impl Rng, options: &[&str]) -> String {
    options[rng.random_range(0..options.len())].to_string()
}

/// Picks the chores a logged date night spends.
///
/// Returns exactly `chores_per_date_night` ids, oldest completion first,
/// or [`DateNightLocked`] when fewer are available.
pub fn redeem_date_night(
    snapshot: &Snapshot,
    policy: &RewardPolicy,
) -> Result<Vec<String>, DateNightLocked> {
    let threshold = policy.chores_per_date_night;
    let deeds = HouseholdDeeds::new(&snapshot.chores, &snapshot.goals).unredeemed_for_date();
    if threshold == 0 || deeds.len() < threshold {
        return Err(DateNightLocked {
            progress: deeds.len(),
            threshold,
        });
    }
    Ok(deeds[..threshold].iter().map(|c| c.id.clone()).collect())
}

#[cfg(test)]
#[path = "date_night_tests.rs"]
mod tests;
