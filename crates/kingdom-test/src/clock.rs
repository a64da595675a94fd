//! Fixed instants.
//!
//! All fixtures are placed relative to [`now`], so window arithmetic in
//! tests never depends on the wall clock.

use chrono::{Duration, TimeZone, Utc};
use kingdom_core::Timestamp;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Reference "now": 2024-06-15T12:00:00Z.
pub fn now() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// `now()` shifted by `offset` minutes (negative goes back in time).
pub fn minutes(offset: i64) -> Timestamp {
    now() + Duration::minutes(offset)
}

/// `now()` shifted back by `days` days.
pub fn at(days_ago: i64) -> Timestamp {
    now() - Duration::days(days_ago)
}

/// Deterministic random source.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
