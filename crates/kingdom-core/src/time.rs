//! Timestamps and statistics windows.

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned instant. Stored as RFC 3339.
pub type Timestamp = DateTime<Utc>;

/// Look-back window for the statistics panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    #[default]
    Weekly,
    Monthly,
    Yearly,
}

impl Timeframe {
    /// Next window in the weekly → monthly → yearly → weekly rotation.
    pub const fn cycle(self) -> Self {
        match self {
            Timeframe::Weekly => Timeframe::Monthly,
            Timeframe::Monthly => Timeframe::Yearly,
            Timeframe::Yearly => Timeframe::Weekly,
        }
    }

    /// Start of the window ending at `now`.
    ///
    /// Months and years are calendar-relative, so a monthly window from
    /// March 31st starts on the last day of February.
    pub fn since(self, now: Timestamp) -> Timestamp {
        let start = match self {
            Timeframe::Weekly => now.checked_sub_signed(Duration::days(7)),
            Timeframe::Monthly => now.checked_sub_months(Months::new(1)),
            Timeframe::Yearly => now.checked_sub_months(Months::new(12)),
        };
        start.unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Returns true if `at` falls at or after the window start.
    pub fn contains(self, at: Timestamp, now: Timestamp) -> bool {
        at >= self.since(now)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Timeframe::Weekly => "weekly",
            Timeframe::Monthly => "monthly",
            Timeframe::Yearly => "yearly",
        }
    }
}
