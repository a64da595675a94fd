//! Windowed statistics: deeds done and money contributed.

use std::str::FromStr;
use std::sync::OnceLock;

use kingdom_core::{PerParticipant, Snapshot, Timeframe, Timestamp};
use regex::Regex;
use rust_decimal::Decimal;

use crate::deed::HouseholdDeeds;

/// Household deeds per partner completed inside `timeframe`.
///
/// Chores without a completion time are outside every window.
pub fn deed_counts(snapshot: &Snapshot, timeframe: Timeframe, now: Timestamp) -> PerParticipant<usize> {
    let deeds = HouseholdDeeds::new(&snapshot.chores, &snapshot.goals);
    PerParticipant::from_fn(|p| {
        deeds
            .by(p)
            .filter(|c| c.completed_at.is_some_and(|at| timeframe.contains(at, now)))
            .count()
    })
}

/// Money each partner put in during `timeframe`.
///
/// Sums bill payments, shopping trips logged in the activity feed and goal
/// contributions whose dates fall inside the window. Totals saturate at
/// the largest representable amount.
pub fn financial_contributions(
    snapshot: &Snapshot,
    timeframe: Timeframe,
    now: Timestamp,
) -> PerParticipant<Decimal> {
    let in_window = |at: Timestamp| timeframe.contains(at, now);
    let mut totals = PerParticipant::<Decimal>::default();

    for payment in snapshot.bills.iter().flat_map(|b| &b.payments) {
        if in_window(payment.date) {
            totals[payment.who] = totals[payment.who].saturating_add(payment.amount);
        }
    }

    for activity in &snapshot.activities {
        if !activity.created_at.is_some_and(in_window) {
            continue;
        }
        if let Some(cost) = shopping_trip_cost(&activity.description) {
            totals[activity.who] = totals[activity.who].saturating_add(cost);
        }
    }

    for contribution in snapshot.goals.iter().flat_map(|g| &g.contributions) {
        if in_window(contribution.date) {
            let total = &mut totals[contribution.who];
            *total = total.saturating_add(contribution.amount);
        }
    }

    totals
}

/// Extracts the amount from an activity description such as
/// `"Went shopping ($42.10)"`.
pub fn shopping_trip_cost(description: &str) -> Option<Decimal> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    let pattern = PATTERN
        .get_or_init(|| Regex::new(r"\(\$(\d+(?:\.\d+)?)\)").ok())
        .as_ref()?;
    let amount = pattern.captures(description)?.get(1)?;
    Decimal::from_str(amount.as_str()).ok()
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
