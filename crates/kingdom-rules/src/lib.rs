//! Pure household rules for Kingdom.
//!
//! Every rule takes an immutable [`Snapshot`](kingdom_core::Snapshot) (or
//! a slice of it) and returns a decision. Nothing here touches the store;
//! the facade crate turns decisions into writes.
//!
//! - [`deed`] - whether a completed chore counts toward shared scoring
//! - [`unlock`] - converting household deeds into coupons
//! - [`date_night`] - combined progress, proposals and redemption
//! - [`assignment`] - two-party voting on unassigned chores
//! - [`scoreboard`] - all-time scores and who reigns
//! - [`stats`] - deed counts and money contributed per time window
//! - [`views`] - derived lists for the presentation layer
//!
//! Randomness is always injected as `&mut impl Rng`, so a seeded
//! `StdRng` makes draws reproducible.

pub mod assignment;
pub mod date_night;
pub mod deed;
pub mod scoreboard;
pub mod stats;
pub mod unlock;
pub mod views;

pub use assignment::{cast_vote, voting_pool, VoteOutcome};
pub use date_night::{
    date_night_progress, propose_date_night, redeem_date_night, DateNightProposal, DateNightLocked,
};
pub use deed::{is_household_deed, HouseholdDeeds};
pub use scoreboard::{Reign, Scoreboard};
pub use stats::{deed_counts, financial_contributions, shopping_trip_cost};
pub use unlock::{coupon_progress, try_unlock_coupon, CouponUnlock};
pub use views::{BudgetSummary, GoalFilter};
