//! Kingdom - a household tracker for two partners
//!
//! Chores earn coupons, shared effort unlocks date nights, and unassigned
//! chores are settled by a two-party vote. Open a [`Household`] session
//! over any [`DocumentStore`]:
//!
//! ```
//! use std::sync::Arc;
//!
//! use kingdom::prelude::*;
//!
//! let store = Arc::new(InMemoryStore::new());
//! let config = KingdomConfig::default().with_random_seed(7);
//! let mut ducky = Household::open(store, Participant::Ducky, config);
//!
//! for i in 0..5 {
//!     let id = ducky.add_chore(NewChore::new(format!("chore {i}")).assigned_to(Participant::Ducky)).unwrap();
//!     ducky.complete_chore(&id).unwrap();
//! }
//!
//! // Five household deeds buy one coupon.
//! assert_eq!(ducky.available_coupons().len(), 1);
//! assert_eq!(ducky.coupon_progress(), 0);
//! ```

pub use kingdom_config::{ConfigError, KingdomConfig, RewardDefaults, RewardPolicy};
pub use kingdom_core::{
    Chore, ChoreKind, Coupon, EventKind, Goal, GoalKind, KingdomError, Participant, PerParticipant,
    Priority, Result, Snapshot, SwipeDirection, Timeframe,
};
pub use kingdom_rules::{
    is_household_deed, views::goal_progress, BudgetSummary, CouponUnlock, DateNightProposal,
    GoalFilter, Reign, Scoreboard, VoteOutcome,
};
pub use kingdom_store::{DocumentStore, InMemoryStore};

mod confirm;
mod feed;
mod household;

#[cfg(feature = "console")]
pub mod console;

pub use confirm::{Confirm, Decline};
pub use household::{Household, NewChore};

pub mod prelude {
    pub use super::{
        ChoreKind, EventKind, GoalFilter, GoalKind, Household, InMemoryStore, KingdomConfig,
        NewChore, Participant, Priority, Reign, SwipeDirection, Timeframe, VoteOutcome,
    };
}
