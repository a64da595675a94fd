//! Typed records for the documents held by the external store.
//!
//! Field names follow the stored documents (camelCase) so a snapshot
//! document decodes directly into its record. The document id is injected
//! into the `id` field by the store layer.

mod chore;
mod finance;
mod goal;
mod household;
mod reward;
mod settings;

pub use chore::{Chore, ChoreKind, ChoreStatus};
pub use finance::{Bill, Iou, IouStatus, Payment};
pub use goal::{Contribution, Goal, GoalKind, GoalTask, Habit};
pub use household::{Activity, Announcement, EventKind, KingdomEvent, Priority, ShoppingItem};
pub use reward::{Coupon, DateNightLog};
pub use settings::{
    CastleSettings, Income, Profile, Profiles, RequestStatus, RewardRequest, RewardSettings,
    Settings,
};
