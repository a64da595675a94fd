//! Kingdom Core - Core types for the two-partner household tracker
//!
//! This crate provides the fundamental abstractions shared by every other
//! Kingdom crate:
//! - [`Participant`] and [`PerParticipant`] for the two fixed partners
//! - Typed records mirroring the documents of the external store
//! - [`Snapshot`], the immutable view the rule engines evaluate
//! - [`Timeframe`] windows for statistics
//! - [`KingdomError`], the shared error type

pub mod domain;
pub mod error;
pub mod participant;
pub mod snapshot;
pub mod time;

#[cfg(test)]
mod tests;

pub use domain::{
    Activity, Announcement, Bill, CastleSettings, Chore, ChoreKind, ChoreStatus, Contribution,
    Coupon, DateNightLog, EventKind, Goal, GoalKind, GoalTask, Habit, Income, Iou, IouStatus,
    KingdomEvent, Payment, Priority, Profile, Profiles, RequestStatus, RewardRequest,
    RewardSettings, Settings, ShoppingItem,
};
pub use error::{KingdomError, Result};
pub use participant::{ParseParticipantError, Participant, PerParticipant, SwipeDirection};
pub use snapshot::Snapshot;
pub use time::{Timeframe, Timestamp};
