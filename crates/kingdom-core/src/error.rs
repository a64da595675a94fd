//! Error types for Kingdom

use thiserror::Error;

/// Main error type for household operations.
#[derive(Debug, Error)]
pub enum KingdomError {
    /// No chore with this id exists in the current snapshot.
    #[error("Unknown chore: {0}")]
    UnknownChore(String),

    /// No goal with this id exists in the current snapshot.
    #[error("Unknown goal: {0}")]
    UnknownGoal(String),

    /// No bill with this id exists in the current snapshot.
    #[error("Unknown bill: {0}")]
    UnknownBill(String),

    /// No calendar event with this id exists in the current snapshot.
    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    /// No coupon with this id exists in the current snapshot.
    #[error("Unknown coupon: {0}")]
    UnknownCoupon(String),

    /// No IOU with this id exists in the current snapshot.
    #[error("Unknown IOU: {0}")]
    UnknownIou(String),

    /// No shopping item with this id exists in the current snapshot.
    #[error("Unknown shopping item: {0}")]
    UnknownItem(String),

    /// The chore already moved to `completed`.
    #[error("Chore {0} is already completed")]
    AlreadyCompleted(String),

    /// The chore already has an assignee, so it is out of the voting pool.
    #[error("Chore {0} is already assigned")]
    AlreadyAssigned(String),

    /// Not enough unredeemed household deeds to log a date night.
    #[error("Date night locked: {progress}/{threshold} deeds")]
    DateNightLocked { progress: usize, threshold: usize },

    /// A money amount was zero or negative where a positive one is required.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// Result type alias for Kingdom operations
pub type Result<T> = std::result::Result<T, KingdomError>;
