//! Shared test fixtures for Kingdom crates.
//!
//! This crate provides record builders and a fixed clock for testing.
//! It depends only on `kingdom-core` so every other crate can use it.
//!
//! - [`clock`] - fixed instants relative to a reference time
//! - [`chore`] - chore constructors for every lifecycle state
//! - [`goal`] - personal and shared goals
//! - [`money`] - bills, payments and shopping activities
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! kingdom-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use kingdom_test::chore::{completed, pending};
//! use kingdom_test::goal::personal_goal;
//! ```

pub mod chore;
pub mod clock;
pub mod goal;
pub mod money;

pub use clock::{at, minutes, now, seeded_rng};

use kingdom_core::{Chore, Goal, Snapshot};

/// Builds a snapshot holding only chores and goals.
pub fn snapshot(chores: Vec<Chore>, goals: Vec<Goal>) -> Snapshot {
    Snapshot {
        chores,
        goals,
        ..Snapshot::default()
    }
}
