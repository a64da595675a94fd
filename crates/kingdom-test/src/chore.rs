//! Chore fixtures.
//!
//! # Example
//!
//! ```
//! use kingdom_core::Participant;
//! use kingdom_test::chore::{completed, pending};
//!
//! let todo = pending("c1", Some(Participant::Ducky));
//! let done = completed("c2", Participant::Pips, 3);
//! assert!(!todo.is_completed());
//! assert!(done.is_completed());
//! ```

use kingdom_core::{Chore, ChoreKind, ChoreStatus, Participant};

use crate::clock::minutes;

/// A pending regular chore, optionally assigned.
pub fn pending(id: &str, assignee: Option<Participant>) -> Chore {
    let mut chore = Chore::new(id, format!("chore {id}"));
    chore.assigned_to = assignee;
    chore
}

/// A chore completed by `who`, `order` minutes after the reference time.
///
/// Larger `order` means a later completion.
pub fn completed(id: &str, who: Participant, order: i64) -> Chore {
    let mut chore = Chore::new(id, format!("chore {id}"));
    chore.assigned_to = Some(who);
    chore.status = ChoreStatus::Completed;
    chore.completed_by = Some(who);
    chore.completed_at = Some(minutes(order));
    chore.created_at = Some(minutes(order - 60));
    chore
}

/// `n` completed chores by `who` with ids `{prefix}0..{prefix}n`, in
/// completion order starting at `start`.
pub fn completed_run(prefix: &str, who: Participant, start: i64, n: usize) -> Vec<Chore> {
    (0..n)
        .map(|i| completed(&format!("{prefix}{i}"), who, start + i as i64))
        .collect()
}

/// A completed personal whim.
pub fn whim(id: &str, who: Participant, order: i64) -> Chore {
    let mut chore = completed(id, who, order);
    chore.kind = ChoreKind::Whim;
    chore
}

/// A completed chore linked to `goal_id`.
pub fn for_goal(id: &str, who: Participant, order: i64, goal_id: &str) -> Chore {
    let mut chore = completed(id, who, order);
    chore.goal_id = Some(goal_id.to_string());
    chore
}

/// An unassigned pending chore carrying the given votes.
pub fn voted(id: &str, votes: &[(Participant, Participant)]) -> Chore {
    let mut chore = pending(id, None);
    chore.votes = votes.iter().copied().collect();
    chore
}
