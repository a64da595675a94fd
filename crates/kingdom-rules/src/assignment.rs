//! Two-party voting on unassigned chores.
//!
//! Each chore moves through
//! `no votes → one vote → assigned | conflict → no votes`.
//! A single vote may wait indefinitely for the partner.

use kingdom_core::{Chore, KingdomError, Participant, Snapshot};

/// What a vote did to its chore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The partner has not voted yet; the vote is stored.
    Recorded { voter: Participant, choice: Participant },
    /// Both partners agree; the chore is assigned and votes are cleared.
    Assigned(Participant),
    /// The partners disagree; votes are cleared and the chore goes back to
    /// the end of the queue for discussion.
    Conflict,
}

/// Decides the outcome of `voter` choosing `choice` for `chore`.
///
/// Only the partner's vote is consulted; a repeated vote by the same
/// participant simply overwrites their earlier one. Assigned and completed
/// chores are out of the pool and refuse the vote.
pub fn cast_vote(
    chore: &Chore,
    voter: Participant,
    choice: Participant,
) -> Result<VoteOutcome, KingdomError> {
    if chore.is_completed() {
        return Err(KingdomError::AlreadyCompleted(chore.id.clone()));
    }
    if !chore.is_unassigned() {
        return Err(KingdomError::AlreadyAssigned(chore.id.clone()));
    }

    Ok(match chore.vote_of(voter.other()) {
        Some(theirs) if theirs == choice => VoteOutcome::Assigned(choice),
        Some(_) => VoteOutcome::Conflict,
        None => VoteOutcome::Recorded { voter, choice },
    })
}

/// Pending unassigned chores `participant` has not voted on yet, in
/// snapshot order.
pub fn voting_pool(snapshot: &Snapshot, participant: Participant) -> Vec<&Chore> {
    snapshot
        .chores
        .iter()
        .filter(|c| c.is_unassigned() && !c.is_completed() && c.vote_of(participant).is_none())
        .collect()
}

#[cfg(test)]
#[path = "assignment_tests.rs"]
mod tests;
