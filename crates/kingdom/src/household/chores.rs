//! Chore lifecycle, assignment voting and scoring.

use chrono::{NaiveDate, Utc};
use kingdom_core::{
    Chore, ChoreKind, KingdomError, Participant, PerParticipant, Result, SwipeDirection, Timeframe,
};
use kingdom_rules::{
    cast_vote, deed_counts, financial_contributions, views, voting_pool, Scoreboard, VoteOutcome,
};
use kingdom_store::{Collection, Fields};
use rust_decimal::Decimal;
use serde_json::json;
use tracing::{debug, info, warn};

use super::Household;

/// A chore about to be added.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChore {
    pub title: String,
    /// `None` sends the chore to the voting pool.
    pub assigned_to: Option<Participant>,
    pub kind: ChoreKind,
    pub is_pretty_please: bool,
    pub frequency: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub goal_id: Option<String>,
}

impl NewChore {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            assigned_to: None,
            kind: ChoreKind::Regular,
            is_pretty_please: false,
            frequency: None,
            due_date: None,
            goal_id: None,
        }
    }

    pub fn assigned_to(mut self, participant: Participant) -> Self {
        self.assigned_to = Some(participant);
        self
    }

    pub fn kind(mut self, kind: ChoreKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn pretty_please(mut self) -> Self {
        self.is_pretty_please = true;
        self
    }

    pub fn frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = Some(frequency.into());
        self
    }

    pub fn due(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn for_goal(mut self, goal_id: impl Into<String>) -> Self {
        self.goal_id = Some(goal_id.into());
        self
    }
}

impl Household {
    /// Adds a pending chore created by this profile. Returns the new id, or
    /// `None` if the write failed.
    pub fn add_chore(&mut self, chore: NewChore) -> Option<String> {
        let mut record = Chore::new("", chore.title);
        record.assigned_to = chore.assigned_to;
        record.kind = chore.kind;
        record.is_pretty_please = chore.is_pretty_please;
        record.frequency = chore.frequency;
        record.due_date = chore.due_date;
        record.goal_id = chore.goal_id;
        record.created_by = Some(self.profile);

        let id = self.create_record(Collection::Chores, &record)?;
        debug!(event = "chore_added", chore = %id, assignee = ?record.assigned_to);
        self.sync();
        Some(id)
    }

    /// Marks a pending chore completed by this profile, then re-runs the
    /// coupon check.
    pub fn complete_chore(&mut self, id: &str) -> Result<()> {
        self.refresh();
        let chore = self
            .snapshot
            .chore(id)
            .ok_or_else(|| KingdomError::UnknownChore(id.to_string()))?;
        if chore.is_completed() {
            return Err(KingdomError::AlreadyCompleted(id.to_string()));
        }

        let fields = Fields::new()
            .set("status", "completed")
            .server_timestamp("completedAt")
            .set("completedBy", self.profile.name());
        if self.update(Collection::Chores, id, fields) {
            debug!(event = "chore_completed", chore = %id, by = %self.profile);
        }
        self.sync();
        Ok(())
    }

    /// Deletes a chore once confirmed. Returns whether a delete was sent.
    pub fn delete_chore(&mut self, id: &str) -> Result<bool> {
        self.refresh();
        let chore = self
            .snapshot
            .chore(id)
            .ok_or_else(|| KingdomError::UnknownChore(id.to_string()))?;
        if !self.confirmed(&format!("Delete {}?", chore.title)) {
            return Ok(false);
        }
        let sent = self.delete(Collection::Chores, id);
        self.sync();
        Ok(sent)
    }

    /// Votes `choice` as the assignee of an unassigned chore.
    ///
    /// Agreement assigns the chore. Disagreement clears both votes and
    /// restamps `createdAt`, which sends the chore to the back of the
    /// queue; the returned [`VoteOutcome::Conflict`] is for the user, not
    /// an error. Chores that already have an assignee refuse with
    /// [`KingdomError::AlreadyAssigned`] and nothing is written.
    pub fn vote(&mut self, chore_id: &str, choice: Participant) -> Result<VoteOutcome> {
        self.refresh();
        let chore = self
            .snapshot
            .chore(chore_id)
            .ok_or_else(|| KingdomError::UnknownChore(chore_id.to_string()))?;

        let outcome = cast_vote(chore, self.profile, choice)?;
        let fields = match outcome {
            VoteOutcome::Recorded { voter, choice } => {
                Fields::new().set(format!("votes.{voter}"), choice.name())
            }
            VoteOutcome::Assigned(assignee) => {
                info!(event = "chore_assigned", chore = %chore_id, assignee = %assignee);
                Fields::new()
                    .set("assignedTo", assignee.name())
                    .set("votes", json!({}))
            }
            VoteOutcome::Conflict => {
                warn!(event = "vote_conflict", chore = %chore_id, voter = %self.profile);
                Fields::new()
                    .set("votes", json!({}))
                    .server_timestamp("createdAt")
            }
        };
        self.update(Collection::Chores, chore_id, fields);
        self.sync();
        Ok(outcome)
    }

    /// Votes with a swipe: left picks Pips, right picks Ducky.
    pub fn swipe(&mut self, chore_id: &str, direction: SwipeDirection) -> Result<VoteOutcome> {
        self.vote(chore_id, Participant::from_swipe(direction))
    }

    /// Pending chores assigned to this profile, pretty-please first.
    pub fn my_chores(&self) -> Vec<&Chore> {
        views::my_chores(&self.snapshot, self.profile)
    }

    /// Unassigned chores still waiting for this profile's vote.
    pub fn voting_pool(&self) -> Vec<&Chore> {
        voting_pool(&self.snapshot, self.profile)
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard::compute(&self.snapshot, self.policy.reign_margin)
    }

    /// Household deeds per partner inside `timeframe`, ending now.
    pub fn deed_counts(&self, timeframe: Timeframe) -> PerParticipant<usize> {
        deed_counts(&self.snapshot, timeframe, Utc::now())
    }

    /// Money each partner put in during `timeframe`, ending now.
    pub fn financial_contributions(&self, timeframe: Timeframe) -> PerParticipant<Decimal> {
        financial_contributions(&self.snapshot, timeframe, Utc::now())
    }
}
