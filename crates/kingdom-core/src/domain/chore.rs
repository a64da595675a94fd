use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::participant::{blank_as_none, Participant};
use crate::time::Timestamp;

/// Lifecycle of a chore. Moves `Pending → Completed` exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoreStatus {
    #[default]
    Pending,
    Completed,
}

/// What sort of chore this is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoreKind {
    #[default]
    Regular,
    /// A personal whim; never counts toward shared scoring.
    Whim,
    Habit,
}

/// A unit of household work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chore {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default, with = "blank_as_none")]
    pub assigned_to: Option<Participant>,
    #[serde(default)]
    pub status: ChoreStatus,
    #[serde(default, rename = "type")]
    pub kind: ChoreKind,
    #[serde(default)]
    pub is_pretty_please: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
    #[serde(default, with = "blank_as_none")]
    pub completed_by: Option<Participant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, with = "blank_as_none")]
    pub created_by: Option<Participant>,
    #[serde(default)]
    pub redeemed_for_coupon: bool,
    #[serde(default)]
    pub redeemed_for_date: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,
    #[serde(default)]
    pub votes: BTreeMap<Participant, Participant>,
}

impl Chore {
    /// Creates a pending regular chore with no assignee.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            assigned_to: None,
            status: ChoreStatus::Pending,
            kind: ChoreKind::Regular,
            is_pretty_please: false,
            frequency: None,
            due_date: None,
            completed_at: None,
            completed_by: None,
            created_at: None,
            created_by: None,
            redeemed_for_coupon: false,
            redeemed_for_date: false,
            goal_id: None,
            votes: BTreeMap::new(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == ChoreStatus::Completed
    }

    pub fn is_unassigned(&self) -> bool {
        self.assigned_to.is_none()
    }

    /// The assignee `participant` voted for, if they voted.
    pub fn vote_of(&self, participant: Participant) -> Option<Participant> {
        self.votes.get(&participant).copied()
    }

    /// Sort key for "oldest completion first".
    ///
    /// Chores missing a completion time sort first; ties fall back to
    /// creation time and then id so the order is total.
    pub fn completion_key(&self) -> (Option<Timestamp>, Option<Timestamp>, &str) {
        (self.completed_at, self.created_at, self.id.as_str())
    }
}
