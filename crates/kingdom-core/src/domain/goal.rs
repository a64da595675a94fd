use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::participant::Participant;
use crate::time::Timestamp;

/// Whether a goal belongs to one partner or to both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    Personal,
    #[default]
    Shared,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub frequency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalTask {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// Money put toward a goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub who: Participant,
    pub amount: Decimal,
    pub date: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub financial_target: Decimal,
    #[serde(default)]
    pub saved_amount: Decimal,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub timeframe: String,
    #[serde(default, rename = "type")]
    pub kind: GoalKind,
    pub owner: Participant,
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub tasks: Vec<GoalTask>,
    #[serde(default)]
    pub contributions: Vec<Contribution>,
}

impl Goal {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: GoalKind, owner: Participant) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            financial_target: Decimal::ZERO,
            saved_amount: Decimal::ZERO,
            completed: false,
            timeframe: String::new(),
            kind,
            owner,
            habits: Vec::new(),
            tasks: Vec::new(),
            contributions: Vec::new(),
        }
    }

    pub fn is_personal(&self) -> bool {
        self.kind == GoalKind::Personal
    }
}
