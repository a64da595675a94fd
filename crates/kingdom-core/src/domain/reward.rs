use serde::{Deserialize, Serialize};

use crate::participant::Participant;
use crate::time::Timestamp;

/// A redeemable reward. `is_used` only ever goes from false to true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub owner: Participant,
    #[serde(default)]
    pub is_used: bool,
}

/// A logged date night.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateNightLog {
    #[serde(default)]
    pub id: String,
    pub vibe: String,
    pub activity: String,
    pub food: String,
    pub place: String,
    pub date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}
