use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::participant::Participant;
use crate::time::Timestamp;

/// One payment toward a bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub who: Participant,
    pub amount: Decimal,
    pub date: Timestamp,
}

/// A recurring or one-off household bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub amount: Decimal,
    #[serde(default)]
    pub total_paid: Decimal,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl Bill {
    pub fn new(id: impl Into<String>, title: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            amount,
            total_paid: Decimal::ZERO,
            frequency: String::new(),
            date: String::new(),
            payments: Vec::new(),
        }
    }

    pub fn is_paid(&self) -> bool {
        self.total_paid >= self.amount
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IouStatus {
    #[default]
    Pending,
    Approved,
}

/// A borrow request from one partner to the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Iou {
    #[serde(default)]
    pub id: String,
    pub from: Participant,
    pub to: Participant,
    pub amount: Decimal,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: IouStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}
