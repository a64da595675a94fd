use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::participant::{Participant, PerParticipant};

/// Monthly income per partner (`settings/income`).
pub type Income = PerParticipant<Decimal>;

/// Castle name and flags (`settings/castle`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastleSettings {
    pub name: String,
    pub kingdom_flag: String,
    pub ducky_flag: String,
    pub pips_flag: String,
}

impl CastleSettings {
    pub fn flag_of(&self, participant: Participant) -> &str {
        match participant {
            Participant::Ducky => &self.ducky_flag,
            Participant::Pips => &self.pips_flag,
        }
    }
}

impl Default for CastleSettings {
    fn default() -> Self {
        Self {
            name: "Our Kingdom".to_string(),
            kingdom_flag: "🏰".to_string(),
            ducky_flag: "🐥".to_string(),
            pips_flag: "🐦".to_string(),
        }
    }
}

/// Display profile of one partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub icon: String,
    pub theme: String,
}

impl Profile {
    pub fn default_for(participant: Participant) -> Self {
        let (icon, theme) = match participant {
            Participant::Ducky => ("🐥", "Yellow"),
            Participant::Pips => ("🐦", "Blue"),
        };
        Self {
            name: participant.name().to_string(),
            icon: icon.to_string(),
            theme: theme.to_string(),
        }
    }
}

/// Profiles keyed by partner (`settings/profiles`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profiles(pub BTreeMap<Participant, Profile>);

impl Profiles {
    /// The stored profile, or the stock one when none is stored.
    pub fn get(&self, participant: Participant) -> Profile {
        self.0
            .get(&participant)
            .cloned()
            .unwrap_or_else(|| Profile::default_for(participant))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    #[serde(other)]
    Closed,
}

/// A wish one partner sent the other from the reward screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRequest {
    pub id: u64,
    pub from: Participant,
    pub item: String,
    #[serde(default)]
    pub status: RequestStatus,
}

/// Store-side reward configuration (`settings/rewards`).
///
/// Every field is optional; absent values fall back to process defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardSettings {
    #[serde(default)]
    pub chores_per_coupon: Option<u32>,
    #[serde(default)]
    pub chores_per_date_night: Option<u32>,
    #[serde(default)]
    pub pools: BTreeMap<Participant, Vec<String>>,
    #[serde(default)]
    pub requests: Vec<RewardRequest>,
}

/// All settings documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub castle: CastleSettings,
    pub income: Income,
    pub rewards: Option<RewardSettings>,
    pub profiles: Profiles,
}
