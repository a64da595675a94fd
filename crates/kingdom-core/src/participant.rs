//! The two fixed partners of a household.
//!
//! Every per-person rule is symmetric, so code never branches on a name:
//! it asks a [`Participant`] for its [`other`](Participant::other) half or
//! stores one value per person in a [`PerParticipant`].

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the two partners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Participant {
    Ducky,
    Pips,
}

impl Participant {
    /// Both partners, in stable order.
    pub const ALL: [Participant; 2] = [Participant::Ducky, Participant::Pips];

    /// Returns the partner of `self`.
    pub const fn other(self) -> Self {
        match self {
            Participant::Ducky => Participant::Pips,
            Participant::Pips => Participant::Ducky,
        }
    }

    /// Stable name used as the identity in stored documents.
    pub const fn name(self) -> &'static str {
        match self {
            Participant::Ducky => "Ducky",
            Participant::Pips => "Pips",
        }
    }

    /// Maps a swipe on an assignment card to the chosen assignee.
    pub const fn from_swipe(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => Participant::Pips,
            SwipeDirection::Right => Participant::Ducky,
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names neither partner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown participant: {0:?}")]
pub struct ParseParticipantError(pub String);

impl FromStr for Participant {
    type Err = ParseParticipantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Participant::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ParseParticipantError(s.to_string()))
    }
}

/// Direction of a swipe on the assignment deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// One value per partner.
///
/// Serializes as `{"ducky": .., "pips": ..}`, the shape of the income
/// settings document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerParticipant<T> {
    #[serde(default)]
    pub ducky: T,
    #[serde(default)]
    pub pips: T,
}

impl<T> PerParticipant<T> {
    pub fn new(ducky: T, pips: T) -> Self {
        Self { ducky, pips }
    }

    /// Builds both halves by calling `f` once per partner.
    pub fn from_fn(mut f: impl FnMut(Participant) -> T) -> Self {
        Self {
            ducky: f(Participant::Ducky),
            pips: f(Participant::Pips),
        }
    }

    pub fn get(&self, participant: Participant) -> &T {
        match participant {
            Participant::Ducky => &self.ducky,
            Participant::Pips => &self.pips,
        }
    }

    pub fn get_mut(&mut self, participant: Participant) -> &mut T {
        match participant {
            Participant::Ducky => &mut self.ducky,
            Participant::Pips => &mut self.pips,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PerParticipant<U> {
        PerParticipant {
            ducky: f(self.ducky),
            pips: f(self.pips),
        }
    }

    /// Iterates `(participant, value)` pairs in [`Participant::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Participant, &T)> {
        Participant::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

impl<T> Index<Participant> for PerParticipant<T> {
    type Output = T;

    fn index(&self, participant: Participant) -> &T {
        self.get(participant)
    }
}

impl<T> IndexMut<Participant> for PerParticipant<T> {
    fn index_mut(&mut self, participant: Participant) -> &mut T {
        self.get_mut(participant)
    }
}

/// Serde adapter for optional participant fields.
///
/// Stored documents use an empty string for "nobody", so both `""` and a
/// missing value decode as `None`.
pub mod blank_as_none {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Participant;

    pub fn serialize<S: Serializer>(
        value: &Option<Participant>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(p) => p.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Participant>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(name) => name.parse().map(Some).map_err(serde::de::Error::custom),
        }
    }
}
