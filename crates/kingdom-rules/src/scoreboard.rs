//! All-time household-deed scores.

use kingdom_core::{Participant, PerParticipant, Snapshot};

use crate::deed::HouseholdDeeds;

/// Who currently rules the castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reign {
    /// Neither partner leads by more than the margin.
    Shared,
    Ruler(Participant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    pub scores: PerParticipant<usize>,
    pub reign: Reign,
}

impl Scoreboard {
    /// Counts every completed household deed per partner. A partner reigns
    /// once their lead exceeds `margin`.
    pub fn compute(snapshot: &Snapshot, margin: usize) -> Self {
        let deeds = HouseholdDeeds::new(&snapshot.chores, &snapshot.goals);
        let scores = PerParticipant::from_fn(|p| deeds.by(p).count());

        let reign = Participant::ALL
            .into_iter()
            .find(|&p| scores[p] > scores[p.other()] + margin)
            .map_or(Reign::Shared, Reign::Ruler);

        Self { scores, reign }
    }

    /// Signed lead of `participant` over their partner.
    pub fn lead_of(&self, participant: Participant) -> i64 {
        self.scores[participant] as i64 - self.scores[participant.other()] as i64
    }
}

#[cfg(test)]
#[path = "scoreboard_tests.rs"]
mod tests;
