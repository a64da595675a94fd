//! Household-deed classification.

use kingdom_core::{Chore, ChoreKind, Goal, Participant};

/// Returns true if `chore` counts toward shared scoring.
///
/// Whims never count. A chore tied to a personal goal does not count. A
/// dangling goal reference counts as a household deed.
pub fn is_household_deed(chore: &Chore, goals: &[Goal]) -> bool {
    if chore.kind == ChoreKind::Whim {
        return false;
    }
    if let Some(goal_id) = &chore.goal_id {
        if let Some(goal) = goals.iter().find(|g| &g.id == goal_id) {
            if goal.is_personal() {
                return false;
            }
        }
    }
    true
}

/// Completed household deeds of a chore list, in list order.
pub struct HouseholdDeeds<'a> {
    chores: &'a [Chore],
    goals: &'a [Goal],
}

impl<'a> HouseholdDeeds<'a> {
    pub fn new(chores: &'a [Chore], goals: &'a [Goal]) -> Self {
        Self { chores, goals }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Chore> + '_ {
        self.chores
            .iter()
            .filter(|c| c.is_completed() && is_household_deed(c, self.goals))
    }

    /// Deeds completed by `participant`.
    pub fn by(&self, participant: Participant) -> impl Iterator<Item = &'a Chore> + '_ {
        self.iter().filter(move |c| c.completed_by == Some(participant))
    }

    /// Deeds not yet spent on a coupon, completed by `participant`, oldest
    /// completion first.
    pub fn unredeemed_for_coupon(&self, participant: Participant) -> Vec<&'a Chore> {
        let mut deeds: Vec<_> = self.by(participant).filter(|c| !c.redeemed_for_coupon).collect();
        deeds.sort_by(|a, b| a.completion_key().cmp(&b.completion_key()));
        deeds
    }

    /// Deeds of either partner not yet spent on a date night, oldest
    /// completion first.
    pub fn unredeemed_for_date(&self) -> Vec<&'a Chore> {
        let mut deeds: Vec<_> = self.iter().filter(|c| !c.redeemed_for_date).collect();
        deeds.sort_by(|a, b| a.completion_key().cmp(&b.completion_key()));
        deeds
    }
}

#[cfg(test)]
#[path = "deed_tests.rs"]
mod tests;
