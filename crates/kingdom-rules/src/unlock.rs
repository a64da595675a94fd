//! Coupon unlocking.
//!
//! Every `chores_per_coupon` household deeds a partner completes buy them
//! one coupon drawn from their pool. Deeds are spent oldest first and are
//! never reconsidered once `redeemed_for_coupon` is set.

use kingdom_config::RewardPolicy;
use kingdom_core::{Participant, Snapshot};
use rand::Rng;

use crate::deed::HouseholdDeeds;

/// A decided coupon unlock.
///
/// The coupon must be recorded before (or together with) the redeem flags
/// of `redeemed`; the two are separate writes against an eventually
/// consistent store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponUnlock {
    pub owner: Participant,
    pub title: String,
    /// Ids of the chores spent on this coupon, oldest completion first.
    pub redeemed: Vec<String>,
}

/// Number of deeds `participant` has banked toward their next coupon.
pub fn coupon_progress(snapshot: &Snapshot, participant: Participant) -> usize {
    HouseholdDeeds::new(&snapshot.chores, &snapshot.goals)
        .by(participant)
        .filter(|c| !c.redeemed_for_coupon)
        .count()
}

/// Decides whether `participant` unlocks a coupon.
///
/// Returns `None` while fewer than `chores_per_coupon` unredeemed deeds
/// exist, or when the partner has no coupon titles to draw from; the
/// deeds then stay banked. Otherwise spends exactly one threshold's worth of the oldest
/// deeds on exactly one coupon, leaving the rest banked.
pub fn try_unlock_coupon(
    snapshot: &Snapshot,
    participant: Participant,
    policy: &RewardPolicy,
    rng: &mut impl Rng,
) -> Option<CouponUnlock> {
    let threshold = policy.chores_per_coupon;
    let deeds = HouseholdDeeds::new(&snapshot.chores, &snapshot.goals)
        .unredeemed_for_coupon(participant);
    if threshold == 0 || deeds.len() < threshold {
        return None;
    }

    let pool = policy.pool(participant);
    if pool.is_empty() {
        return None;
    }
    let title = pool[rng.random_range(0..pool.len())].clone();

    Some(CouponUnlock {
        owner: participant,
        title,
        redeemed: deeds[..threshold].iter().map(|c| c.id.clone()).collect(),
    })
}

#[cfg(test)]
#[path = "unlock_tests.rs"]
mod tests;
