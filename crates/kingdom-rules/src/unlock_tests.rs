//! Tests for coupon unlocking.

use super::*;
use kingdom_config::{RewardDefaults, DEFAULT_COUPONS};
use kingdom_core::Participant::{Ducky, Pips};
use kingdom_core::{PerParticipant, RewardSettings};
use kingdom_test::chore::{completed, completed_run, whim};
use kingdom_test::{seeded_rng, snapshot};

#[test]
fn test_below_threshold_unlocks_nothing() {
    let snap = snapshot(completed_run("c", Ducky, 0, 4), vec![]);
    let policy = RewardPolicy::default();

    assert_eq!(coupon_progress(&snap, Ducky), 4);
    assert!(try_unlock_coupon(&snap, Ducky, &policy, &mut seeded_rng(1)).is_none());
}

#[test]
fn test_threshold_unlocks_one_coupon() {
    let snap = snapshot(completed_run("c", Ducky, 0, 5), vec![]);
    let policy = RewardPolicy::default();

    let unlock = try_unlock_coupon(&snap, Ducky, &policy, &mut seeded_rng(1)).unwrap();
    assert_eq!(unlock.owner, Ducky);
    assert!(DEFAULT_COUPONS.contains(&unlock.title.as_str()));
    assert_eq!(unlock.redeemed, vec!["c0", "c1", "c2", "c3", "c4"]);
}

#[test]
fn test_spends_oldest_deeds_first() {
    let mut chores = completed_run("new", Ducky, 100, 3);
    chores.extend(completed_run("old", Ducky, 0, 4));
    let snap = snapshot(chores, vec![]);

    let unlock = try_unlock_coupon(&snap, Ducky, &RewardPolicy::default(), &mut seeded_rng(2)).unwrap();
    assert_eq!(unlock.redeemed, vec!["old0", "old1", "old2", "old3", "new0"]);
}

#[test]
fn test_only_counts_own_unredeemed_deeds() {
    let mut chores = completed_run("d", Ducky, 0, 3);
    chores.extend(completed_run("p", Pips, 0, 5));
    chores.push(whim("w", Ducky, 10));
    let mut spent = completed("spent", Ducky, -5);
    spent.redeemed_for_coupon = true;
    chores.push(spent);
    let snap = snapshot(chores, vec![]);

    assert_eq!(coupon_progress(&snap, Ducky), 3);
    assert!(try_unlock_coupon(&snap, Ducky, &RewardPolicy::default(), &mut seeded_rng(3)).is_none());
    assert!(try_unlock_coupon(&snap, Pips, &RewardPolicy::default(), &mut seeded_rng(3)).is_some());
}

#[test]
fn test_sixth_deed_waits_for_next_batch() {
    let mut chores = completed_run("c", Pips, 0, 6);
    for chore in chores.iter_mut().take(5) {
        chore.redeemed_for_coupon = true;
    }
    let snap = snapshot(chores, vec![]);

    assert_eq!(coupon_progress(&snap, Pips), 1);
    assert!(try_unlock_coupon(&snap, Pips, &RewardPolicy::default(), &mut seeded_rng(4)).is_none());
}

#[test]
fn test_title_comes_from_configured_pool() {
    let settings = RewardSettings {
        chores_per_coupon: Some(2),
        pools: [(Pips, vec!["Pancakes".to_string()])].into_iter().collect(),
        ..RewardSettings::default()
    };
    let policy = RewardDefaults::default().resolve(Some(&settings));
    let snap = snapshot(completed_run("c", Pips, 0, 2), vec![]);

    let unlock = try_unlock_coupon(&snap, Pips, &policy, &mut seeded_rng(5)).unwrap();
    assert_eq!(unlock.title, "Pancakes");
    assert_eq!(unlock.redeemed.len(), 2);
}

#[test]
fn test_same_seed_same_title() {
    let snap = snapshot(completed_run("c", Ducky, 0, 5), vec![]);
    let policy = RewardPolicy::default();

    let a = try_unlock_coupon(&snap, Ducky, &policy, &mut seeded_rng(99)).unwrap();
    let b = try_unlock_coupon(&snap, Ducky, &policy, &mut seeded_rng(99)).unwrap();
    assert_eq!(a.title, b.title);
}

#[test]
fn test_draws_are_spread_over_pool() {
    let snap = snapshot(completed_run("c", Ducky, 0, 5), vec![]);
    let policy = RewardPolicy {
        pools: PerParticipant::new(vec!["A".to_string(), "B".to_string()], vec![]),
        ..RewardPolicy::default()
    };
    let mut rng = seeded_rng(7);

    let titles: std::collections::BTreeSet<_> = (0..64)
        .filter_map(|_| try_unlock_coupon(&snap, Ducky, &policy, &mut rng))
        .map(|u| u.title)
        .collect();
    assert_eq!(titles.len(), 2);
}

#[test]
fn test_empty_pool_keeps_deeds_banked() {
    let snap = snapshot(completed_run("c", Ducky, 0, 5), vec![]);
    let mut policy = RewardPolicy::default();
    policy.pools[Ducky].clear();

    assert!(try_unlock_coupon(&snap, Ducky, &policy, &mut seeded_rng(4)).is_none());
    assert_eq!(coupon_progress(&snap, Ducky), 5);
}
