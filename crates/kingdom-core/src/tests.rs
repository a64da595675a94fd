//! Tests for participants, records and time windows.

use super::*;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::json;

#[test]
fn test_other_is_an_involution() {
    for p in Participant::ALL {
        assert_ne!(p.other(), p);
        assert_eq!(p.other().other(), p);
    }
}

#[test]
fn test_participant_parse_and_display() {
    assert_eq!("Ducky".parse::<Participant>().unwrap(), Participant::Ducky);
    assert_eq!(Participant::Pips.to_string(), "Pips");
    assert!("ducky".parse::<Participant>().is_err());
}

#[test]
fn test_swipe_mapping() {
    assert_eq!(Participant::from_swipe(SwipeDirection::Left), Participant::Pips);
    assert_eq!(Participant::from_swipe(SwipeDirection::Right), Participant::Ducky);
}

#[test]
fn test_per_participant_indexing() {
    let mut counts = PerParticipant::new(1, 2);
    counts[Participant::Pips] += 3;
    assert_eq!(counts[Participant::Ducky], 1);
    assert_eq!(counts[Participant::Pips], 5);

    let names = PerParticipant::from_fn(|p| p.name());
    assert_eq!(names.iter().collect::<Vec<_>>(), vec![
        (Participant::Ducky, &"Ducky"),
        (Participant::Pips, &"Pips"),
    ]);
}

#[test]
fn test_chore_decodes_blank_assignee_as_unassigned() {
    let chore: Chore = serde_json::from_value(json!({
        "id": "c1",
        "title": "Dishes",
        "assignedTo": "",
        "status": "pending",
        "type": "regular",
        "votes": { "Ducky": "Pips" }
    }))
    .unwrap();

    assert!(chore.is_unassigned());
    assert_eq!(chore.vote_of(Participant::Ducky), Some(Participant::Pips));
    assert_eq!(chore.vote_of(Participant::Pips), None);
    assert!(!chore.redeemed_for_coupon);
}

#[test]
fn test_chore_decodes_minimal_document() {
    let chore: Chore = serde_json::from_value(json!({ "title": "Laundry" })).unwrap();
    assert_eq!(chore.status, ChoreStatus::Pending);
    assert_eq!(chore.kind, ChoreKind::Regular);
    assert!(chore.votes.is_empty());
}

#[test]
fn test_completion_key_orders_missing_timestamps_first() {
    let mut early = Chore::new("b", "early");
    early.completed_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    let undated = Chore::new("a", "undated");

    assert!(undated.completion_key() < early.completion_key());
}

#[test]
fn test_income_document_shape() {
    let income: Income = serde_json::from_value(json!({ "ducky": 3000, "pips": "2500.50" })).unwrap();
    assert_eq!(income.ducky, Decimal::from(3000));
    assert_eq!(income.pips, Decimal::new(250050, 2));
}

#[test]
fn test_reward_settings_defaults_when_fields_missing() {
    let rewards: RewardSettings = serde_json::from_value(json!({ "choresPerCoupon": 3 })).unwrap();
    assert_eq!(rewards.chores_per_coupon, Some(3));
    assert_eq!(rewards.chores_per_date_night, None);
    assert!(rewards.pools.is_empty());
}

#[test]
fn test_unknown_request_status_is_closed() {
    let request: RewardRequest =
        serde_json::from_value(json!({ "id": 1, "from": "Pips", "item": "Tea", "status": "granted" }))
            .unwrap();
    assert_eq!(request.status, RequestStatus::Closed);
}

#[test]
fn test_profiles_fall_back_to_stock() {
    let profiles = Profiles::default();
    assert_eq!(profiles.get(Participant::Ducky).icon, "🐥");
    assert_eq!(profiles.get(Participant::Pips).theme, "Blue");
}

#[test]
fn test_timeframe_cycle() {
    assert_eq!(Timeframe::Weekly.cycle(), Timeframe::Monthly);
    assert_eq!(Timeframe::Monthly.cycle(), Timeframe::Yearly);
    assert_eq!(Timeframe::Yearly.cycle(), Timeframe::Weekly);
}

#[test]
fn test_timeframe_since() {
    let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
    assert_eq!(
        Timeframe::Weekly.since(now),
        Utc.with_ymd_and_hms(2024, 3, 24, 12, 0, 0).unwrap()
    );
    assert_eq!(
        Timeframe::Monthly.since(now),
        Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap()
    );
    assert_eq!(
        Timeframe::Yearly.since(now),
        Utc.with_ymd_and_hms(2023, 3, 31, 12, 0, 0).unwrap()
    );
}

#[test]
fn test_timeframe_contains_is_inclusive() {
    let now = Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap();
    let start = Timeframe::Weekly.since(now);
    assert!(Timeframe::Weekly.contains(start, now));
    assert!(!Timeframe::Weekly.contains(start - chrono::Duration::seconds(1), now));
}

#[test]
fn test_snapshot_lookup() {
    let mut snapshot = Snapshot::new();
    let mut done = Chore::new("c2", "Vacuum");
    done.status = ChoreStatus::Completed;
    snapshot.chores = vec![Chore::new("c1", "Dishes"), done];

    assert_eq!(snapshot.chore("c2").map(|c| c.title.as_str()), Some("Vacuum"));
    assert!(snapshot.chore("missing").is_none());
    assert_eq!(snapshot.completed_chores().count(), 1);
}
