//! End-to-end household scenarios against the in-memory store.

use std::str::FromStr;
use std::sync::Arc;

use kingdom::prelude::*;
use kingdom::{KingdomError, RewardPolicy};
use kingdom_config::DEFAULT_COUPONS;
use kingdom_store::{Collection, DocumentStore, Fields};
use rust_decimal::Decimal;
use serde_json::json;

use kingdom::Participant::{Ducky, Pips};

fn store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::new())
}

fn session(store: &Arc<InMemoryStore>, profile: Participant) -> Household {
    let config = KingdomConfig::default().with_random_seed(42);
    Household::open(store.clone(), profile, config).with_confirm(|_: &str| true)
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Adds and completes `n` chores assigned to the session's profile.
fn complete_n(household: &mut Household, prefix: &str, n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let me = household.profile();
            let id = household
                .add_chore(NewChore::new(format!("{prefix} {i}")).assigned_to(me))
                .unwrap();
            household.complete_chore(&id).unwrap();
            id
        })
        .collect()
}

fn flag(store: &InMemoryStore, id: &str, field: &str) -> bool {
    store
        .document(Collection::Chores, id)
        .and_then(|d| d.get(field).and_then(|v| v.as_bool()))
        .unwrap_or(false)
}

#[test]
fn test_five_deeds_unlock_one_coupon() {
    let store = store();
    let mut ducky = session(&store, Ducky);

    let ids = complete_n(&mut ducky, "sweep", 5);

    let coupons = store.documents(Collection::Coupons);
    assert_eq!(coupons.len(), 1);
    assert_eq!(coupons[0].get("owner"), Some(&json!("Ducky")));
    assert_eq!(coupons[0].get("isUsed"), Some(&json!(false)));
    let title = coupons[0].get("title").and_then(|t| t.as_str()).unwrap();
    assert!(DEFAULT_COUPONS.contains(&title));

    for id in &ids {
        assert!(flag(&store, id, "redeemedForCoupon"), "{id} not redeemed");
    }
    assert_eq!(ducky.coupon_progress(), 0);
}

#[test]
fn test_sixth_deed_waits_for_next_batch() {
    let store = store();
    let mut ducky = session(&store, Ducky);

    complete_n(&mut ducky, "a", 6);
    assert_eq!(store.documents(Collection::Coupons).len(), 1);
    assert_eq!(ducky.coupon_progress(), 1);

    complete_n(&mut ducky, "b", 4);
    assert_eq!(store.documents(Collection::Coupons).len(), 2);
    assert_eq!(ducky.coupon_progress(), 0);
}

#[test]
fn test_unlock_is_idempotent() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    complete_n(&mut ducky, "c", 5);

    let before = store.documents(Collection::Chores);
    assert!(ducky.try_unlock_coupon().is_none());
    assert!(ducky.try_unlock_coupon().is_none());

    assert_eq!(store.documents(Collection::Coupons).len(), 1);
    assert_eq!(store.documents(Collection::Chores), before);
}

#[test]
fn test_whims_and_partner_deeds_do_not_count() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    let mut pips = session(&store, Pips);

    for i in 0..5 {
        let id = ducky
            .add_chore(NewChore::new(format!("whim {i}")).kind(ChoreKind::Whim).assigned_to(Ducky))
            .unwrap();
        ducky.complete_chore(&id).unwrap();
    }
    complete_n(&mut pips, "p", 4);
    ducky.sync();

    assert!(store.documents(Collection::Coupons).is_empty());
    assert_eq!(ducky.coupon_progress(), 0);
    assert_eq!(pips.coupon_progress(), 4);
}

#[test]
fn test_personal_goal_chores_do_not_count() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    let gym = ducky.add_goal("Gym", GoalKind::Personal, Decimal::ZERO).unwrap();

    for i in 0..5 {
        let id = ducky
            .add_chore(NewChore::new(format!("run {i}")).assigned_to(Ducky).for_goal(gym.clone()))
            .unwrap();
        ducky.complete_chore(&id).unwrap();
    }

    assert!(store.documents(Collection::Coupons).is_empty());
    assert_eq!(ducky.scoreboard().scores[Ducky], 0);
}

#[test]
fn test_store_reward_settings_override_defaults() {
    let store = store();
    store
        .upsert(
            Collection::Settings,
            "rewards",
            Fields::new()
                .set("choresPerCoupon", 2)
                .set("pools", json!({"Ducky": ["Tea in bed"], "Pips": []})),
        )
        .unwrap();
    let mut ducky = session(&store, Ducky);
    let mut pips = session(&store, Pips);

    assert_eq!(ducky.policy().chores_per_coupon, 2);
    complete_n(&mut ducky, "d", 2);
    let coupons = store.documents(Collection::Coupons);
    assert_eq!(coupons.len(), 1);
    assert_eq!(coupons[0].get("title"), Some(&json!("Tea in bed")));

    // An empty pool falls back to the stock titles.
    complete_n(&mut pips, "p", 2);
    let titles: Vec<String> = store
        .documents(Collection::Coupons)
        .iter()
        .filter(|d| d.get("owner") == Some(&json!("Pips")))
        .filter_map(|d| d.get("title").and_then(|t| t.as_str()).map(String::from))
        .collect();
    assert_eq!(titles.len(), 1);
    assert!(DEFAULT_COUPONS.contains(&titles[0].as_str()));
}

#[test]
fn test_zero_threshold_falls_back_to_default() {
    let store = store();
    store
        .upsert(
            Collection::Settings,
            "rewards",
            Fields::new().set("choresPerCoupon", 0).set("choresPerDateNight", 0),
        )
        .unwrap();
    let ducky = session(&store, Ducky);

    assert_eq!(ducky.policy(), &RewardPolicy::default());
}

#[test]
fn test_lowered_threshold_unlocks_every_banked_batch() {
    let store = store();
    store
        .upsert(Collection::Settings, "rewards", Fields::new().set("choresPerCoupon", 20))
        .unwrap();
    let mut ducky = session(&store, Ducky);
    complete_n(&mut ducky, "d", 12);
    assert!(store.documents(Collection::Coupons).is_empty());
    assert_eq!(ducky.coupon_progress(), 12);

    store
        .upsert(Collection::Settings, "rewards", Fields::new().set("choresPerCoupon", 5))
        .unwrap();
    assert!(ducky.sync());

    assert_eq!(store.documents(Collection::Coupons).len(), 2);
    assert_eq!(ducky.coupon_progress(), 2);
    assert!(!ducky.sync());
    assert_eq!(store.documents(Collection::Coupons).len(), 2);
}

#[test]
fn test_agreeing_votes_assign() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    let mut pips = session(&store, Pips);
    let id = ducky.add_chore(NewChore::new("Dishes")).unwrap();

    assert_eq!(
        ducky.vote(&id, Ducky).unwrap(),
        VoteOutcome::Recorded { voter: Ducky, choice: Ducky }
    );
    assert!(ducky.voting_pool().is_empty());

    pips.sync();
    assert_eq!(pips.voting_pool().len(), 1);
    assert_eq!(pips.vote(&id, Ducky).unwrap(), VoteOutcome::Assigned(Ducky));

    let doc = store.document(Collection::Chores, &id).unwrap();
    assert_eq!(doc.get("assignedTo"), Some(&json!("Ducky")));
    assert_eq!(doc.get("votes"), Some(&json!({})));

    ducky.sync();
    assert_eq!(ducky.my_chores().len(), 1);
}

#[test]
fn test_conflicting_votes_requeue() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    let mut pips = session(&store, Pips);
    let disputed = ducky.add_chore(NewChore::new("Litter box")).unwrap();
    let other = ducky.add_chore(NewChore::new("Plants")).unwrap();
    let stamp_before = store
        .document(Collection::Chores, &disputed)
        .and_then(|d| d.get("createdAt").cloned())
        .unwrap();

    ducky.vote(&disputed, Pips).unwrap();
    pips.sync();
    assert_eq!(pips.vote(&disputed, Ducky).unwrap(), VoteOutcome::Conflict);

    let doc = store.document(Collection::Chores, &disputed).unwrap();
    assert_eq!(doc.get("votes"), Some(&json!({})));
    assert_eq!(doc.get("assignedTo"), Some(&json!("")));
    assert_ne!(doc.get("createdAt"), Some(&stamp_before));

    // Back of the queue, and open for both votes again.
    let order: Vec<&str> = pips.snapshot().chores.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(order, vec![other.as_str(), disputed.as_str()]);
    assert_eq!(pips.voting_pool().len(), 2);
}

#[test]
fn test_repeated_vote_overwrites() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    let id = ducky.add_chore(NewChore::new("Trash")).unwrap();

    ducky.vote(&id, Pips).unwrap();
    ducky.vote(&id, Ducky).unwrap();

    let doc = store.document(Collection::Chores, &id).unwrap();
    assert_eq!(doc.get("votes"), Some(&json!({"Ducky": "Ducky"})));
}

#[test]
fn test_assigned_chore_refuses_votes() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    let id = ducky.add_chore(NewChore::new("Laundry").assigned_to(Pips)).unwrap();
    store
        .update(Collection::Chores, &id, Fields::new().set("votes.Pips", "Ducky"))
        .unwrap();
    let before = store.document(Collection::Chores, &id).unwrap();

    assert!(matches!(
        ducky.vote(&id, Pips),
        Err(KingdomError::AlreadyAssigned(ref c)) if *c == id
    ));
    assert!(matches!(
        ducky.vote(&id, Ducky),
        Err(KingdomError::AlreadyAssigned(_))
    ));
    assert_eq!(store.document(Collection::Chores, &id).unwrap(), before);
}

#[test]
fn test_swipe_maps_to_participant() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    let mut pips = session(&store, Pips);
    let id = ducky.add_chore(NewChore::new("Vacuum")).unwrap();

    ducky.swipe(&id, SwipeDirection::Left).unwrap();
    pips.sync();
    assert_eq!(
        pips.swipe(&id, SwipeDirection::Left).unwrap(),
        VoteOutcome::Assigned(Pips)
    );
}

#[test]
fn test_date_night_spends_twenty_oldest_deeds() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    let mut pips = session(&store, Pips);

    let ducky_ids = complete_n(&mut ducky, "d", 12);
    pips.sync();
    let pips_ids = complete_n(&mut pips, "p", 10);
    ducky.sync();

    assert_eq!(ducky.date_night_progress(), 22);
    assert!(ducky.date_night_unlocked());

    let proposal = ducky.propose_date_night();
    ducky
        .log_date_night(&proposal, Some("Lovely".into()), None)
        .unwrap();

    for id in ducky_ids.iter().chain(&pips_ids[..8]) {
        assert!(flag(&store, id, "redeemedForDate"), "{id} should be spent");
    }
    for id in &pips_ids[8..] {
        assert!(!flag(&store, id, "redeemedForDate"), "{id} should be banked");
    }
    assert_eq!(ducky.date_night_progress(), 2);

    let history = store.documents(Collection::DateNights);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].get("vibe"), Some(&json!(proposal.vibe)));
    assert_eq!(history[0].get("review"), Some(&json!("Lovely")));
}

#[test]
fn test_date_night_locked_below_threshold() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    complete_n(&mut ducky, "d", 7);

    let proposal = ducky.propose_date_night();
    let err = ducky.log_date_night(&proposal, None, None).unwrap_err();

    assert!(matches!(
        err,
        KingdomError::DateNightLocked { progress: 7, threshold: 20 }
    ));
    assert!(store.documents(Collection::DateNights).is_empty());
}

#[test]
fn test_seeded_proposals_repeat() {
    let a = session(&store(), Ducky).propose_date_night();
    let b = session(&store(), Ducky).propose_date_night();
    assert_eq!((a.vibe, a.activity, a.food, a.place), (b.vibe, b.activity, b.food, b.place));
}

#[test]
fn test_complete_errors() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    let id = ducky.add_chore(NewChore::new("Mop")).unwrap();

    ducky.complete_chore(&id).unwrap();
    assert!(matches!(
        ducky.complete_chore(&id),
        Err(KingdomError::AlreadyCompleted(ref c)) if *c == id
    ));
    assert!(matches!(
        ducky.complete_chore("missing"),
        Err(KingdomError::UnknownChore(_))
    ));
}

#[test]
fn test_write_failures_are_swallowed() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    let id = ducky.add_chore(NewChore::new("Windows")).unwrap();

    store.fail_writes("offline");
    assert!(ducky.add_chore(NewChore::new("Lost")).is_none());
    ducky.complete_chore(&id).unwrap();
    assert!(!ducky.snapshot().chore(&id).unwrap().is_completed());

    store.restore();
    ducky.complete_chore(&id).unwrap();
    assert!(ducky.snapshot().chore(&id).unwrap().is_completed());
}

#[test]
fn test_failed_coupon_write_spends_nothing() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    let mut ids = complete_n(&mut ducky, "c", 4);
    let last = ducky.add_chore(NewChore::new("c 4").assigned_to(Ducky)).unwrap();
    ids.push(last.clone());

    // The fifth completion lands, then the store goes away.
    store
        .update(
            Collection::Chores,
            &last,
            Fields::new()
                .set("status", "completed")
                .set("completedBy", "Ducky")
                .server_timestamp("completedAt"),
        )
        .unwrap();
    store.fail_writes("offline");
    ducky.sync();

    assert!(store.documents(Collection::Coupons).is_empty());
    assert!(ids.iter().all(|id| !flag(&store, id, "redeemedForCoupon")));

    store.restore();
    assert!(ducky.try_unlock_coupon().is_some());
    assert_eq!(store.documents(Collection::Coupons).len(), 1);
    assert!(ids.iter().all(|id| flag(&store, id, "redeemedForCoupon")));
}

#[test]
fn test_delete_needs_confirmation() {
    let store = store();
    let config = KingdomConfig::default().with_random_seed(1);
    let mut cautious = Household::open(store.clone(), Ducky, config.clone());
    let id = cautious.add_chore(NewChore::new("Gutter")).unwrap();

    assert!(!cautious.delete_chore(&id).unwrap());
    assert!(store.document(Collection::Chores, &id).is_some());

    let mut eager = Household::open(store.clone(), Ducky, config).with_confirm(|_: &str| true);
    assert!(eager.delete_chore(&id).unwrap());
    assert!(store.document(Collection::Chores, &id).is_none());
}

#[test]
fn test_bad_documents_are_skipped() {
    let store = store();
    store
        .create(Collection::Chores, Fields::new().set("title", 42))
        .unwrap();
    let mut ducky = session(&store, Ducky);
    ducky.add_chore(NewChore::new("Fine")).unwrap();

    assert_eq!(ducky.snapshot().chores.len(), 1);
    assert_eq!(ducky.snapshot().chores[0].title, "Fine");
}

#[test]
fn test_redeem_coupon_once() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    complete_n(&mut ducky, "c", 5);
    let coupon = ducky.available_coupons()[0].id.clone();

    assert!(ducky.redeem_coupon(&coupon).unwrap());
    assert!(!ducky.redeem_coupon(&coupon).unwrap());
    assert!(ducky.available_coupons().is_empty());
}

#[test]
fn test_scoreboard_reign() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    complete_n(&mut ducky, "d", 6);

    let board = ducky.scoreboard();
    assert_eq!(board.scores[Ducky], 6);
    assert_eq!(board.reign, Reign::Ruler(Ducky));
    assert_eq!(ducky.deed_counts(Timeframe::Weekly)[Ducky], 6);
}

#[test]
fn test_finish_shopping() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    let milk = ducky.add_item("Milk", Priority::Normal).unwrap();
    let cake = ducky.add_item("Cake", Priority::Treat).unwrap();
    ducky.add_item("Soap", Priority::High).unwrap();

    let order: Vec<&str> = ducky.shopping_list().iter().map(|i| i.text.as_str()).collect();
    assert_eq!(order, vec!["Soap", "Milk", "Cake"]);

    ducky.toggle_item(&milk).unwrap();
    ducky.toggle_item(&cake).unwrap();
    ducky.finish_shopping(dec("42.10")).unwrap().unwrap();

    let activities = store.documents(Collection::Activities);
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].get("description"), Some(&json!("Went shopping ($42.10)")));
    let mut items: Vec<&str> = activities[0]
        .get("items")
        .and_then(|v| v.as_array())
        .map(|a| a.iter().filter_map(|i| i.as_str()).collect())
        .unwrap_or_default();
    items.sort_unstable();
    assert_eq!(items, vec!["Cake", "Milk"]);

    let left: Vec<&str> = ducky.shopping_list().iter().map(|i| i.text.as_str()).collect();
    assert_eq!(left, vec!["Soap"]);
    assert_eq!(ducky.financial_contributions(Timeframe::Weekly)[Ducky], dec("42.10"));
}

#[test]
fn test_bills_and_income() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    let mut pips = session(&store, Pips);

    ducky.set_income(Decimal::from(3000)).unwrap();
    pips.set_income(Decimal::from(1000)).unwrap();
    ducky.sync();
    let budget = ducky.budget();
    assert_eq!(budget.total_income, Decimal::from(4000));
    assert_eq!(budget.shares[Ducky], dec("0.75"));

    let rent = ducky.add_bill("Rent", Decimal::from(100), "monthly").unwrap().unwrap();
    ducky.pay_bill(&rent, Decimal::from(30)).unwrap();
    assert_eq!(ducky.budget().unpaid.len(), 1);
    ducky.pay_bill(&rent, Decimal::from(70)).unwrap();
    assert_eq!(ducky.budget().paid.len(), 1);
    assert_eq!(ducky.snapshot().bill(&rent).unwrap().payments.len(), 2);

    assert!(matches!(
        ducky.pay_bill(&rent, Decimal::ZERO),
        Err(KingdomError::InvalidAmount(_))
    ));
    assert_eq!(
        ducky.financial_contributions(Timeframe::Monthly)[Ducky],
        Decimal::from(100)
    );
}

#[test]
fn test_iou_flow() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    let mut pips = session(&store, Pips);

    let iou = ducky.request_iou(Decimal::from(20), "Pizza").unwrap().unwrap();
    pips.sync();
    assert_eq!(pips.pending_iou_count(), 1);
    assert_eq!(ducky.pending_iou_count(), 0);

    pips.approve_iou(&iou).unwrap();
    assert_eq!(pips.pending_iou_count(), 0);

    assert!(pips.clear_iou(&iou).unwrap());
    assert!(matches!(pips.approve_iou(&iou), Err(KingdomError::UnknownIou(_))));
}

#[test]
fn test_goals() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    let trip = ducky
        .add_goal("Trip", GoalKind::Shared, Decimal::from(200))
        .unwrap();
    ducky.add_goal("Read", GoalKind::Personal, Decimal::ZERO).unwrap();

    ducky.contribute(&trip, Decimal::from(50)).unwrap();
    let goal = ducky.snapshot().goal(&trip).unwrap();
    assert_eq!(kingdom::goal_progress(goal), Decimal::from(25));
    assert_eq!(ducky.goals(GoalFilter::Ours).len(), 1);
    assert_eq!(ducky.goals(GoalFilter::Mine).len(), 1);
    assert!(ducky.goals(GoalFilter::Theirs).is_empty());

    ducky.toggle_goal(&trip).unwrap();
    assert!(ducky.snapshot().goal(&trip).unwrap().completed);
    assert!(!ducky.toggle_task(&trip, 9).unwrap());
}

#[test]
fn test_acknowledge_keeps_partner_ack() {
    let store = store();
    let event = store
        .create(
            Collection::Events,
            Fields::new()
                .set("title", "Dinner at Mom's")
                .set("date", "2024-06-15")
                .set("owner", "Pips")
                .set("acks", json!({"Pips": true})),
        )
        .unwrap();
    let mut ducky = session(&store, Ducky);

    ducky.acknowledge(&event).unwrap();
    let day = chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let events = ducky.events_on(day);
    assert_eq!(events.len(), 1);
    assert!(events[0].is_acknowledged_by(Ducky));
    assert!(events[0].is_acknowledged_by(Pips));
}

#[test]
fn test_add_and_delete_event() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    let mut pips = session(&store, Pips);
    let day = chrono::NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();

    let picnic = ducky
        .add_event("Picnic", day, "12:00", EventKind::Shared)
        .unwrap();
    pips.sync();
    let events = pips.events_on(day);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Picnic");
    assert_eq!(events[0].owner, Ducky);
    assert!(events[0].is_acknowledged_by(Ducky));
    assert!(!events[0].is_acknowledged_by(Pips));

    let config = KingdomConfig::default().with_random_seed(3);
    let mut cautious = Household::open(store.clone(), Pips, config);
    assert!(!cautious.delete_event(&picnic).unwrap());
    assert!(store.document(Collection::Events, &picnic).is_some());

    assert!(pips.delete_event(&picnic).unwrap());
    assert!(pips.events_on(day).is_empty());
    assert!(matches!(
        pips.delete_event(&picnic),
        Err(KingdomError::UnknownEvent(_))
    ));
}

#[test]
fn test_announcements() {
    let store = store();
    let mut ducky = session(&store, Ducky);
    let mut pips = session(&store, Pips);

    let id = ducky.announce("Date night Friday!").unwrap();
    pips.sync();
    assert_eq!(pips.active_announcement().map(|a| a.id.as_str()), Some(id.as_str()));
    assert!(ducky.active_announcement().is_none());

    pips.dismiss_announcement(&id);
    assert!(pips.active_announcement().is_none());
}
