//! Immutable view of the household handed to every rule.

use crate::domain::{
    Activity, Announcement, Bill, Chore, Coupon, DateNightLog, Goal, Iou, KingdomEvent, Settings,
    ShoppingItem,
};

/// The latest full record sets of every collection.
///
/// Collections keep the order the store delivered them in.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub chores: Vec<Chore>,
    pub goals: Vec<Goal>,
    pub coupons: Vec<Coupon>,
    pub bills: Vec<Bill>,
    pub ious: Vec<Iou>,
    pub shopping: Vec<ShoppingItem>,
    pub events: Vec<KingdomEvent>,
    pub announcements: Vec<Announcement>,
    pub activities: Vec<Activity>,
    pub date_nights: Vec<DateNightLog>,
    pub settings: Settings,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chore(&self, id: &str) -> Option<&Chore> {
        self.chores.iter().find(|c| c.id == id)
    }

    pub fn goal(&self, id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn bill(&self, id: &str) -> Option<&Bill> {
        self.bills.iter().find(|b| b.id == id)
    }

    pub fn event(&self, id: &str) -> Option<&KingdomEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn coupon(&self, id: &str) -> Option<&Coupon> {
        self.coupons.iter().find(|c| c.id == id)
    }

    pub fn completed_chores(&self) -> impl Iterator<Item = &Chore> {
        self.chores.iter().filter(|c| c.is_completed())
    }
}
