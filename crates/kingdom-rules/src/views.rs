//! Derived lists and summaries for the presentation layer.

use chrono::NaiveDate;
use kingdom_core::{
    Announcement, Bill, Chore, Coupon, Goal, GoalKind, Income, Iou, IouStatus, KingdomEvent,
    Participant, PerParticipant, RequestStatus, ShoppingItem, Snapshot,
};
use rust_decimal::Decimal;

/// Chores on `participant`'s plate: assigned to them and not completed.
///
/// Pretty-please chores come first. Within each group chores are ordered
/// by due date, undated ones last, otherwise keeping snapshot order.
pub fn my_chores(snapshot: &Snapshot, participant: Participant) -> Vec<&Chore> {
    let mut mine: Vec<_> = snapshot
        .chores
        .iter()
        .filter(|c| c.assigned_to == Some(participant) && !c.is_completed())
        .collect();
    mine.sort_by_key(|c| (!c.is_pretty_please, c.due_date.is_none(), c.due_date));
    mine
}

/// Shopping list ordered high → normal → treat, stable within a priority.
pub fn shopping_list(snapshot: &Snapshot) -> Vec<&ShoppingItem> {
    let mut items: Vec<_> = snapshot.shopping.iter().collect();
    items.sort_by_key(|i| i.priority);
    items
}

/// Which goals to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GoalFilter {
    /// Personal goals of the viewer.
    #[default]
    Mine,
    /// Personal goals of the partner.
    Theirs,
    /// Shared goals.
    Ours,
}

pub fn filter_goals(goals: &[Goal], filter: GoalFilter, viewer: Participant) -> Vec<&Goal> {
    goals
        .iter()
        .filter(|g| match filter {
            GoalFilter::Ours => g.kind == GoalKind::Shared,
            GoalFilter::Mine => g.kind == GoalKind::Personal && g.owner == viewer,
            GoalFilter::Theirs => g.kind == GoalKind::Personal && g.owner != viewer,
        })
        .collect()
}

/// Completion percentage of a goal, 0 to 100.
///
/// A goal with a money target measures savings, capped at 100; a ratio too
/// large to represent is also 100. Otherwise the share of completed tasks
/// counts; a goal with neither is at 0.
pub fn goal_progress(goal: &Goal) -> Decimal {
    let hundred = Decimal::ONE_HUNDRED;
    if goal.financial_target > Decimal::ZERO {
        return goal
            .saved_amount
            .checked_div(goal.financial_target)
            .and_then(|ratio| ratio.checked_mul(hundred))
            .map_or(hundred, |percent| percent.min(hundred));
    }
    if goal.tasks.is_empty() {
        return Decimal::ZERO;
    }
    let done = goal.tasks.iter().filter(|t| t.completed).count();
    Decimal::from(done) / Decimal::from(goal.tasks.len()) * hundred
}

/// Treasury overview for one viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary<'a> {
    pub total_income: Decimal,
    /// Fraction of the household income each partner earns.
    pub shares: PerParticipant<Decimal>,
    pub unpaid: Vec<&'a Bill>,
    pub paid: Vec<&'a Bill>,
    /// Pending borrow requests addressed to the viewer.
    pub incoming_ious: Vec<&'a Iou>,
}

impl<'a> BudgetSummary<'a> {
    pub fn compute(snapshot: &'a Snapshot, viewer: Participant) -> Self {
        let (paid, unpaid): (Vec<&Bill>, Vec<&Bill>) =
            snapshot.bills.iter().partition(|b| b.is_paid());
        let income = &snapshot.settings.income;
        Self {
            total_income: income.ducky.saturating_add(income.pips),
            shares: income_shares(&snapshot.settings.income),
            unpaid,
            paid,
            incoming_ious: pending_ious_for(snapshot, viewer),
        }
    }

    /// Splits `amount` between the partners by income share.
    pub fn split(&self, amount: Decimal) -> PerParticipant<Decimal> {
        self.shares.map(|share| amount.saturating_mul(share))
    }
}

/// Each partner's fraction of the combined income; an even split when
/// nobody earns anything.
pub fn income_shares(income: &Income) -> PerParticipant<Decimal> {
    let half = Decimal::new(5, 1);
    let total = income.ducky.saturating_add(income.pips);
    if total <= Decimal::ZERO {
        return PerParticipant::new(half, half);
    }
    match income.ducky.checked_div(total) {
        Some(ducky) => PerParticipant::new(ducky, Decimal::ONE.saturating_sub(ducky)),
        None => PerParticipant::new(half, half),
    }
}

pub fn pending_ious_for(snapshot: &Snapshot, viewer: Participant) -> Vec<&Iou> {
    snapshot
        .ious
        .iter()
        .filter(|i| i.to == viewer && i.status == IouStatus::Pending)
        .collect()
}

/// Calendar entries dated `day`.
pub fn events_on(events: &[KingdomEvent], day: NaiveDate) -> Vec<&KingdomEvent> {
    events.iter().filter(|e| e.date == Some(day)).collect()
}

/// Unused coupons owned by `participant`.
pub fn available_coupons(snapshot: &Snapshot, participant: Participant) -> Vec<&Coupon> {
    snapshot
        .coupons
        .iter()
        .filter(|c| c.owner == participant && !c.is_used)
        .collect()
}

/// Reward wishes the partner sent that still await an answer.
pub fn pending_reward_requests(snapshot: &Snapshot, viewer: Participant) -> usize {
    snapshot
        .settings
        .rewards
        .as_ref()
        .map_or(0, |r| {
            r.requests
                .iter()
                .filter(|req| req.from == viewer.other() && req.status == RequestStatus::Pending)
                .count()
        })
}

/// The banner shown to `viewer`: the first active announcement from the
/// partner. Announcements arrive newest first.
pub fn active_announcement(snapshot: &Snapshot, viewer: Participant) -> Option<&Announcement> {
    snapshot
        .announcements
        .iter()
        .find(|a| a.active && a.from != viewer)
}

#[cfg(test)]
#[path = "views_tests.rs"]
mod tests;
