//! Treasury and goals.

use chrono::Utc;
use kingdom_core::{
    Bill, Contribution, Goal, GoalKind, Iou, IouStatus, KingdomError, Payment, Result,
};
use kingdom_rules::{views, BudgetSummary, GoalFilter};
use kingdom_store::{Collection, Fields};
use rust_decimal::Decimal;
use tracing::debug;

use super::Household;

fn positive(amount: Decimal) -> Result<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(KingdomError::InvalidAmount(amount.to_string()));
    }
    Ok(amount)
}

impl Household {
    pub fn budget(&self) -> BudgetSummary<'_> {
        BudgetSummary::compute(&self.snapshot, self.profile)
    }

    /// Sets this profile's monthly income, keeping the partner's.
    pub fn set_income(&mut self, amount: Decimal) -> Result<()> {
        if amount < Decimal::ZERO {
            return Err(KingdomError::InvalidAmount(amount.to_string()));
        }
        self.refresh();
        let mut income = self.snapshot.settings.income;
        income[self.profile] = amount;

        if let Some(fields) = self.encoded(Collection::Settings, Fields::from_record(&income)) {
            self.upsert(Collection::Settings, "income", fields);
        }
        self.sync();
        Ok(())
    }

    /// Adds a bill of `amount` due with the given frequency label.
    pub fn add_bill(
        &mut self,
        title: impl Into<String>,
        amount: Decimal,
        frequency: impl Into<String>,
    ) -> Result<Option<String>> {
        let mut bill = Bill::new("", title, positive(amount)?);
        bill.frequency = frequency.into();
        let id = self.create_record(Collection::Bills, &bill);
        self.sync();
        Ok(id)
    }

    /// Records a payment by this profile toward a bill.
    pub fn pay_bill(&mut self, id: &str, amount: Decimal) -> Result<()> {
        let amount = positive(amount)?;
        self.refresh();
        let bill = self
            .snapshot
            .bill(id)
            .ok_or_else(|| KingdomError::UnknownBill(id.to_string()))?;

        let mut payments = bill.payments.clone();
        payments.push(Payment {
            who: self.profile,
            amount,
            date: Utc::now(),
        });
        let total_paid = bill.total_paid.saturating_add(amount);

        let fields = Fields::new()
            .set_serialized("payments", &payments)
            .and_then(|f| f.set_serialized("totalPaid", &total_paid));
        if let Some(fields) = self.encoded(Collection::Bills, fields) {
            if self.update(Collection::Bills, id, fields) {
                debug!(event = "bill_paid", bill = %id, by = %self.profile, amount = %amount);
            }
        }
        self.sync();
        Ok(())
    }

    /// Asks the partner for money. Returns the IOU id.
    pub fn request_iou(&mut self, amount: Decimal, reason: impl Into<String>) -> Result<Option<String>> {
        let iou = Iou {
            id: String::new(),
            from: self.profile,
            to: self.profile.other(),
            amount: positive(amount)?,
            reason: reason.into(),
            status: IouStatus::Pending,
            created_at: None,
        };
        let id = self.create_record(Collection::Ious, &iou);
        self.sync();
        Ok(id)
    }

    pub fn approve_iou(&mut self, id: &str) -> Result<()> {
        self.refresh();
        if !self.snapshot.ious.iter().any(|i| i.id == id) {
            return Err(KingdomError::UnknownIou(id.to_string()));
        }
        self.update(Collection::Ious, id, Fields::new().set("status", "approved"));
        self.sync();
        Ok(())
    }

    /// Settles an IOU by deleting it, once confirmed.
    pub fn clear_iou(&mut self, id: &str) -> Result<bool> {
        self.refresh();
        let iou = self
            .snapshot
            .ious
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| KingdomError::UnknownIou(id.to_string()))?;
        if !self.confirmed(&format!("Clear {} IOU for {}?", iou.from, iou.amount)) {
            return Ok(false);
        }
        let sent = self.delete(Collection::Ious, id);
        self.sync();
        Ok(sent)
    }

    /// Pending IOUs addressed to this profile.
    pub fn pending_iou_count(&self) -> usize {
        views::pending_ious_for(&self.snapshot, self.profile).len()
    }

    /// Adds a goal owned by this profile. A zero target means the goal is
    /// measured by its tasks.
    pub fn add_goal(
        &mut self,
        title: impl Into<String>,
        kind: GoalKind,
        financial_target: Decimal,
    ) -> Option<String> {
        let mut goal = Goal::new("", title, kind, self.profile);
        goal.financial_target = financial_target.max(Decimal::ZERO);
        let id = self.create_record(Collection::Goals, &goal);
        self.sync();
        id
    }

    pub fn goals(&self, filter: GoalFilter) -> Vec<&Goal> {
        views::filter_goals(&self.snapshot.goals, filter, self.profile)
    }

    /// Puts money toward a goal on behalf of this profile.
    pub fn contribute(&mut self, goal_id: &str, amount: Decimal) -> Result<()> {
        let amount = positive(amount)?;
        self.refresh();
        let goal = self.goal(goal_id)?;

        let mut contributions = goal.contributions.clone();
        contributions.push(Contribution {
            who: self.profile,
            amount,
            date: Utc::now(),
        });
        let saved = goal.saved_amount.saturating_add(amount);

        let fields = Fields::new()
            .set_serialized("contributions", &contributions)
            .and_then(|f| f.set_serialized("savedAmount", &saved));
        if let Some(fields) = self.encoded(Collection::Goals, fields) {
            self.update(Collection::Goals, goal_id, fields);
        }
        self.sync();
        Ok(())
    }

    pub fn toggle_goal(&mut self, goal_id: &str) -> Result<()> {
        self.refresh();
        let completed = !self.goal(goal_id)?.completed;
        self.update(Collection::Goals, goal_id, Fields::new().set("completed", completed));
        self.sync();
        Ok(())
    }

    /// Flips one task of a goal. Returns false if the goal has no such task.
    pub fn toggle_task(&mut self, goal_id: &str, task_id: u64) -> Result<bool> {
        self.refresh();
        let mut tasks = self.goal(goal_id)?.tasks.clone();
        let Some(task) = tasks.iter_mut().find(|t| t.id == task_id) else {
            return Ok(false);
        };
        task.completed = !task.completed;

        if let Some(fields) = self.encoded(Collection::Goals, Fields::new().set_serialized("tasks", &tasks)) {
            self.update(Collection::Goals, goal_id, fields);
        }
        self.sync();
        Ok(true)
    }

    pub fn delete_goal(&mut self, goal_id: &str) -> Result<bool> {
        self.refresh();
        let title = self.goal(goal_id)?.title.clone();
        if !self.confirmed(&format!("Delete goal {title}?")) {
            return Ok(false);
        }
        let sent = self.delete(Collection::Goals, goal_id);
        self.sync();
        Ok(sent)
    }

    fn goal(&self, id: &str) -> Result<&Goal> {
        self.snapshot
            .goal(id)
            .ok_or_else(|| KingdomError::UnknownGoal(id.to_string()))
    }
}
