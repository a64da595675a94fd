//! Goal fixtures.

use kingdom_core::{Goal, GoalKind, GoalTask, Participant};
use rust_decimal::Decimal;

pub fn personal_goal(id: &str, owner: Participant) -> Goal {
    Goal::new(id, format!("goal {id}"), GoalKind::Personal, owner)
}

pub fn shared_goal(id: &str) -> Goal {
    Goal::new(id, format!("goal {id}"), GoalKind::Shared, Participant::Ducky)
}

/// A shared savings goal with `saved` of `target` put away.
pub fn savings_goal(id: &str, target: i64, saved: i64) -> Goal {
    let mut goal = shared_goal(id);
    goal.financial_target = Decimal::from(target);
    goal.saved_amount = Decimal::from(saved);
    goal
}

/// A shared goal with `done` of `total` tasks completed.
pub fn task_goal(id: &str, done: usize, total: usize) -> Goal {
    let mut goal = shared_goal(id);
    goal.tasks = (0..total)
        .map(|i| GoalTask {
            id: i as u64,
            text: format!("step {i}"),
            completed: i < done,
        })
        .collect();
    goal
}
