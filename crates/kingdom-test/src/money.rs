//! Bill, payment and activity fixtures.

use kingdom_core::{Activity, Bill, Contribution, Participant, Payment};
use rust_decimal::Decimal;

use crate::clock::at;

/// A bill of `amount` with `paid` already paid.
pub fn bill(id: &str, amount: i64, paid: i64) -> Bill {
    let mut bill = Bill::new(id, format!("bill {id}"), Decimal::from(amount));
    bill.total_paid = Decimal::from(paid);
    bill
}

/// A payment of `amount` made `days_ago` days before the reference time.
pub fn payment(who: Participant, amount: Decimal, days_ago: i64) -> Payment {
    Payment {
        who,
        amount,
        date: at(days_ago),
    }
}

pub fn contribution(who: Participant, amount: Decimal, days_ago: i64) -> Contribution {
    Contribution {
        who,
        amount,
        date: at(days_ago),
    }
}

/// An activity feed entry logged `days_ago` days before the reference time.
pub fn activity(id: &str, who: Participant, description: &str, days_ago: i64) -> Activity {
    Activity {
        id: id.to_string(),
        who,
        description: description.to_string(),
        items: Vec::new(),
        created_at: Some(at(days_ago)),
    }
}
