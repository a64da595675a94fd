use std::cmp::Ordering;
use std::fmt;

use serde_json::Value;

/// Every collection the household uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Collection {
    Chores,
    Coupons,
    Bills,
    Ious,
    Goals,
    Events,
    Shopping,
    Activities,
    Announcements,
    DateNights,
    /// Singleton documents: `income`, `castle`, `profiles`, `rewards`.
    Settings,
}

impl Collection {
    pub const fn name(self) -> &'static str {
        match self {
            Collection::Chores => "chores",
            Collection::Coupons => "coupons",
            Collection::Bills => "bills",
            Collection::Ious => "ious",
            Collection::Goals => "goals",
            Collection::Events => "events",
            Collection::Shopping => "shopping",
            Collection::Activities => "activities",
            Collection::Announcements => "announcements",
            Collection::DateNights => "datenights",
            Collection::Settings => "settings",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Ordering requested for a collection subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

impl OrderBy {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Ascending,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Descending,
        }
    }

    /// Compares two field values in this ordering's direction.
    ///
    /// Missing values sort before present ones; strings (including
    /// timestamps) compare lexically and numbers numerically.
    pub(crate) fn compare(&self, a: Option<&Value>, b: Option<&Value>) -> Ordering {
        let ord = compare_values(a, b);
        match self.direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => Ordering::Equal,
    }
}
