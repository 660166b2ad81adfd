//! Expense entry model
//!
//! An entry is one line of the maintenance report. Entries are created by the
//! store from a validated [`NewEntry`] and never change afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::EntryId;
use super::money::Money;

/// Payment status of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Not yet paid (default for new entries)
    #[default]
    Pending,
    /// Settled
    Paid,
    /// Past its deadline and unpaid
    Overdue,
}

impl EntryStatus {
    /// All statuses, in selector order
    pub const ALL: [EntryStatus; 3] = [Self::Pending, Self::Paid, Self::Overdue];

    /// Next status in selector order (wraps)
    pub fn next(self) -> Self {
        match self {
            Self::Pending => Self::Paid,
            Self::Paid => Self::Overdue,
            Self::Overdue => Self::Pending,
        }
    }

    /// Previous status in selector order (wraps)
    pub fn prev(self) -> Self {
        match self {
            Self::Pending => Self::Overdue,
            Self::Paid => Self::Pending,
            Self::Overdue => Self::Paid,
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Paid => write!(f, "Paid"),
            Self::Overdue => write!(f, "Overdue"),
        }
    }
}

/// Error returned when a status string is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusParseError(pub String);

impl fmt::Display for StatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown status: {}", self.0)
    }
}

impl std::error::Error for StatusParseError {}

impl FromStr for EntryStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "overdue" => Ok(Self::Overdue),
            _ => Err(StatusParseError(s.to_string())),
        }
    }
}

/// A validated entry that has not yet been assigned an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    pub item: String,
    pub month: String,
    pub amount: Money,
    pub deadline: Option<NaiveDate>,
    pub status: EntryStatus,
}

/// One expense line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Unique identifier, assigned by the store
    pub id: EntryId,

    /// Display name (non-empty, trimmed)
    pub item: String,

    /// Billing month label, e.g. "Mar-24"
    pub month: String,

    /// Amount due, always positive
    pub amount: Money,

    /// Optional payment deadline
    pub deadline: Option<NaiveDate>,

    /// Payment status
    #[serde(default)]
    pub status: EntryStatus,

    /// When the entry was added
    pub created_at: DateTime<Utc>,
}

impl ExpenseEntry {
    /// Attach a fresh id to a validated entry
    pub(crate) fn from_new(new: NewEntry) -> Self {
        Self {
            id: EntryId::new(),
            item: new.item,
            month: new.month,
            amount: new.amount,
            deadline: new.deadline,
            status: new.status,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for ExpenseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {} [{}]", self.item, self.month, self.amount, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_entry() -> NewEntry {
        NewEntry {
            item: "Internet Bill".into(),
            month: "Mar-24".into(),
            amount: Money::from_major(1500),
            deadline: NaiveDate::from_ymd_opt(2024, 3, 10),
            status: EntryStatus::Pending,
        }
    }

    #[test]
    fn test_status_default_is_pending() {
        assert_eq!(EntryStatus::default(), EntryStatus::Pending);
    }

    #[test]
    fn test_status_cycle() {
        for status in EntryStatus::ALL {
            assert_eq!(status.next().prev(), status);
        }
        assert_eq!(EntryStatus::Overdue.next(), EntryStatus::Pending);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("Paid".parse::<EntryStatus>(), Ok(EntryStatus::Paid));
        assert_eq!(" overdue ".parse::<EntryStatus>(), Ok(EntryStatus::Overdue));
        assert!("later".parse::<EntryStatus>().is_err());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&EntryStatus::Overdue).unwrap();
        assert_eq!(json, "\"overdue\"");
    }

    #[test]
    fn test_from_new_copies_fields() {
        let entry = ExpenseEntry::from_new(new_entry());
        assert_eq!(entry.item, "Internet Bill");
        assert_eq!(entry.month, "Mar-24");
        assert_eq!(entry.amount, Money::from_major(1500));
        assert_eq!(entry.status, EntryStatus::Pending);
    }

    #[test]
    fn test_from_new_assigns_distinct_ids() {
        let a = ExpenseEntry::from_new(new_entry());
        let b = ExpenseEntry::from_new(new_entry());
        assert_ne!(a.id, b.id);
    }
}
