//! Core data models
//!
//! Expense entries, their ids and statuses, money amounts and billing months.

pub mod entry;
pub mod ids;
pub mod money;
pub mod month;

pub use entry::{EntryStatus, ExpenseEntry, NewEntry, StatusParseError};
pub use ids::EntryId;
pub use money::Money;
pub use month::{month_options, BillingMonth};
