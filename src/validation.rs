//! Form draft and field validation
//!
//! A [`FormDraft`] holds the raw text the user typed. [`validate`] turns it
//! into a per-field error map without side effects; [`FormDraft::to_new_entry`]
//! is the only way to obtain a [`NewEntry`].

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{EntryStatus, Money, NewEntry};

pub const ITEM_REQUIRED: &str = "Item Name is required";
pub const MONTH_REQUIRED: &str = "Billing Month is required";
pub const AMOUNT_INVALID: &str = "Valid amount > 0 required";

/// Date format of the deadline field
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Largest accepted amount (100 crore). At this cap the running total fits
/// in an i64 of minor units for more than 90 million entries.
pub const MAX_AMOUNT: Money = Money::from_major(1_000_000_000);

/// A form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Item,
    Month,
    Amount,
    Deadline,
    Status,
}

impl Field {
    /// Key used in the error map
    pub fn key(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Month => "month",
            Self::Amount => "amount",
            Self::Deadline => "deadline",
            Self::Status => "status",
        }
    }

    /// Human label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Self::Item => "Item Name",
            Self::Month => "Billing Month",
            Self::Amount => "Amount",
            Self::Deadline => "Payment Deadline",
            Self::Status => "Status",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field-level validation messages, keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Message for a field, if it failed
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Drop the message for one field
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Outcome of validating a draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: FieldErrors,
    /// Parsed amount, present when the amount field is valid
    pub amount: Option<Money>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Raw, not yet committed form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub item: String,
    pub month: String,
    pub amount: String,
    pub deadline: String,
    pub status: EntryStatus,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft with a preselected billing month
    pub fn with_month(month: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            ..Self::default()
        }
    }

    /// Raw text of a text field; `Status` yields its display name
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Item => self.item.clone(),
            Field::Month => self.month.clone(),
            Field::Amount => self.amount.clone(),
            Field::Deadline => self.deadline.clone(),
            Field::Status => self.status.to_string(),
        }
    }

    /// Replace the raw text of a field
    ///
    /// For `Status` the text is parsed; unknown text leaves the status as is.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Item => self.item = value,
            Field::Month => self.month = value,
            Field::Amount => self.amount = value,
            Field::Deadline => self.deadline = value,
            Field::Status => {
                if let Ok(status) = value.parse() {
                    self.status = status;
                }
            }
        }
    }

    /// Reset after a successful submit, keeping the billing month
    pub fn reset_keep_month(&mut self) {
        let month = std::mem::take(&mut self.month);
        *self = Self::with_month(month);
    }

    /// Validate and convert into an entry ready for the store
    pub fn to_new_entry(&self) -> Result<NewEntry, FieldErrors> {
        let report = validate(self);
        let amount = match report.amount {
            Some(amount) if report.is_valid() => amount,
            _ => return Err(report.errors),
        };

        Ok(NewEntry {
            item: self.item.trim().to_string(),
            month: self.month.clone(),
            amount,
            deadline: parse_deadline(&self.deadline),
            status: self.status,
        })
    }
}

/// Validate a draft without touching any state
pub fn validate(draft: &FormDraft) -> ValidationReport {
    let mut errors = FieldErrors::new();

    if draft.item.trim().is_empty() {
        errors.insert(Field::Item, ITEM_REQUIRED);
    }
    if draft.month.is_empty() {
        errors.insert(Field::Month, MONTH_REQUIRED);
    }
    let amount = parse_amount(&draft.amount);
    if amount.is_none() {
        errors.insert(Field::Amount, AMOUNT_INVALID);
    }

    if !errors.is_empty() {
        tracing::debug!(fields = %errors, "draft failed validation");
    }

    ValidationReport { errors, amount }
}

/// Parse an amount; `None` unless it is a finite number above zero and at
/// most [`MAX_AMOUNT`]
///
/// Values that round to zero minor units are rejected too, so every stored
/// amount stays strictly positive.
pub fn parse_amount(raw: &str) -> Option<Money> {
    let value: f64 = raw.trim().parse().ok()?;
    if value.is_nan() || value <= 0.0 {
        return None;
    }
    Money::from_decimal(value).filter(|m| m.is_positive() && *m <= MAX_AMOUNT)
}

/// Parse a deadline; blank or malformed input means no deadline
pub fn parse_deadline(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, DEADLINE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!(deadline = raw, error = %e, "ignoring malformed deadline");
            None
        }
    }
}
