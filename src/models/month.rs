//! Billing month labels
//!
//! The month selector offers next month, the current month and the three
//! months before it, labelled `Mmm-yy` ("Mar-24").

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Number of months shown before the current one
const MONTHS_BACK: u32 = 3;

/// A calendar month used as a billing period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BillingMonth {
    year: i32,
    month: u32,
}

impl BillingMonth {
    /// Create a billing month; `month` is 1-based and must be 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Get the next month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Get the previous month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    fn first_day(&self) -> NaiveDate {
        // month is range-checked on construction, day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Short selector label, e.g. "Mar-24"
    pub fn label(&self) -> String {
        self.first_day().format("%b-%y").to_string()
    }

    /// Full month name and year, e.g. "March 2024"
    pub fn long_name(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl fmt::Display for BillingMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Billing month options relative to `today`
///
/// Always five labels: next month, the current month, then the three
/// preceding months, newest first.
pub fn month_options(today: NaiveDate) -> Vec<String> {
    let current = BillingMonth::containing(today);
    let mut options = Vec::with_capacity(MONTHS_BACK as usize + 2);
    options.push(current.next().label());

    let mut month = current;
    for _ in 0..=MONTHS_BACK {
        options.push(month.label());
        month = month.prev();
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_options_reference_date() {
        assert_eq!(
            month_options(date(2024, 3, 15)),
            vec!["Apr-24", "Mar-24", "Feb-24", "Jan-24", "Dec-23"]
        );
    }

    #[test]
    fn test_month_options_year_end() {
        assert_eq!(
            month_options(date(2023, 12, 31)),
            vec!["Jan-24", "Dec-23", "Nov-23", "Oct-23", "Sep-23"]
        );
    }

    #[test]
    fn test_month_options_always_five() {
        for m in 1..=12 {
            assert_eq!(month_options(date(2025, m, 1)).len(), 5);
        }
    }

    #[test]
    fn test_navigation() {
        let jan = BillingMonth::new(2025, 1).unwrap();
        assert_eq!(jan.prev(), BillingMonth::new(2024, 12).unwrap());
        assert_eq!(jan.prev().next(), jan);
    }

    #[test]
    fn test_invalid_month() {
        assert!(BillingMonth::new(2025, 0).is_none());
        assert!(BillingMonth::new(2025, 13).is_none());
    }

    #[test]
    fn test_labels() {
        let march = BillingMonth::new(2024, 3).unwrap();
        assert_eq!(march.label(), "Mar-24");
        assert_eq!(march.long_name(), "March 2024");
        assert_eq!(march.to_string(), "Mar-24");
    }
}
