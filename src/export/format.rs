//! Currency and date formatting for the exported report
//!
//! Formatting sits behind two small traits so the exporter never depends on a
//! particular locale. The defaults match an Indian deployment: rupees with
//! lakh/crore digit grouping and no decimal places.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Money;

/// Renders a money amount for display
pub trait CurrencyFormatter {
    fn format(&self, amount: Money) -> String;
}

/// Renders a calendar date for display
pub trait DateFormatter {
    fn format(&self, date: NaiveDate) -> String;
}

/// ISO 4217 currency code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display symbol, falling back to the code followed by a space
    pub fn symbol(&self) -> String {
        match self.0.as_str() {
            "INR" => "₹".into(),
            "USD" => "$".into(),
            "EUR" => "€".into(),
            "GBP" => "£".into(),
            "JPY" => "¥".into(),
            other => format!("{} ", other),
        }
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("INR")
    }
}

/// How integer digits are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GroupingStyle {
    /// Last three digits, then pairs: 1,23,45,678
    #[default]
    Indian,
    /// Groups of three: 12,345,678
    Western,
}

/// Locale conventions for number rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub language_tag: String,
    #[serde(default)]
    pub grouping: GroupingStyle,
    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: char,
}

fn default_grouping_separator() -> char {
    ','
}

impl LocaleConfig {
    pub fn en_in() -> Self {
        Self {
            language_tag: "en-IN".into(),
            grouping: GroupingStyle::Indian,
            grouping_separator: ',',
        }
    }

    pub fn en_us() -> Self {
        Self {
            language_tag: "en-US".into(),
            grouping: GroupingStyle::Western,
            grouping_separator: ',',
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::en_in()
    }
}

/// Whole-unit currency formatter driven by a currency code and locale
#[derive(Debug, Clone, Default)]
pub struct LocaleCurrencyFormatter {
    code: CurrencyCode,
    locale: LocaleConfig,
}

impl LocaleCurrencyFormatter {
    pub fn new(code: CurrencyCode, locale: LocaleConfig) -> Self {
        Self { code, locale }
    }

    /// Indian rupees with en-IN grouping
    pub fn inr() -> Self {
        Self::new(CurrencyCode::new("INR"), LocaleConfig::en_in())
    }
}

impl CurrencyFormatter for LocaleCurrencyFormatter {
    fn format(&self, amount: Money) -> String {
        let rounded = amount.major_rounded();
        let digits = rounded.unsigned_abs().to_string();
        let grouped = group_digits(&digits, self.locale.grouping, self.locale.grouping_separator);
        let sign = if rounded < 0 { "-" } else { "" };
        format!("{}{}{}", sign, self.code.symbol(), grouped)
    }
}

/// Insert grouping separators into a run of ASCII digits
pub fn group_digits(digits: &str, style: GroupingStyle, separator: char) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let mut boundaries = Vec::new();
    match style {
        GroupingStyle::Western => {
            let mut pos = len;
            while pos > 3 {
                pos -= 3;
                boundaries.push(pos);
            }
        }
        GroupingStyle::Indian => {
            let mut pos = len - 3;
            boundaries.push(pos);
            while pos > 2 {
                pos -= 2;
                boundaries.push(pos);
            }
        }
    }

    let mut grouped = String::with_capacity(len + boundaries.len());
    for (i, ch) in digits.chars().enumerate() {
        if boundaries.contains(&i) {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

const ISO_DATE: &str = "%Y-%m-%d";

/// strftime-style date formatter; defaults to "05 March 2024"
#[derive(Debug, Clone)]
pub struct LongDateFormatter {
    pattern: String,
}

impl LongDateFormatter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Reject patterns with unknown or malformed specifiers
    pub fn check_pattern(pattern: &str) -> Result<(), String> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(format!("Invalid date format '{}'", pattern));
        }
        Ok(())
    }
}

impl Default for LongDateFormatter {
    fn default() -> Self {
        Self::new("%d %B %Y")
    }
}

impl DateFormatter for LongDateFormatter {
    fn format(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.pattern)).is_err() {
            tracing::warn!(pattern = %self.pattern, "bad date format, using ISO dates");
            return date.format(ISO_DATE).to_string();
        }
        out
    }
}
