//! `months` command: print the billing month options

use chrono::{Local, NaiveDate};

use crate::error::{ReportError, ReportResult};
use crate::models::month_options;
use crate::validation::DEADLINE_FORMAT;

/// Parse the reference date, defaulting to today
pub fn reference_date(date: Option<&str>) -> ReportResult<NaiveDate> {
    match date {
        None => Ok(Local::now().date_naive()),
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), DEADLINE_FORMAT).map_err(|e| {
            ReportError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD ({})", raw, e))
        }),
    }
}

/// Print one month label per line
pub fn handle_months_command(date: Option<String>) -> ReportResult<()> {
    let today = reference_date(date.as_deref())?;
    for label in month_options(today) {
        println!("{}", label);
    }
    Ok(())
}
