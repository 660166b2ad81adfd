//! Maintenance Report - expense entry form and spreadsheet report
//!
//! Collects maintenance expenses (item, billing month, amount, deadline,
//! status) through a validated form, keeps them in an in-memory list with a
//! running total, and exports the list as `Maintenance_Report.xls`, an HTML
//! table that spreadsheet applications open directly.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Entries, money, ids and billing months
//! - `validation`: Form drafts and field validation
//! - `services`: Entry store, totals, the report session and batch import
//! - `export`: Report rendering, formatters and download sinks
//! - `cli` / `display`: Batch command handlers and their text output
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use maintenance_report::export::{MemorySink, ReportExporter};
//! use maintenance_report::services::ReportSession;
//! use maintenance_report::validation::Field;
//!
//! let mut session = ReportSession::new("Maintenance Report - March 2024");
//! session.edit_field(Field::Item, "Water Bill");
//! session.edit_field(Field::Month, "Mar-24");
//! session.edit_field(Field::Amount, "1500");
//! session.submit()?;
//!
//! let mut sink = MemorySink::new();
//! session.export(&ReportExporter::default(), &mut sink)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;
pub mod validation;

pub use error::{ReportError, ReportResult};
pub use services::ReportSession;
