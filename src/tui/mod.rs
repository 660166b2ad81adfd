//! Terminal User Interface module
//!
//! An interactive entry form and report table built on ratatui. All state
//! changes go through [`crate::services::ReportSession`]; the TUI only adds
//! selection and dialog state on top.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
