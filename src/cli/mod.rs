//! CLI command handlers
//!
//! Bridges clap argument parsing with the session and export layers.

pub mod export;
pub mod months;

pub use export::{handle_export_command, ExportArgs, InputFormat};
pub use months::handle_months_command;
