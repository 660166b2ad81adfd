//! Modal dialogs for the TUI

pub mod confirm;
pub mod entry;
pub mod help;
pub mod title;
