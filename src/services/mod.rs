//! Business logic layer
//!
//! - `store`: ordered in-memory entry list
//! - `totals`: derived sums
//! - `session`: form, delete confirmation and title state driven by the shells
//! - `import`: batch drafts from JSON/CSV

pub mod import;
pub mod session;
pub mod store;
pub mod totals;

pub use import::{apply_drafts, load_drafts, BatchOutcome, ImportFormat, RejectedRow};
pub use session::{default_title, DeleteState, ReportSession, DEFAULT_TITLE_PREFIX};
pub use store::EntryStore;
pub use totals::total;
