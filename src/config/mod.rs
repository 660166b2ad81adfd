//! Configuration module
//!
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ReportPaths;
pub use settings::Settings;
