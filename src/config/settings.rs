//! User settings
//!
//! Currency, locale, output directory and title prefix. Stored as JSON; a
//! missing file means defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ReportPaths;
use crate::error::ReportError;
use crate::export::{CurrencyCode, LocaleConfig, LocaleCurrencyFormatter, LongDateFormatter, ReportExporter};
use crate::services::DEFAULT_TITLE_PREFIX;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency of all amounts
    #[serde(default)]
    pub currency_code: CurrencyCode,

    /// Number formatting conventions
    #[serde(default)]
    pub locale: LocaleConfig,

    /// strftime pattern for payment deadlines in the report
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Directory the report is saved into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Text before the month in the seeded report title
    #[serde(default = "default_title_prefix")]
    pub title_prefix: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%d %B %Y".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_title_prefix() -> String {
    DEFAULT_TITLE_PREFIX.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_code: CurrencyCode::default(),
            locale: LocaleConfig::default(),
            date_format: default_date_format(),
            output_dir: default_output_dir(),
            title_prefix: default_title_prefix(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &ReportPaths) -> Result<Self, ReportError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            tracing::debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ReportError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| ReportError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;

        tracing::info!(path = %settings_path.display(), "settings loaded");
        Ok(settings)
    }

    /// Check values serde cannot, such as the date pattern
    pub fn validate(&self) -> Result<(), ReportError> {
        LongDateFormatter::check_pattern(&self.date_format).map_err(ReportError::Config)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ReportPaths) -> Result<(), ReportError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ReportError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Report exporter configured with these settings
    pub fn exporter(&self) -> ReportExporter {
        ReportExporter::new(
            Box::new(LocaleCurrencyFormatter::new(
                self.currency_code.clone(),
                self.locale.clone(),
            )),
            Box::new(LongDateFormatter::new(self.date_format.clone())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::GroupingStyle;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_code.as_str(), "INR");
        assert_eq!(settings.locale.grouping, GroupingStyle::Indian);
        assert_eq!(settings.title_prefix, "Maintenance Report");
        assert_eq!(settings.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_code = CurrencyCode::new("USD");
        settings.locale = LocaleConfig::en_us();
        settings.title_prefix = "Society Dues".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_code.as_str(), "USD");
        assert_eq!(loaded.locale.grouping, GroupingStyle::Western);
        assert_eq!(loaded.title_prefix, "Society Dues");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"output_dir": "/tmp/reports"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.output_dir, PathBuf::from("/tmp/reports"));
        assert_eq!(loaded.currency_code.as_str(), "INR");
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{{{").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }

    #[test]
    fn test_invalid_date_format_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));

        let mut settings = Settings::default();
        settings.date_format = "%Q".into();
        assert!(settings.save(&paths).is_err());
    }

    #[test]
    fn test_exporter_with_bad_date_format_does_not_panic() {
        use crate::models::{EntryStatus, ExpenseEntry, NewEntry};
        use chrono::NaiveDate;

        let mut settings = Settings::default();
        settings.date_format = "%Q".into();
        let entry = ExpenseEntry::from_new(NewEntry {
            item: "Water Bill".into(),
            month: "Mar-24".into(),
            amount: Money::from_major(1500),
            deadline: NaiveDate::from_ymd_opt(2024, 3, 10),
            status: EntryStatus::Pending,
        });

        let bytes = settings.exporter().render(&[entry], "March");
        assert!(String::from_utf8_lossy(&bytes).contains("2024-03-10"));
    }

    #[test]
    fn test_exporter_uses_settings() {
        let mut settings = Settings::default();
        settings.currency_code = CurrencyCode::new("USD");
        settings.locale = LocaleConfig::en_us();
        let exporter = settings.exporter();
        assert_eq!(exporter.format_amount(Money::from_major(1_234_567)), "$1,234,567");
    }
}
