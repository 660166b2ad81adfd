//! Report export
//!
//! - `format`: currency and date formatting behind injectable traits
//! - `report`: the spreadsheet-compatible HTML document
//! - `sink`: where the finished document is delivered

pub mod format;
pub mod report;
pub mod sink;

pub use format::{
    CurrencyCode, CurrencyFormatter, DateFormatter, GroupingStyle, LocaleConfig,
    LocaleCurrencyFormatter, LongDateFormatter,
};
pub use report::{ReportExporter, ReportTable, REPORT_FILENAME, UTF8_BOM, WORKSHEET_NAME};
pub use sink::{Delivery, DirectorySink, DownloadSink, MemorySink};
