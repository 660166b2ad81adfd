//! Maintenance report document
//!
//! The report is an HTML table wrapped in Office XML namespaces. Spreadsheet
//! applications open it as a worksheet named "Maintenance Report" when it is
//! saved with an `.xls` extension.

use std::fmt::Write as _;

use crate::error::ReportResult;
use crate::models::ExpenseEntry;
use crate::services::totals::total;

use super::format::{CurrencyFormatter, DateFormatter, LocaleCurrencyFormatter, LongDateFormatter};
use super::sink::{Delivery, DownloadSink};

/// Fixed file name of the exported report
pub const REPORT_FILENAME: &str = "Maintenance_Report.xls";

/// Worksheet name shown by the spreadsheet application
pub const WORKSHEET_NAME: &str = "Maintenance Report";

/// UTF-8 byte-order mark; keeps the rupee sign intact in spreadsheet readers
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Column headers, left to right
pub const HEADERS: [&str; 6] = [
    "Sr.No",
    "Item",
    "Month",
    "Amount",
    "Payment deadline",
    "Status",
];

/// Cell text of the report, before markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    /// Uppercased title
    pub title: String,
    /// One row of six cells per entry
    pub rows: Vec<[String; 6]>,
    /// Formatted grand total
    pub total: String,
}

/// Builds and delivers the maintenance report
pub struct ReportExporter {
    currency: Box<dyn CurrencyFormatter>,
    dates: Box<dyn DateFormatter>,
}

impl Default for ReportExporter {
    fn default() -> Self {
        Self::new(
            Box::new(LocaleCurrencyFormatter::inr()),
            Box::new(LongDateFormatter::default()),
        )
    }
}

impl ReportExporter {
    pub fn new(currency: Box<dyn CurrencyFormatter>, dates: Box<dyn DateFormatter>) -> Self {
        Self { currency, dates }
    }

    /// Format an amount the way the report does
    pub fn format_amount(&self, amount: crate::models::Money) -> String {
        self.currency.format(amount)
    }

    /// Lay out the report cells for `entries` in list order
    pub fn table(&self, entries: &[ExpenseEntry], title: &str) -> ReportTable {
        let rows = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                [
                    (i + 1).to_string(),
                    entry.item.clone(),
                    entry.month.clone(),
                    self.currency.format(entry.amount),
                    entry
                        .deadline
                        .map(|d| self.dates.format(d))
                        .unwrap_or_default(),
                    entry.status.to_string(),
                ]
            })
            .collect();

        ReportTable {
            title: title.to_uppercase(),
            rows,
            total: self.currency.format(total(entries)),
        }
    }

    /// Render the complete document, BOM included
    pub fn render(&self, entries: &[ExpenseEntry], title: &str) -> Vec<u8> {
        let html = render_html(&self.table(entries, title));
        let mut bytes = Vec::with_capacity(UTF8_BOM.len() + html.len());
        bytes.extend_from_slice(UTF8_BOM);
        bytes.extend_from_slice(html.as_bytes());
        bytes
    }

    /// Render the report and hand it to `sink` as `Maintenance_Report.xls`
    pub fn export(
        &self,
        entries: &[ExpenseEntry],
        title: &str,
        sink: &mut dyn DownloadSink,
    ) -> ReportResult<Delivery> {
        let bytes = self.render(entries, title);
        tracing::debug!(entries = entries.len(), bytes = bytes.len(), "report rendered");
        sink.deliver(&bytes, REPORT_FILENAME)
    }
}

fn render_html(table: &ReportTable) -> String {
    let mut html = String::new();

    // fmt::Write into a String cannot fail
    let _ = write!(
        html,
        concat!(
            "<html xmlns:o=\"urn:schemas-microsoft-com:office:office\" ",
            "xmlns:x=\"urn:schemas-microsoft-com:office:excel\" ",
            "xmlns=\"http://www.w3.org/TR/REC-html40\">\n",
            "<head>\n",
            "<meta charset=\"UTF-8\">\n",
            "<!--[if gte mso 9]><xml><x:ExcelWorkbook><x:ExcelWorksheets><x:ExcelWorksheet>",
            "<x:Name>{}</x:Name>",
            "<x:WorksheetOptions><x:DisplayGridlines/></x:WorksheetOptions>",
            "</x:ExcelWorksheet></x:ExcelWorksheets></x:ExcelWorkbook></xml><![endif]-->\n",
            "<style>td, th {{ border: 1px solid #000000; padding: 4px; text-align: center; }}</style>\n",
            "</head>\n",
            "<body>\n",
            "<table>\n"
        ),
        WORKSHEET_NAME
    );

    let _ = writeln!(
        html,
        "<tr><td colspan=\"6\" style=\"border: none; font-weight: bold; font-size: 16px;\">{}</td></tr>",
        escape_html(&table.title)
    );

    html.push_str("<tr>");
    for header in HEADERS {
        let _ = write!(html, "<th>{}</th>", header);
    }
    html.push_str("</tr>\n");

    for row in &table.rows {
        html.push_str("<tr>");
        for (i, cell) in row.iter().enumerate() {
            if i == 1 {
                let _ = write!(html, "<td style=\"text-align: left;\">{}</td>", escape_html(cell));
            } else {
                let _ = write!(html, "<td>{}</td>", escape_html(cell));
            }
        }
        html.push_str("</tr>\n");
    }

    let _ = writeln!(
        html,
        "<tr><td colspan=\"3\"><b>TOTAL</b></td><td><b>{}</b></td><td></td><td></td></tr>",
        escape_html(&table.total)
    );

    html.push_str("</table>\n</body>\n</html>\n");
    html
}

/// Escape text for use inside HTML element content
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::sink::MemorySink;
    use crate::models::{EntryStatus, Money, NewEntry};
    use crate::services::store::EntryStore;
    use chrono::NaiveDate;

    fn internet_bill() -> NewEntry {
        NewEntry {
            item: "Internet Bill".into(),
            month: "Mar-24".into(),
            amount: Money::from_major(1500),
            deadline: NaiveDate::from_ymd_opt(2024, 3, 10),
            status: EntryStatus::Pending,
        }
    }

    fn rendered(store: &EntryStore, title: &str) -> String {
        let bytes = ReportExporter::default().render(store.list(), title);
        assert!(bytes.starts_with(UTF8_BOM));
        String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap()
    }

    #[test]
    fn test_table_rows() {
        let mut store = EntryStore::new();
        store.add(internet_bill());

        let table = ReportExporter::default().table(store.list(), "Maintenance Report - March 2024");
        assert_eq!(table.title, "MAINTENANCE REPORT - MARCH 2024");
        assert_eq!(
            table.rows[0],
            [
                "1".to_string(),
                "Internet Bill".to_string(),
                "Mar-24".to_string(),
                "₹1,500".to_string(),
                "10 March 2024".to_string(),
                "Pending".to_string(),
            ]
        );
        assert_eq!(table.total, "₹1,500");
    }

    #[test]
    fn test_sequence_numbers_follow_list_order() {
        let mut store = EntryStore::new();
        for item in ["Water", "Power", "Gas"] {
            let mut entry = internet_bill();
            entry.item = item.into();
            entry.deadline = None;
            store.add(entry);
        }

        let table = ReportExporter::default().table(store.list(), "t");
        let seq: Vec<(&str, &str)> = table
            .rows
            .iter()
            .map(|r| (r[0].as_str(), r[1].as_str()))
            .collect();
        assert_eq!(seq, vec![("1", "Water"), ("2", "Power"), ("3", "Gas")]);
        assert!(table.rows.iter().all(|r| r[4].is_empty()));
        assert_eq!(table.total, "₹4,500");
    }

    #[test]
    fn test_document_structure() {
        let mut store = EntryStore::new();
        store.add(internet_bill());
        let html = rendered(&store, "march bills");

        assert!(html.contains("xmlns:x=\"urn:schemas-microsoft-com:office:excel\""));
        assert!(html.contains("<x:Name>Maintenance Report</x:Name>"));
        assert!(html.contains("<td colspan=\"6\""));
        assert!(html.contains(">MARCH BILLS</td>"));
        assert!(html.contains(
            "<tr><th>Sr.No</th><th>Item</th><th>Month</th><th>Amount</th><th>Payment deadline</th><th>Status</th></tr>"
        ));
        assert!(html.contains(
            "<tr><td>1</td><td style=\"text-align: left;\">Internet Bill</td><td>Mar-24</td><td>₹1,500</td><td>10 March 2024</td><td>Pending</td></tr>"
        ));
        assert!(html.contains(
            "<tr><td colspan=\"3\"><b>TOTAL</b></td><td><b>₹1,500</b></td><td></td><td></td></tr>"
        ));
    }

    #[test]
    fn test_row_order_in_document() {
        let mut store = EntryStore::new();
        store.add(internet_bill());
        let html = rendered(&store, "t");

        let title = html.find("colspan=\"6\"").unwrap();
        let header = html.find("<th>Sr.No</th>").unwrap();
        let first_row = html.find("<td>1</td>").unwrap();
        let total = html.find("<b>TOTAL</b>").unwrap();
        assert!(title < header && header < first_row && first_row < total);
    }

    #[test]
    fn test_empty_report() {
        let html = rendered(&EntryStore::new(), "Empty");
        assert!(html.contains("<td><b>₹0</b></td>"));
        assert!(!html.contains("<td>1</td>"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut store = EntryStore::new();
        let mut entry = internet_bill();
        entry.item = "<b>Tom & Jerry's</b>".into();
        store.add(entry);

        let html = rendered(&store, "a < b");
        assert!(html.contains("&lt;b&gt;Tom &amp; Jerry&#39;s&lt;/b&gt;"));
        assert!(html.contains(">A &lt; B</td>"));
    }

    #[test]
    fn test_export_uses_fixed_filename() {
        let mut store = EntryStore::new();
        store.add(internet_bill());
        let mut sink = MemorySink::new();

        let delivery = ReportExporter::default()
            .export(store.list(), "t", &mut sink)
            .unwrap();
        let (name, bytes) = sink.last().unwrap();
        assert_eq!(name, REPORT_FILENAME);
        assert_eq!(delivery.size, bytes.len());
        assert!(bytes.starts_with(UTF8_BOM));
    }
}
