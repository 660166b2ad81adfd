//! Entry display formatting
//!
//! Plain-text renditions of the report table for batch commands.

use crate::export::ReportExporter;
use crate::models::ExpenseEntry;
use crate::services::RejectedRow;

/// Format the entry list with a total line
pub fn format_entry_table(entries: &[ExpenseEntry], exporter: &ReportExporter) -> String {
    if entries.is_empty() {
        return "No entries.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5}  {:24} {:8} {:>14}  {:10}  {:8}\n",
        "Sr.No", "Item", "Month", "Amount", "Deadline", "Status"
    ));
    output.push_str(&"-".repeat(78));
    output.push('\n');

    for (i, entry) in entries.iter().enumerate() {
        let deadline = entry
            .deadline
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "{:>5}  {} {:8} {:>14}  {:10}  {:8}\n",
            i + 1,
            truncate(&entry.item, 24),
            entry.month,
            exporter.format_amount(entry.amount),
            deadline,
            entry.status
        ));
    }

    output.push_str(&"-".repeat(78));
    output.push('\n');
    let total: crate::models::Money = entries.iter().map(|e| e.amount).sum();
    output.push_str(&format!(
        "{:>5}  {:24} {:8} {:>14}\n",
        "",
        "TOTAL",
        "",
        exporter.format_amount(total)
    ));

    output
}

/// Format rejected batch rows, one field error per line
pub fn format_rejected_rows(rows: &[RejectedRow]) -> String {
    let mut output = String::new();
    for row in rows {
        for (field, message) in row.errors.iter() {
            output.push_str(&format!("  row {}: {}: {}\n", row.row, field.label(), message));
        }
    }
    output
}

/// Pad or cut to `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    let len = s.chars().count();
    if len <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
