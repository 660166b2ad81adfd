//! Batch draft import
//!
//! Reads form drafts from JSON or CSV so a report can be produced without the
//! terminal UI. Every row goes through the same validation and submit path as
//! the interactive form.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ReportError, ReportResult};
use crate::models::{EntryId, EntryStatus};
use crate::validation::{Field, FieldErrors, FormDraft};

use super::session::ReportSession;

/// Input file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    Csv,
}

impl ImportFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Some(Self::Json),
            Some("csv") => Some(Self::Csv),
            _ => None,
        }
    }
}

/// An amount given either as text or as a JSON number
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Text(String),
    Number(f64),
}

impl Default for RawAmount {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl RawAmount {
    fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct JsonDraftRow {
    #[serde(default)]
    item: String,
    #[serde(default)]
    month: String,
    #[serde(default)]
    amount: RawAmount,
    #[serde(default)]
    deadline: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CsvDraftRow {
    #[serde(default)]
    item: String,
    #[serde(default)]
    month: String,
    #[serde(default)]
    amount: String,
    #[serde(default)]
    deadline: String,
    #[serde(default)]
    status: String,
}

/// A row that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based position in the input
    pub row: usize,
    pub errors: FieldErrors,
}

/// Result of applying a batch of drafts to a session
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub accepted: Vec<EntryId>,
    pub rejected: Vec<RejectedRow>,
}

/// Parse a status; blank means Pending and unknown text falls back to Pending
fn parse_status(raw: &str) -> EntryStatus {
    if raw.trim().is_empty() {
        return EntryStatus::Pending;
    }
    raw.parse().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "defaulting status to Pending");
        EntryStatus::Pending
    })
}

/// Parse drafts from a JSON array of objects
pub fn parse_json_drafts(json: &str) -> ReportResult<Vec<FormDraft>> {
    let rows: Vec<JsonDraftRow> = serde_json::from_str(json)?;
    Ok(rows
        .into_iter()
        .map(|row| FormDraft {
            item: row.item,
            month: row.month,
            amount: row.amount.into_text(),
            deadline: row.deadline.unwrap_or_default(),
            status: parse_status(row.status.as_deref().unwrap_or_default()),
        })
        .collect())
}

/// Parse drafts from CSV with an `item,month,amount,deadline,status` header
pub fn parse_csv_drafts<R: Read>(reader: R) -> ReportResult<Vec<FormDraft>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let mut drafts = Vec::new();
    for record in reader.deserialize::<CsvDraftRow>() {
        let row = record?;
        drafts.push(FormDraft {
            item: row.item,
            month: row.month,
            amount: row.amount,
            deadline: row.deadline,
            status: parse_status(&row.status),
        });
    }
    Ok(drafts)
}

/// Read drafts from a file in the given format
pub fn load_drafts(path: &Path, format: ImportFormat) -> ReportResult<Vec<FormDraft>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ReportError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let drafts = match format {
        ImportFormat::Json => parse_json_drafts(&contents)?,
        ImportFormat::Csv => parse_csv_drafts(contents.as_bytes())?,
    };
    tracing::info!(path = %path.display(), rows = drafts.len(), "drafts loaded");
    Ok(drafts)
}

/// Submit each draft through the session's form path
pub fn apply_drafts(session: &mut ReportSession, drafts: Vec<FormDraft>) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for (index, draft) in drafts.into_iter().enumerate() {
        session.edit_field(Field::Item, draft.item);
        session.edit_field(Field::Month, draft.month);
        session.edit_field(Field::Amount, draft.amount);
        session.edit_field(Field::Deadline, draft.deadline);
        session.set_status(draft.status);

        match session.submit() {
            Ok(id) => outcome.accepted.push(id),
            Err(errors) => {
                tracing::warn!(row = index + 1, errors = %errors, "row rejected");
                outcome.rejected.push(RejectedRow {
                    row: index + 1,
                    errors,
                });
            }
        }
    }

    outcome
}
