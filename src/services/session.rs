//! Report session state
//!
//! `ReportSession` is the single state container a UI shell drives. It owns
//! the entry store, the form draft with its error map, the pending delete and
//! the report title. Shells read it back after every action and redraw; derived
//! values such as the total are recomputed on each read.

use chrono::NaiveDate;

use crate::error::ReportResult;
use crate::export::{Delivery, DownloadSink, ReportExporter};
use crate::models::{month_options, BillingMonth, EntryId, EntryStatus, ExpenseEntry, Money};
use crate::validation::{Field, FieldErrors, FormDraft};

use super::store::EntryStore;
use super::totals::total;

/// Default prefix of the report title
pub const DEFAULT_TITLE_PREFIX: &str = "Maintenance Report";

/// Two-step delete confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteState {
    #[default]
    Idle,
    /// Entry marked for removal, awaiting confirm or cancel
    Pending(EntryId),
}

/// Title seeded from the month containing `today`, e.g.
/// "Maintenance Report - March 2024"
pub fn default_title(prefix: &str, today: NaiveDate) -> String {
    format!("{} - {}", prefix, BillingMonth::containing(today).long_name())
}

/// Interactive state of one report
#[derive(Debug, Clone)]
pub struct ReportSession {
    store: EntryStore,
    draft: FormDraft,
    errors: FieldErrors,
    delete_state: DeleteState,
    title: String,
}

impl ReportSession {
    /// Start an empty session with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            store: EntryStore::new(),
            draft: FormDraft::new(),
            errors: FieldErrors::new(),
            delete_state: DeleteState::Idle,
            title: title.into(),
        }
    }

    /// Start an empty session titled after the month containing `today`
    pub fn starting_on(today: NaiveDate, title_prefix: &str) -> Self {
        Self::new(default_title(title_prefix, today))
    }

    // --- observable state ---

    pub fn entries(&self) -> &[ExpenseEntry] {
        self.store.list()
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Sum of all entry amounts, recomputed on each call
    pub fn total(&self) -> Money {
        total(self.store.list())
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn delete_state(&self) -> DeleteState {
        self.delete_state
    }

    pub fn pending_delete(&self) -> Option<EntryId> {
        match self.delete_state {
            DeleteState::Idle => None,
            DeleteState::Pending(id) => Some(id),
        }
    }

    /// Month selector options for today's date
    pub fn month_options(&self) -> Vec<String> {
        month_options(chrono::Local::now().date_naive())
    }

    // --- form input ---

    /// Replace a field's raw value and drop any error shown for it
    pub fn edit_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.clear(field);
    }

    /// Choose a payment status
    pub fn set_status(&mut self, status: EntryStatus) {
        self.draft.status = status;
        self.errors.clear(Field::Status);
    }

    /// Step the billing month through `options`
    ///
    /// An unset or unknown month moves to the first option.
    pub fn cycle_month(&mut self, options: &[String], forward: bool) {
        if options.is_empty() {
            return;
        }
        let next = match options.iter().position(|m| *m == self.draft.month) {
            Some(i) if forward => (i + 1) % options.len(),
            Some(i) => (i + options.len() - 1) % options.len(),
            None => 0,
        };
        self.edit_field(Field::Month, options[next].clone());
    }

    /// Validate the draft and, if valid, add it to the store
    ///
    /// On success the draft is cleared except for the billing month. On
    /// failure the errors are kept for display and also returned.
    pub fn submit(&mut self) -> Result<EntryId, FieldErrors> {
        match self.draft.to_new_entry() {
            Ok(new) => {
                let id = self.store.add(new);
                self.draft.reset_keep_month();
                self.errors.clear_all();
                Ok(id)
            }
            Err(errors) => {
                tracing::debug!(errors = %errors, "submit rejected");
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    // --- deletion ---

    /// Mark an entry for deletion; the store is untouched until confirmed
    ///
    /// Returns false if no entry has that id.
    pub fn request_delete(&mut self, id: EntryId) -> bool {
        if !self.store.contains(id) {
            return false;
        }
        self.delete_state = DeleteState::Pending(id);
        true
    }

    /// Remove the pending entry and return to idle
    pub fn confirm_delete(&mut self) -> Option<ExpenseEntry> {
        match std::mem::take(&mut self.delete_state) {
            DeleteState::Pending(id) => self.store.remove(id),
            DeleteState::Idle => None,
        }
    }

    /// Forget the pending delete without touching the store
    pub fn cancel_delete(&mut self) {
        self.delete_state = DeleteState::Idle;
    }

    // --- title and export ---

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Export the current entries under the current title
    pub fn export(
        &self,
        exporter: &ReportExporter,
        sink: &mut dyn DownloadSink,
    ) -> ReportResult<Delivery> {
        exporter.export(self.store.list(), &self.title, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{MemorySink, UTF8_BOM};
    use crate::validation::{AMOUNT_INVALID, ITEM_REQUIRED};

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn fill_internet_bill(session: &mut ReportSession) {
        session.edit_field(Field::Item, "Internet Bill");
        session.edit_field(Field::Month, "Mar-24");
        session.edit_field(Field::Amount, "1500");
        session.edit_field(Field::Deadline, "2024-03-10");
        session.set_status(EntryStatus::Pending);
    }

    #[test]
    fn test_default_title() {
        let session = ReportSession::starting_on(march_15(), DEFAULT_TITLE_PREFIX);
        assert_eq!(session.title(), "Maintenance Report - March 2024");
    }

    #[test]
    fn test_submit_adds_entry_and_keeps_month() {
        let mut session = ReportSession::starting_on(march_15(), DEFAULT_TITLE_PREFIX);
        fill_internet_bill(&mut session);
        session.set_status(EntryStatus::Paid);

        let id = session.submit().unwrap();
        assert_eq!(session.entries().len(), 1);
        assert_eq!(session.entries()[0].id, id);
        assert_eq!(session.total(), Money::from_major(1500));

        assert_eq!(session.draft(), &FormDraft::with_month("Mar-24"));
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_submit_invalid_keeps_errors() {
        let mut session = ReportSession::new("t");
        session.edit_field(Field::Month, "Mar-24");
        session.edit_field(Field::Amount, "-1");

        let errors = session.submit().unwrap_err();
        assert_eq!(errors.get(Field::Item), Some(ITEM_REQUIRED));
        assert_eq!(errors.get(Field::Amount), Some(AMOUNT_INVALID));
        assert_eq!(session.errors(), &errors);
        assert!(session.entries().is_empty());
        assert_eq!(session.draft().amount, "-1");
    }

    #[test]
    fn test_edit_clears_only_that_error() {
        let mut session = ReportSession::new("t");
        let _ = session.submit();
        assert_eq!(session.errors().len(), 3);

        // still invalid, but the message goes away as soon as the field changes
        session.edit_field(Field::Amount, "zero");
        assert!(!session.errors().contains(Field::Amount));
        assert!(session.errors().contains(Field::Item));
        assert!(session.errors().contains(Field::Month));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut session = ReportSession::new("t");
        fill_internet_bill(&mut session);
        let id = session.submit().unwrap();

        assert!(session.request_delete(id));
        assert_eq!(session.pending_delete(), Some(id));
        assert_eq!(session.entries().len(), 1);

        let removed = session.confirm_delete().unwrap();
        assert_eq!(removed.id, id);
        assert!(session.entries().is_empty());
        assert_eq!(session.delete_state(), DeleteState::Idle);
    }

    #[test]
    fn test_cancel_delete_keeps_entry() {
        let mut session = ReportSession::new("t");
        fill_internet_bill(&mut session);
        let id = session.submit().unwrap();

        session.request_delete(id);
        session.cancel_delete();
        assert_eq!(session.pending_delete(), None);
        assert_eq!(session.entries().len(), 1);

        // a later confirm has nothing to act on
        assert!(session.confirm_delete().is_none());
        assert_eq!(session.entries().len(), 1);
    }

    #[test]
    fn test_request_delete_unknown_id() {
        let mut session = ReportSession::new("t");
        assert!(!session.request_delete(EntryId::new()));
        assert_eq!(session.delete_state(), DeleteState::Idle);
    }

    #[test]
    fn test_cycle_month() {
        let options: Vec<String> = month_options(march_15());
        let mut session = ReportSession::new("t");

        session.cycle_month(&options, true);
        assert_eq!(session.draft().month, "Apr-24");
        session.cycle_month(&options, true);
        assert_eq!(session.draft().month, "Mar-24");
        session.cycle_month(&options, false);
        session.cycle_month(&options, false);
        assert_eq!(session.draft().month, "Dec-23");
    }

    #[test]
    fn test_end_to_end_export() {
        let mut session = ReportSession::starting_on(march_15(), DEFAULT_TITLE_PREFIX);
        fill_internet_bill(&mut session);
        session.submit().unwrap();

        let mut sink = MemorySink::new();
        session.export(&ReportExporter::default(), &mut sink).unwrap();

        let (_, bytes) = sink.last().unwrap();
        let html = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert!(html.contains("MAINTENANCE REPORT - MARCH 2024"));
        assert!(html.contains("<td>10 March 2024</td>"));
        assert!(html.contains("<td><b>₹1,500</b></td>"));
    }

    #[test]
    fn test_title_is_editable() {
        let mut session = ReportSession::new("old");
        session.set_title("Flat 4B expenses");
        assert_eq!(session.title(), "Flat 4B expenses");
    }
}
