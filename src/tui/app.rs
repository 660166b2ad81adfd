//! Application state for the TUI
//!
//! `App` wraps the [`ReportSession`] with what only the terminal needs:
//! selection, the open dialog and the form's cursor state.

use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::export::{DirectorySink, ReportExporter};
use crate::models::EntryId;
use crate::services::ReportSession;

use super::dialogs::entry::EntryFormState;
use super::widgets::TextInput;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddEntry,
    ConfirmDelete,
    EditTitle,
    Help,
}

/// Main application state
pub struct App {
    /// Entries, draft, errors, pending delete and title
    pub session: ReportSession,

    /// Builds the exported document
    pub exporter: ReportExporter,

    /// Where exports are saved
    pub output_dir: PathBuf,

    pub should_quit: bool,

    pub active_dialog: ActiveDialog,

    /// Selected row in the entry table
    pub selected_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Cursor state of the entry form
    pub entry_form: EntryFormState,

    /// Title editor input
    pub title_input: TextInput,
}

impl App {
    pub fn new(session: ReportSession, settings: &Settings) -> Self {
        Self {
            session,
            exporter: settings.exporter(),
            output_dir: settings.output_dir.clone(),
            should_quit: false,
            active_dialog: ActiveDialog::None,
            selected_index: 0,
            status_message: None,
            entry_form: EntryFormState::new(),
            title_input: TextInput::new().label("Title"),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog, preparing its inputs from the session
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::AddEntry => {
                self.entry_form = EntryFormState::from_draft(self.session.draft());
            }
            ActiveDialog::EditTitle => {
                self.title_input = TextInput::new()
                    .label("Title")
                    .content(self.session.title())
                    .focused(true);
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Id of the entry under the cursor
    pub fn selected_entry(&self) -> Option<EntryId> {
        self.session.entries().get(self.selected_index).map(|e| e.id)
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.session.entries().len() {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the list after a removal
    pub fn clamp_selection(&mut self) {
        let len = self.session.entries().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Save the report into the output directory
    pub fn export(&mut self) {
        let mut sink = DirectorySink::new(&self.output_dir);
        match self.session.export(&self.exporter, &mut sink) {
            Ok(delivery) => self.set_status(format!("Exported to {}", delivery.location)),
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                self.set_status(format!("Export failed: {}", e));
            }
        }
    }
}
