//! TUI views
//!
//! The report screen is a title header, the entry table and a status bar.
//! Dialogs draw on top.

pub mod entries;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    entries::render_header(frame, app, layout.header);
    entries::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::AddEntry => {
            dialogs::entry::render(frame, &app.entry_form, &app.session);
        }
        ActiveDialog::ConfirmDelete => {
            if let Some(message) = dialogs::confirm::message(&app.session) {
                dialogs::confirm::render(frame, &message);
            }
        }
        ActiveDialog::EditTitle => {
            dialogs::title::render(frame, &app.title_input);
        }
        ActiveDialog::Help => {
            dialogs::help::render(frame);
        }
        ActiveDialog::None => {}
    }
}
