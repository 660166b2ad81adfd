//! Key handling for the TUI
//!
//! Keys go to the open dialog first; otherwise they act on the entry table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::dialogs::entry::FormAction;
use super::event::Event;

/// Handle an event
pub fn handle_event(app: &mut App, event: Event) {
    if let Event::Key(key) = event {
        handle_key_event(app, key);
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return;
    }

    handle_main_key(app, key);
}

fn handle_main_key(app: &mut App, key: KeyEvent) {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('a') => app.open_dialog(ActiveDialog::AddEntry),
        KeyCode::Char('t') => app.open_dialog(ActiveDialog::EditTitle),
        KeyCode::Char('x') | KeyCode::Char('e') => app.export(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_entry() {
                if app.session.request_delete(id) {
                    app.open_dialog(ActiveDialog::ConfirmDelete);
                }
            }
        }
        _ => {}
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.close_dialog();
            }
        }
        ActiveDialog::ConfirmDelete => handle_confirm_key(app, key),
        ActiveDialog::EditTitle => handle_title_key(app, key),
        ActiveDialog::AddEntry => handle_entry_key(app, key),
        ActiveDialog::None => {}
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            if let Some(removed) = app.session.confirm_delete() {
                app.set_status(format!("Deleted \"{}\"", removed.item));
            }
            app.clamp_selection();
            app.close_dialog();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.session.cancel_delete();
            app.close_dialog();
        }
        _ => {}
    }
}

fn handle_title_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return;
        }
        KeyCode::Enter => {
            let title = app.title_input.value().to_string();
            app.session.set_title(title);
            app.close_dialog();
            return;
        }
        _ => {}
    }

    let input = &mut app.title_input;
    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

fn handle_entry_key(app: &mut App, key: KeyEvent) {
    let months = app.session.month_options();
    match app.entry_form.handle_key(key, &mut app.session, &months) {
        FormAction::None => {}
        FormAction::Cancel => app.close_dialog(),
        FormAction::Submit => match app.session.submit() {
            Ok(_) => {
                let count = app.session.entries().len();
                app.selected_index = count.saturating_sub(1);
                app.set_status("Expense added");
                app.close_dialog();
            }
            Err(errors) => {
                app.set_status(format!("{} field(s) need attention", errors.len()));
            }
        },
    }
}
