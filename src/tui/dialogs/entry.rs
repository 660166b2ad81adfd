//! Add-entry dialog
//!
//! Text fields are edited through [`TextInput`]s; every change is pushed to
//! the session draft so validation errors clear as the user types. Billing
//! month and status are selectors cycled with the arrow keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::EntryStatus;
use crate::services::ReportSession;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;
use crate::validation::{Field, FormDraft};

/// Order in which Tab walks the form
const FIELD_ORDER: [Field; 5] = [
    Field::Item,
    Field::Month,
    Field::Amount,
    Field::Deadline,
    Field::Status,
];

/// What a key press did to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
    Cancel,
}

/// Cursor state of the entry form
#[derive(Debug, Clone)]
pub struct EntryFormState {
    pub focused: Field,
    pub item: TextInput,
    pub amount: TextInput,
    pub deadline: TextInput,
}

impl Default for EntryFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryFormState {
    pub fn new() -> Self {
        Self {
            focused: Field::Item,
            item: TextInput::new().label("Item Name").placeholder("e.g. Water Bill"),
            amount: TextInput::new().label("Amount").placeholder("e.g. 1500"),
            deadline: TextInput::new().label("Deadline").placeholder("YYYY-MM-DD"),
        }
    }

    /// Prefill the inputs from an existing draft
    pub fn from_draft(draft: &FormDraft) -> Self {
        let mut state = Self::new();
        state.item.set_content(draft.item.as_str());
        state.amount.set_content(draft.amount.as_str());
        state.deadline.set_content(draft.deadline.as_str());
        state
    }

    pub fn next_field(&mut self) {
        let i = field_position(self.focused);
        self.focused = FIELD_ORDER[(i + 1) % FIELD_ORDER.len()];
    }

    pub fn prev_field(&mut self) {
        let i = field_position(self.focused);
        self.focused = FIELD_ORDER[(i + FIELD_ORDER.len() - 1) % FIELD_ORDER.len()];
    }

    fn input_mut(&mut self, field: Field) -> Option<&mut TextInput> {
        match field {
            Field::Item => Some(&mut self.item),
            Field::Amount => Some(&mut self.amount),
            Field::Deadline => Some(&mut self.deadline),
            Field::Month | Field::Status => None,
        }
    }

    /// Apply a key to the form, mirroring text edits into the session
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        session: &mut ReportSession,
        months: &[String],
    ) -> FormAction {
        match key.code {
            KeyCode::Esc => return FormAction::Cancel,
            KeyCode::Enter => return FormAction::Submit,
            KeyCode::Tab => {
                self.next_field();
                return FormAction::None;
            }
            KeyCode::BackTab => {
                self.prev_field();
                return FormAction::None;
            }
            _ => {}
        }

        let field = self.focused;
        match field {
            Field::Month => match key.code {
                KeyCode::Left | KeyCode::Up => session.cycle_month(months, false),
                KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
                    session.cycle_month(months, true)
                }
                _ => {}
            },
            Field::Status => {
                let status = session.draft().status;
                match key.code {
                    KeyCode::Left | KeyCode::Up => session.set_status(status.prev()),
                    KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
                        session.set_status(status.next())
                    }
                    _ => {}
                }
            }
            _ => {
                let Some(input) = self.input_mut(field) else {
                    return FormAction::None;
                };
                let changed = match key.code {
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        input.insert(c);
                        true
                    }
                    KeyCode::Backspace => {
                        input.backspace();
                        true
                    }
                    KeyCode::Delete => {
                        input.delete();
                        true
                    }
                    KeyCode::Left => {
                        input.move_left();
                        false
                    }
                    KeyCode::Right => {
                        input.move_right();
                        false
                    }
                    KeyCode::Home => {
                        input.move_start();
                        false
                    }
                    KeyCode::End => {
                        input.move_end();
                        false
                    }
                    _ => false,
                };
                if changed {
                    let value = input.value().to_string();
                    session.edit_field(field, value);
                }
            }
        }
        FormAction::None
    }
}

fn field_position(field: Field) -> usize {
    FIELD_ORDER.iter().position(|f| *f == field).unwrap_or(0)
}

/// Render the add-entry dialog
pub fn render(frame: &mut Frame, state: &EntryFormState, session: &ReportSession) {
    let area = centered_rect_fixed(60, 19, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Each field gets an input row and an error row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let draft = session.draft();
    let errors = session.errors();

    for (i, field) in FIELD_ORDER.iter().copied().enumerate() {
        let row = chunks[i * 2];
        let focused = state.focused == field;
        match field {
            Field::Item => render_input(frame, &state.item, focused, row),
            Field::Amount => render_input(frame, &state.amount, focused, row),
            Field::Deadline => render_input(frame, &state.deadline, focused, row),
            Field::Month => {
                let value = if draft.month.is_empty() {
                    "Select Month"
                } else {
                    draft.month.as_str()
                };
                render_selector(frame, field.label(), value, focused, row);
            }
            Field::Status => {
                render_selector(frame, field.label(), &draft.status.to_string(), focused, row)
            }
        }

        if let Some(message) = errors.get(field) {
            let error_line = Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(Paragraph::new(error_line), chunks[i * 2 + 1]);
        }
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Change  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Close"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[10]);
}

fn render_input(frame: &mut Frame, input: &TextInput, focused: bool, area: Rect) {
    frame.render_widget(input.clone().focused(focused), area);
}

fn render_selector(frame: &mut Frame, label: &str, value: &str, focused: bool, area: Rect) {
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let line = Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        Span::styled(format!("< {} >", value), value_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Colour used for a status in tables
pub fn status_color(status: EntryStatus) -> Color {
    match status {
        EntryStatus::Pending => Color::Yellow,
        EntryStatus::Paid => Color::Green,
        EntryStatus::Overdue => Color::Red,
    }
}
