//! Entry table view
//!
//! Lists the entries in insertion order with a running total row.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::export::report::HEADERS;
use crate::tui::app::App;
use crate::tui::dialogs::entry::status_color;

/// Render the report title header
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(Span::styled(
        app.session.title().to_uppercase(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(
        Paragraph::new(title)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

/// Render the entry table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let entries = app.session.entries();

    let block = Block::default()
        .title(format!(" Expenses ({}) ", entries.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if entries.is_empty() {
        let text = Paragraph::new("No expenses yet. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let header = Row::new(
        HEADERS
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD))),
    )
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let mut rows: Vec<Row> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let deadline = entry
                .deadline
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string());
            Row::new(vec![
                Cell::from((i + 1).to_string()),
                Cell::from(entry.item.clone()),
                Cell::from(entry.month.clone()),
                Cell::from(app.exporter.format_amount(entry.amount)),
                Cell::from(deadline),
                Cell::from(entry.status.to_string())
                    .style(Style::default().fg(status_color(entry.status))),
            ])
        })
        .collect();

    rows.push(
        Row::new(vec![
            Cell::from(""),
            Cell::from("TOTAL"),
            Cell::from(""),
            Cell::from(app.exporter.format_amount(app.session.total())),
            Cell::from(""),
            Cell::from(""),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD)),
    );

    let widths = [
        Constraint::Length(6),
        Constraint::Min(16),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(18),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}
