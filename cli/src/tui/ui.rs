use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, InputMode};

const HIGHLIGHT_SYMBOL: &str = ">> ";
const CHECK_WIDTH: u16 = 3;
const DAY_WIDTH: u16 = 10;
const COLUMN_SPACING: u16 = 1;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new("WEEKPLAN")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[1]);

    draw_form(f, app, content_chunks[0]);
    draw_output(f, app, content_chunks[1]);

    let help = match app.input_mode {
        InputMode::Normal => "j/k: Navigate | space: Toggle | e: Edit time | s: Save | q: Quit",
        InputMode::Editing => "Type time range | enter/esc: Done",
    };
    let footer_text = match &app.status {
        Some(status) => format!("{}  ({})", help, status),
        None => help.to_string(),
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);
}

fn draw_form(f: &mut Frame, app: &mut App, area: Rect) {
    let rows: Vec<Row> = app.form.rows().iter().map(|row| {
        let check = if row.is_checked() { "[x]" } else { "[ ]" };
        let time = if row.text().is_empty() {
            Span::styled(row.placeholder(), Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else {
            Span::raw(row.text().to_string())
        };
        let style = if row.is_enabled() {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };

        Row::new(vec![
            Span::raw(check),
            Span::styled(row.day().label(), Style::default().add_modifier(Modifier::BOLD)),
            time,
        ])
        .style(style)
    }).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(CHECK_WIDTH),
            Constraint::Length(DAY_WIDTH),
            Constraint::Min(10),
        ],
    )
    .column_spacing(COLUMN_SPACING)
    .header(Row::new(vec!["", "Day", "Time"]).style(Style::default().fg(Color::Yellow)))
    .block(Block::default().title(" Availability ").borders(Borders::ALL).border_type(BorderType::Rounded))
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(HIGHLIGHT_SYMBOL);

    f.render_stateful_widget(table, area, &mut app.state);

    if app.input_mode == InputMode::Editing {
        let text = app.selected_row().text();
        let before_cursor: String = text.chars().take(app.cursor_position).collect();
        let index = app.state.selected().unwrap_or(0) as u16;
        let x = area.x
            + 1
            + HIGHLIGHT_SYMBOL.width() as u16
            + CHECK_WIDTH
            + DAY_WIDTH
            + 2 * COLUMN_SPACING
            + before_cursor.width() as u16;
        // border + header row
        let y = area.y + 2 + index;
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), y));
    }
}

fn draw_output(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Output ").borders(Borders::ALL).border_type(BorderType::Rounded);
    let output = app.form.output();
    let lines = if output.is_empty() {
        vec![Line::from(Span::styled("Press s to save", Style::default().fg(Color::DarkGray)))]
    } else {
        output.lines().map(Line::from).collect()
    };
    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
