//! Stateless UI rendering for the guessing game.

use phee_core::AssetKind;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use super::app::{App, HISTORY_COLUMNS, LoadState};

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Guesses and clock
            Constraint::Length(3), // Name field
            Constraint::Length(3), // Message
            Constraint::Length(3), // Image
            Constraint::Min(4),    // History
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("PHEE")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_stats(frame, chunks[1], app);
    draw_input(frame, chunks[2], app);
    draw_message(frame, chunks[3], app);
    draw_image(frame, chunks[4], app);
    draw_history(frame, chunks[5], app);

    let help = if app.round_over() {
        "Enter/R: Play again | Q/Esc: Quit"
    } else {
        "Enter: Guess | Tab: Show silhouette | Esc: Quit"
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[6]);
}

fn draw_stats(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::raw("Guesses Left: "),
        Span::styled(
            app.guesses_left().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Time: "),
        Span::styled(app.clock(), Style::default().add_modifier(Modifier::BOLD)),
    ]);
    let stats = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(stats, area);
}

fn draw_input(frame: &mut Frame, area: Rect, app: &App) {
    let disabled = app.round_over() || app.load_state() != LoadState::Ready;
    let style = if disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let text = if app.input().is_empty() && !disabled {
        Span::styled("Enter full player name", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(app.input().to_string(), style)
    };
    let field = Paragraph::new(Line::from(text))
        .block(Block::default().borders(Borders::ALL).title("Guess"));
    frame.render_widget(field, area);
}

fn draw_message(frame: &mut Frame, area: Rect, app: &App) {
    let (text, color) = match app.load_state() {
        LoadState::Loading => ("Loading players...".to_string(), Color::Yellow),
        LoadState::Unavailable => ("No players available.".to_string(), Color::Red),
        LoadState::Ready if app.round_over() => (app.message().to_string(), Color::Green),
        LoadState::Ready => (app.message().to_string(), Color::Yellow),
    };
    let message = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(message, area);
}

fn draw_image(frame: &mut Frame, area: Rect, app: &App) {
    let text = match app.image() {
        Some((AssetKind::Actual, path)) => format!("Player actual: {}", path),
        Some((AssetKind::Headshot, path)) => format!("Player silhouette: {}", path),
        None => "Silhouette hidden".to_string(),
    };
    let image = Paragraph::new(text)
        .style(Style::default().fg(Color::Magenta))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Image"));
    frame.render_widget(image, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(HISTORY_COLUMNS.iter().map(|c| Cell::from(*c)))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let rows = app
        .history_rows()
        .into_iter()
        .map(|row| Row::new(row.into_iter().map(Cell::from)));
    let widths = [
        Constraint::Percentage(24),
        Constraint::Percentage(16),
        Constraint::Percentage(10),
        Constraint::Percentage(12),
        Constraint::Percentage(12),
        Constraint::Percentage(12),
        Constraint::Percentage(14),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Previous Guesses"));
    frame.render_widget(table, area);
}
