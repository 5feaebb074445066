//! Help dialog
//!
//! Shows keyboard shortcuts for the current screen

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveScreen, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.active_screen))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(screen: ActiveScreen) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("Ctrl+c", "Quit from anywhere"),
        key_line("?", "Show/hide help"),
        Line::from(""),
    ];

    match screen {
        ActiveScreen::Dashboard => {
            lines.push(heading("Dashboard"));
            lines.push(Line::from(""));
            lines.push(key_line("t/Enter", "Open the guided tutorial"));
            lines.push(key_line("1", "Quotes list"));
            lines.push(key_line("2", "Jobs list"));
            lines.push(key_line("3", "Invoices list"));
        }
        ActiveScreen::Tutorial => {
            lines.push(heading("Guided Tour"));
            lines.push(Line::from(""));
            lines.push(key_line("Enter", "Start the tour / next step"));
            lines.push(key_line("→/n", "Next step (Finish on the last)"));
            lines.push(key_line("←/b", "Previous step"));
            lines.push(key_line("Esc/x", "Skip the tour"));
            lines.push(key_line("r", "Take the tour again"));
            lines.push(Line::from(""));
            lines.push(heading("Job Form"));
            lines.push(Line::from(""));
            lines.push(key_line("s", "Save the job"));
            lines.push(key_line("c", "Cancel and go back"));
            lines.push(key_line("j/k", "Scroll down/up"));
            lines.push(key_line("PgDn/PgUp", "Scroll a page"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press Esc or ? to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
