//! Tour consent dialog
//!
//! Offered when the tutorial opens. The tour also starts by itself after a
//! short delay if the dialog is left alone.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

pub fn render(frame: &mut Frame, area: Rect) {
    let area = centered_rect_fixed(56, 9, area);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Welcome ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Let's create your first job together.",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "A short tour walks you through each part of the form.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Start Learning  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Not now"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
