//! Status bar view
//!
//! Shows the current screen, any status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tour::TourState;
use crate::tui::app::{ActiveScreen, App};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let screen = match app.active_screen {
        ActiveScreen::Dashboard => " Dashboard ",
        ActiveScreen::Tutorial => " Tutorial ",
    };

    let mut spans = vec![Span::styled(
        screen,
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = key_hints(app);

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Hints for whatever the keyboard currently drives
fn key_hints(app: &App) -> &'static str {
    let Some(screen) = app.tutorial.as_ref() else {
        return " t:Tutorial  1-3:Lists  ?:Help  q:Quit ";
    };
    match screen.session.state() {
        TourState::AwaitingConsent => " Enter:Start  Esc:Not now  s:Save  c:Cancel ",
        TourState::Running(_) => " ←/→:Steps  Esc:Skip  j/k:Scroll ",
        TourState::Dormant | TourState::Completed => {
            " r:Tour  s:Save  c:Cancel  j/k:Scroll  q:Quit "
        }
    }
}
