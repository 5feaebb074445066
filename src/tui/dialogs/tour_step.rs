//! Tour step dialog
//!
//! Pinned to the bottom-right of the tutorial screen. Shows where the user is
//! in the tour, the current step, and the controls that apply right now.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::tour::TutorialSession;
use crate::tui::layout::step_dialog_area;

pub fn render(frame: &mut Frame, session: &TutorialSession, area: Rect) {
    let (Some(step), Some((index, count))) = (session.current_step(), session.progress()) else {
        return;
    };

    let area = step_dialog_area(area);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Step {} of {} ", index, count))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(2),    // Title and description
            Constraint::Length(1), // Progress
            Constraint::Length(1), // Controls
        ])
        .split(inner);

    let body = vec![
        Line::from(Span::styled(
            step.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            step.description,
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(session.progress_ratio().clamp(0.0, 1.0))
        .label(format!("{}/{}", index, count));
    frame.render_widget(gauge, chunks[1]);

    frame.render_widget(Paragraph::new(controls(session)), chunks[2]);
}

/// Back only exists past the first step; Next turns into Finish on the last
fn controls(session: &TutorialSession) -> Line<'static> {
    let mut spans = Vec::new();
    if session.can_go_back() {
        spans.push(Span::styled("[←]", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" Back  "));
    }
    spans.push(Span::styled("[→]", Style::default().fg(Color::Green)));
    spans.push(Span::raw(format!(" {}  ", session.forward_label())));
    spans.push(Span::styled("[Esc]", Style::default().fg(Color::Red)));
    spans.push(Span::raw(" Skip"));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::DashboardData;
    use crate::tui::app::App;
    use crate::tui::views::test_support::{draw, screen_text};
    use std::time::{Duration, Instant};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn running_app<'a>(settings: &'a Settings, data: &'a DashboardData) -> (App<'a>, Instant) {
        let mut app = App::new(settings, data, (100, 30));
        let now = Instant::now();
        app.open_tutorial(now);
        app.start_tour(now);
        (app, now)
    }

    fn controls_text(app: &App) -> String {
        line_text(&controls(&app.tutorial.as_ref().unwrap().session))
    }

    #[test]
    fn test_back_hidden_on_first_step() {
        let settings = Settings::default();
        let data = DashboardData::sample();
        let (mut app, now) = running_app(&settings, &data);
        assert_eq!(controls_text(&app), "[→] Next  [Esc] Skip");

        app.next_step(now);
        assert_eq!(controls_text(&app), "[←] Back  [→] Next  [Esc] Skip");
    }

    #[test]
    fn test_finish_on_last_step() {
        let settings = Settings::default();
        let data = DashboardData::sample();
        let (mut app, mut now) = running_app(&settings, &data);
        for _ in 0..5 {
            app.next_step(now);
            now += Duration::from_millis(500);
            app.tick(now);
        }
        assert!(controls_text(&app).contains("Finish"));

        let text = screen_text(&draw(&app));
        assert!(text.contains("Step 6 of 6"));
        assert!(text.contains("Save the job"));
        assert!(text.contains("6/6"));
    }

    #[test]
    fn test_dialog_sits_bottom_right() {
        let settings = Settings::default();
        let data = DashboardData::sample();
        let (app, _) = running_app(&settings, &data);
        let buf = draw(&app);
        // Main area is 29 rows, so the 10-row dialog spans rows 19..29 ending one column from the edge
        assert_eq!(buf.cell((47, 19)).unwrap().symbol(), "┌");
        assert_eq!(buf.cell((98, 28)).unwrap().symbol(), "┘");
    }
}
