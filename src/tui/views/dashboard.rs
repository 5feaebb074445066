//! Business health dashboard
//!
//! Metric cards across the top, one pie chart per breakdown with its legend
//! underneath, and the follow-up list at the bottom.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::{Breakdown, DashboardData};
use crate::tui::app::App;
use crate::tui::layout::{chart_split, DashboardLayout};
use crate::tui::widgets::{rgb_color, PieChart};

/// Render the dashboard into `area`
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let data = app.data;
    let layout = DashboardLayout::new(area, data.follow_ups.len());

    render_header(frame, layout.header);
    render_metrics(frame, data, &app.settings.currency_symbol, layout.metrics);

    for (i, (breakdown, area)) in data.breakdowns().into_iter().zip(layout.charts).enumerate() {
        render_chart(frame, breakdown, i + 1, area);
    }

    render_follow_ups(frame, data, layout.follow_ups);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Business Health",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "New here? Press t for a guided tour of creating a job.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn render_metrics(frame: &mut Frame, data: &DashboardData, symbol: &str, areas: [Rect; 3]) {
    let metrics = [
        (
            " Total Revenue ",
            data.total_revenue.format_with_symbol(symbol),
            Color::Green,
        ),
        (
            " Outstanding ",
            data.outstanding.format_with_symbol(symbol),
            Color::Yellow,
        ),
        (" Active Jobs ", data.active_jobs.to_string(), Color::Blue),
    ];

    for ((title, value, color), area) in metrics.into_iter().zip(areas) {
        let card = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(card, area);
    }
}

fn render_chart(frame: &mut Frame, breakdown: &Breakdown, hotkey: usize, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", breakdown.title))
        .title_bottom(Line::from(format!(" [{}] open list ", hotkey)).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let legend = legend_lines(breakdown);
    let legend_rows = u16::try_from(legend.len()).unwrap_or(u16::MAX);
    let (pie_area, legend_area) = chart_split(inner, legend_rows);

    frame.render_widget(PieChart::new(breakdown), pie_area);
    frame.render_widget(Paragraph::new(legend), legend_area);
}

/// One line per bucket with a colour swatch and count, then the total
pub fn legend_lines(breakdown: &Breakdown) -> Vec<Line<'static>> {
    let name_width = breakdown
        .buckets
        .iter()
        .map(|b| b.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);

    let mut lines: Vec<Line<'static>> = breakdown
        .buckets
        .iter()
        .map(|bucket| {
            Line::from(vec![
                Span::styled(" ■ ", Style::default().fg(rgb_color(bucket.color))),
                Span::raw(format!("{:<width$} ", bucket.name, width = name_width)),
                Span::styled(
                    format!("{:>4}", bucket.count),
                    Style::default().fg(Color::White),
                ),
            ])
        })
        .collect();

    lines.push(Line::from(vec![
        Span::raw("   "),
        Span::styled(
            format!("{:<width$} {:>4}", "Total", breakdown.total(), width = name_width),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    lines
}

fn render_follow_ups(frame: &mut Frame, data: &DashboardData, area: Rect) {
    let mut lines = Vec::new();
    for follow_up in &data.follow_ups {
        lines.push(Line::from(vec![
            Span::styled(" • ", Style::default().fg(Color::Yellow)),
            Span::styled(
                follow_up.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", follow_up.detail),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            " Nothing to follow up on",
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().title(" Suggested follow-ups ").borders(Borders::ALL)),
        area,
    );
}
