use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
};

use super::helpers::{format_clock, format_elapsed, format_remaining};
use super::theme::Theme;
use super::timeline::build_timeline_line;
use crate::app::App;

/// Renders the running-segment screen: progress gauge plus timing details.
pub fn render_segment(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let timer = &app.timer;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let status = timer.status();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary()))
                .title(format!(
                    " Segment {}/{} ",
                    timer.current_index() + 1,
                    timer.segments().len()
                )),
        )
        .gauge_style(Style::default().fg(Theme::status(status)))
        .ratio(timer.progress())
        .label(Span::styled(
            format!(
                "{} <- {}",
                format_remaining(timer.remaining_in_segment()),
                format_elapsed(timer.planned())
            ),
            Style::default()
                .fg(Theme::text())
                .add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(gauge, layout[0]);

    let inner_width = layout[1].width.saturating_sub(6) as usize;
    let details = Paragraph::new(build_details_text(app, now, inner_width)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Theme::secondary())),
    );
    frame.render_widget(details, layout[1]);
}

fn build_details_text(app: &App, now: Instant, timeline_width: usize) -> Text<'static> {
    let timer = &app.timer;
    let status = timer.status();
    let mut lines = Vec::new();

    let mut status_spans = vec![Span::styled(
        format!("  [{}]", status.label()),
        Style::default()
            .fg(Theme::status(status))
            .add_modifier(Modifier::BOLD),
    )];
    if timer.is_muted() {
        status_spans.push(Span::styled("  Muted", Style::default().fg(Theme::dim())));
    }
    lines.push(Line::from(status_spans));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled("  Demo Left: ", Style::default().fg(Theme::dim())),
        Span::styled(
            format_remaining(timer.total_remaining()),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("    Elapsed: ", Style::default().fg(Theme::dim())),
        Span::styled(
            format_elapsed(timer.wall_elapsed(now)),
            Style::default().fg(Theme::text()),
        ),
        Span::styled("    Planned: ", Style::default().fg(Theme::dim())),
        Span::styled(
            format_elapsed(timer.planned_total()),
            Style::default().fg(Theme::text()),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Earlier segments: ", Style::default().fg(Theme::dim())),
        Span::styled(
            format_elapsed(timer.elapsed_before_current()),
            Style::default().fg(Theme::text()),
        ),
    ]));

    let next_line = match timer.upcoming() {
        Some(next) => Line::from(vec![
            Span::styled("  Next: ", Style::default().fg(Theme::dim())),
            Span::styled(next.name.clone(), Style::default().fg(Theme::text())),
            Span::styled(
                format!(" ({})", format_clock(next.planned_secs)),
                Style::default().fg(Theme::dim()),
            ),
        ]),
        None => Line::from(Span::styled(
            "  Last segment",
            Style::default().fg(Theme::dim()),
        )),
    };
    lines.push(next_line);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "  Timeline",
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    )));
    let mut timeline = build_timeline_line(timer, timeline_width);
    timeline.spans.insert(0, Span::raw("  "));
    lines.push(timeline);

    if let Some(status) = &app.status {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {status}"),
            Style::default().fg(Theme::paused()),
        )));
    }

    Text::from(lines)
}
