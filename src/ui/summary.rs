use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{clamp_name, format_delta, format_elapsed};
use super::theme::Theme;
use crate::timer::Summary;

const NAME_WIDTH: usize = 28;

fn delta_style(delta_secs: i64) -> Style {
    let color = match delta_secs.signum() {
        1 => Theme::warn(),
        -1 => Theme::success(),
        _ => Theme::text(),
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn build_summary_text(summary: &Summary) -> Text<'static> {
    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        format!("  Segments: {}", summary.rows.len()),
        Style::default().fg(Theme::text()),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "  {}  {:>8}  {:>8}  {:>9}",
            clamp_name("Segment", NAME_WIDTH),
            "Planned",
            "Actual",
            "Delta"
        ),
        Style::default().fg(Theme::dim()),
    )));

    for row in &summary.rows {
        let delta = row.actual.as_secs() as i64 - row.planned.as_secs() as i64;
        lines.push(Line::from(vec![
            Span::styled(
                format!(
                    "  {}  {:>8}  {:>8}  ",
                    clamp_name(&row.name, NAME_WIDTH),
                    format_elapsed(row.planned),
                    format_elapsed(row.actual)
                ),
                Style::default().fg(Theme::text()),
            ),
            Span::styled(format!("{:>9}", format_delta(delta)), delta_style(delta)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Planned total: ", Style::default().fg(Theme::dim())),
        Span::styled(
            format_elapsed(summary.planned_total),
            Style::default().fg(Theme::text()),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Timed total:   ", Style::default().fg(Theme::dim())),
        Span::styled(
            format_elapsed(summary.actual_total),
            Style::default().fg(Theme::text()),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Elapsed total: ", Style::default().fg(Theme::dim())),
        Span::styled(
            format_elapsed(summary.wall_elapsed),
            Style::default().fg(Theme::text()),
        ),
    ]));
    let delta = summary.delta_secs();
    lines.push(Line::from(vec![
        Span::styled("  Delta:         ", Style::default().fg(Theme::dim())),
        Span::styled(format_delta(delta), delta_style(delta)),
    ]));
    Text::from(lines)
}

/// Plain-text summary for the line front end.
pub fn summary_lines(summary: &Summary) -> Vec<String> {
    build_summary_text(summary)
        .lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect()
}
