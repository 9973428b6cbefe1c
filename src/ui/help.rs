use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text(step_secs: i64) -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "  Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Timer"));
    let plus = format!("+ / =: Add {step_secs}s to current segment");
    let minus = format!("- / _: Remove {step_secs}s from current segment (floors at 5s)");
    lines.extend(section_lines(&[
        "space: Pause/Resume",
        "n: Next segment",
        "p: Previous segment (restarts it)",
        &plus,
        &minus,
        "m: Mute/unmute beep",
        "q / esc: Quit",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Screens"));
    lines.extend(section_lines(&["e: Segment editor", "?: Toggle help"]));

    lines.push(Line::from(""));
    lines.push(section_title("Editor"));
    lines.extend(section_lines(&[
        "Up/Down: Select segment",
        "Left/Right/Tab: Switch column",
        "Enter/F2: Edit cell, Enter again to apply, esc to cancel",
        "a: Add segment  Del: Delete segment",
        "s: Save plan file",
        "esc / e: Close editor",
    ]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
