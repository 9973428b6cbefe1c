use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{clamp_name, format_clock};
use super::theme::Theme;
use crate::app::{Editor, EditorColumn};
use crate::timer::SegmentTimer;

const NAME_WIDTH: usize = 40;

pub fn build_editor_text(editor: &Editor, timer: &SegmentTimer) -> Text<'static> {
    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        format!("  {}", editor.message),
        Style::default().fg(Theme::dim()),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("     #  {}  Duration", clamp_name("Name", NAME_WIDTH)),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    )));

    for (index, segment) in timer.segments().iter().enumerate() {
        let selected = index == editor.row;
        let is_current = index == timer.current_index();
        let cell = |column: EditorColumn, value: String| -> Span<'static> {
            let active = selected && editor.column == column;
            let text = match (&editor.buffer, active) {
                (Some(buffer), true) => format!("{buffer}|"),
                _ => value,
            };
            let style = if active {
                Style::default()
                    .fg(Theme::highlight())
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else if selected {
                Style::default()
                    .fg(Theme::highlight())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::text())
            };
            Span::styled(text, style)
        };
        lines.push(Line::from(vec![
            Span::styled(
                if selected { "  > " } else { "    " },
                Style::default().fg(Theme::active()),
            ),
            Span::styled(
                format!("{:>2}{} ", index + 1, if is_current { "*" } else { " " }),
                Style::default().fg(Theme::dim()),
            ),
            cell(EditorColumn::Name, clamp_name(&segment.name, NAME_WIDTH)),
            Span::raw("  "),
            cell(EditorColumn::Duration, format_clock(segment.planned_secs)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  * current segment",
        Style::default().fg(Theme::dim()),
    )));
    Text::from(lines)
}
