mod editor;
mod help;
pub mod helpers;
mod segment;
pub mod summary;
mod theme;
mod timeline;

use std::time::Instant;

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, AppView};
use crate::types::Phase;
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    frame.render_widget(header(app), layout[0]);

    match app.view {
        AppView::Help => render_panel(
            frame,
            layout[1],
            " Help ",
            help::build_help_text(app.step_secs()),
        ),
        AppView::Editor => {
            if let Some(editor) = &app.editor {
                render_panel(
                    frame,
                    layout[1],
                    " Segment Editor ",
                    editor::build_editor_text(editor, &app.timer),
                );
            }
        }
        AppView::Timer => match app.timer.phase() {
            Phase::Finished => render_panel(
                frame,
                layout[1],
                " Summary ",
                summary::build_summary_text(&app.timer.summary(now)),
            ),
            Phase::Active => segment::render_segment(frame, layout[1], app, now),
        },
    }

    let footer = Paragraph::new(Text::from(keybinds_line(app)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(footer, layout[2]);
}

fn header(app: &App) -> Paragraph<'static> {
    let title = match app.view {
        AppView::Help => "Help".to_string(),
        AppView::Editor => "Segment Editor".to_string(),
        AppView::Timer if app.timer.is_finished() => "Summary".to_string(),
        AppView::Timer => app.timer.current().name.clone(),
    };
    let mut spans = vec![
        Span::styled(
            "  demotimer  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            title,
            Style::default()
                .fg(Theme::text())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   {}", Local::now().format("%H:%M")),
            Style::default().fg(Theme::dim()),
        ),
    ];
    if app.timer.is_muted() {
        spans.push(Span::styled("   Muted", Style::default().fg(Theme::dim())));
    }
    Paragraph::new(Text::from(Line::from(spans)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        )
}

fn render_panel(frame: &mut Frame, area: Rect, title: &'static str, text: Text<'static>) {
    let panel = Paragraph::new(text)
        .style(Style::default().fg(Theme::text()))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary()))
                .title(title),
        );
    frame.render_widget(panel, area);
}

fn keybinds_line(app: &App) -> Line<'static> {
    let hint = match app.view {
        AppView::Help => "?/esc: Close help  q: Quit",
        AppView::Editor => match &app.editor {
            Some(editor) if editor.is_editing() => "Type to edit  Enter: Apply  esc: Cancel",
            _ => "Up/Down: Select  Enter: Edit  a: Add  Del: Delete  s: Save  esc: Close",
        },
        AppView::Timer if app.timer.is_finished() => "p: Reopen last segment  q/esc: Quit",
        AppView::Timer => {
            "space: Pause  n: Next  p: Prev  +/-: Adjust  m: Mute  e: Edit  ?: Help  q: Quit"
        }
    };
    Line::from(Span::styled(hint, Style::default().fg(Theme::dim())))
}
