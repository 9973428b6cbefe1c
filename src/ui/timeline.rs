use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::theme::Theme;
use crate::timer::SegmentTimer;

const DONE: char = '█';
const TODO: char = '░';

/// Split `width` cells between segments in proportion to their durations.
/// Cumulative rounding keeps the total exact; very short segments may get zero cells.
pub fn segment_widths(durations: &[u64], width: usize) -> Vec<usize> {
    let total: u64 = durations.iter().sum();
    if total == 0 {
        return vec![0; durations.len()];
    }
    let mut widths = Vec::with_capacity(durations.len());
    let mut cumulative = 0u64;
    let mut previous_edge = 0usize;
    for duration in durations {
        cumulative += duration;
        let edge = ((cumulative as f64 / total as f64) * width as f64).round() as usize;
        widths.push(edge - previous_edge);
        previous_edge = edge;
    }
    widths
}

/// One-line view of the whole demo: finished segments, progress through the
/// current one, and what is still ahead.
pub fn build_timeline_line(timer: &SegmentTimer, width: usize) -> Line<'static> {
    let segments = timer.segments();
    let gaps = segments.len().saturating_sub(1);
    let durations = segments.iter().map(|s| s.planned_secs).collect::<Vec<_>>();
    let widths = segment_widths(&durations, width.saturating_sub(gaps));
    let current = timer.current_index();

    let mut spans = Vec::new();
    for (index, cells) in widths.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        if index < current || timer.is_finished() {
            spans.push(Span::styled(
                DONE.to_string().repeat(cells),
                Style::default().fg(Theme::success()),
            ));
        } else if index == current {
            let filled = ((timer.progress() * cells as f64).round() as usize).min(cells);
            spans.push(Span::styled(
                DONE.to_string().repeat(filled),
                Style::default().fg(Theme::highlight()),
            ));
            spans.push(Span::styled(
                TODO.to_string().repeat(cells - filled),
                Style::default().fg(Theme::highlight()),
            ));
        } else {
            spans.push(Span::styled(
                TODO.to_string().repeat(cells),
                Style::default().fg(Theme::dim()),
            ));
        }
    }
    Line::from(spans)
}
