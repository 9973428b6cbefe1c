use crate::error::ConfigError;
use crate::types::{MAX_SEGMENT_SECS, Segment};

/// Segments read from a plan file, plus the rows that had to be skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedPlan {
    pub segments: Vec<Segment>,
    pub warnings: Vec<String>,
}

/// Parse `<seconds>`, `mm:ss`, `hh:mm:ss`, optionally with a trailing `s`.
/// Anything longer than `MAX_SEGMENT_SECS` is rejected.
pub fn parse_duration(text: &str) -> Result<u64, ConfigError> {
    let invalid = || ConfigError::InvalidDuration {
        text: text.to_string(),
    };
    let trimmed = text.trim();
    let trimmed = trimmed
        .strip_suffix('s')
        .or_else(|| trimmed.strip_suffix('S'))
        .unwrap_or(trimmed)
        .trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    let parts = trimmed
        .split(':')
        .map(|part| part.trim().parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;
    let total = match parts.as_slice() {
        [secs] => Some(*secs),
        [mins, secs] => mins.checked_mul(60).and_then(|m| m.checked_add(*secs)),
        [hours, mins, secs] => hours
            .checked_mul(3600)
            .and_then(|h| h.checked_add(mins.checked_mul(60)?))
            .and_then(|hm| hm.checked_add(*secs)),
        _ => None,
    };
    total
        .filter(|secs| *secs <= MAX_SEGMENT_SECS)
        .ok_or_else(invalid)
}

/// Parse a plan file body. Malformed rows are skipped with a warning.
pub fn parse_segments(text: &str) -> ParsedPlan {
    let rows = text
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| (index + 1, split_row(line)))
        .collect::<Vec<_>>();

    let mut plan = ParsedPlan::default();
    let Some((_, first)) = rows.first() else {
        return plan;
    };

    let columns = Columns::from_header(first);
    let body = if columns.is_some() { &rows[1..] } else { &rows[..] };
    let columns = columns.unwrap_or(Columns {
        name: 0,
        duration: 1,
    });

    for (line_no, cells) in body {
        let name = cells.get(columns.name).map(|c| c.trim()).unwrap_or("");
        let Some(duration) = cells.get(columns.duration) else {
            plan.warnings
                .push(format!("line {line_no}: missing duration, skipped"));
            continue;
        };
        match parse_duration(duration) {
            Ok(0) => plan
                .warnings
                .push(format!("line {line_no}: zero duration for '{name}', skipped")),
            Ok(secs) => plan.segments.push(Segment::new(name, secs)),
            Err(err) => plan.warnings.push(format!("line {line_no}: {err}, skipped")),
        }
    }
    plan
}

struct Columns {
    name: usize,
    duration: usize,
}

impl Columns {
    fn from_header(cells: &[String]) -> Option<Self> {
        let lowered = cells
            .iter()
            .map(|c| c.trim().to_lowercase())
            .collect::<Vec<_>>();
        let position = |key: &str| lowered.iter().position(|c| c == key);
        let duration = position("duration")?;
        let name = position("name")
            .or_else(|| position("segment"))
            .or_else(|| position("title"))?;
        Some(Self { name, duration })
    }
}

/// Split one comma-separated row, honouring double-quoted fields.
fn split_row(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if quoted && chars.peek() == Some(&'"') => {
                cell.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => cells.push(std::mem::take(&mut cell)),
            _ => cell.push(ch),
        }
    }
    cells.push(cell);
    cells
}

/// Quote a field for writing if it would otherwise split or lose quotes.
pub(crate) fn quote_field(value: &str) -> String {
    if value.contains([',', '"']) || value.trim() != value {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
