use std::time::Duration;

/// `MM:SS`, or `HH:MM:SS` once an hour is reached.
pub fn format_clock(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Countdowns round up so `00:00` only shows once time is really up.
pub fn format_remaining(duration: Duration) -> String {
    format_clock(duration.as_secs_f64().ceil() as u64)
}

pub fn format_elapsed(duration: Duration) -> String {
    format_clock(duration.as_secs())
}

/// Signed clock, e.g. `+01:05` over plan or `-00:30` under.
pub fn format_delta(delta_secs: i64) -> String {
    let sign = match delta_secs.signum() {
        1 => "+",
        -1 => "-",
        _ => "",
    };
    format!("{sign}{}", format_clock(delta_secs.unsigned_abs()))
}

pub fn progress_bar(fraction: f64, width: usize) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = (fraction * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn clamp_name(value: &str, width: usize) -> String {
    let value_len = value.chars().count();
    if value_len <= width {
        return format!("{value:<width$}", width = width);
    }
    let trimmed = value
        .chars()
        .take(width.saturating_sub(2))
        .collect::<String>();
    format!("{trimmed}..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(90), "01:30");
        assert_eq!(format_clock(3599), "59:59");
        assert_eq!(format_clock(3723), "01:02:03");
    }

    #[test]
    fn test_remaining_rounds_up() {
        assert_eq!(format_remaining(Duration::from_millis(59_100)), "01:00");
        assert_eq!(format_remaining(Duration::ZERO), "00:00");
        assert_eq!(format_elapsed(Duration::from_millis(59_900)), "00:59");
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(65), "+01:05");
        assert_eq!(format_delta(-30), "-00:30");
        assert_eq!(format_delta(0), "00:00");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.5, 10), "[#####-----]");
        assert_eq!(progress_bar(2.0, 4), "[####]");
        assert_eq!(progress_bar(-1.0, 3), "[---]");
    }

    #[test]
    fn test_clamp_name() {
        assert_eq!(clamp_name("Intro", 8), "Intro   ");
        assert_eq!(clamp_name("Feature Demonstration", 10), "Feature ..");
    }
}
