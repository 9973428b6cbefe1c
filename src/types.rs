/// Smallest planned duration a segment can be adjusted down to.
pub const MIN_SEGMENT_SECS: u64 = 5;

/// Longest planned duration a segment may have (99:59:59).
pub const MAX_SEGMENT_SECS: u64 = 99 * 3600 + 59 * 60 + 59;

/// A single named, timed portion of the demo plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub name: String,
    pub planned_secs: u64,
}

impl Segment {
    pub fn new(name: impl Into<String>, planned_secs: u64) -> Self {
        Self {
            name: name.into(),
            planned_secs,
        }
    }
}

/// Status of the segment currently on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentStatus {
    Running,
    Paused,
    Completed,
}

impl SegmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            SegmentStatus::Running => "RUNNING",
            SegmentStatus::Paused => "PAUSED",
            SegmentStatus::Completed => "COMPLETED",
        }
    }
}

/// Whole-demo lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Active,
    Finished,
}

/// Signals raised by a timer tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickEvent {
    SegmentCompleted { index: usize, audible: bool },
}
