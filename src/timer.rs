//! Segment timing state machine shared by both front ends.
//!
//! The timer never reads the clock itself. Every call that depends on time
//! takes the caller's `Instant`, which keeps the polling loop in charge of
//! wall-clock time and lets tests drive time explicitly.

use std::time::{Duration, Instant};

use crate::error::ConfigError;
use crate::types::{
    MAX_SEGMENT_SECS, MIN_SEGMENT_SECS, Phase, Segment, SegmentStatus, TickEvent,
};

/// Capabilities a front end needs to drive the timer from hotkeys.
pub trait TimerControl {
    /// Advance time to `now`, returning a completion signal at most once per segment.
    fn tick(&mut self, now: Instant) -> Option<TickEvent>;
    fn pause(&mut self, now: Instant);
    fn resume(&mut self, now: Instant);
    fn is_paused(&self) -> bool;
    fn next(&mut self);
    fn prev(&mut self);
    /// Shift the current segment's planned duration, never below the minimum.
    fn adjust_duration(&mut self, delta_secs: i64);
    fn toggle_mute(&mut self);

    fn toggle_pause(&mut self, now: Instant) {
        if self.is_paused() {
            self.resume(now);
        } else {
            self.pause(now);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRow {
    pub name: String,
    pub planned: Duration,
    pub actual: Duration,
}

/// Planned vs actual figures shown once the demo is over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub rows: Vec<SummaryRow>,
    pub planned_total: Duration,
    pub actual_total: Duration,
    /// Wall-clock time from the first unpaused tick to the end, pauses included.
    pub wall_elapsed: Duration,
}

impl Summary {
    /// Seconds over (positive) or under (negative) the plan.
    pub fn delta_secs(&self) -> i64 {
        self.wall_elapsed.as_secs() as i64 - self.planned_total.as_secs() as i64
    }
}

#[derive(Debug)]
pub struct SegmentTimer {
    segments: Vec<Segment>,
    current: usize,
    elapsed: Duration,
    actual: Vec<Duration>,
    last_tick: Option<Instant>,
    paused: bool,
    muted: bool,
    finished: bool,
    completion_signalled: bool,
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
}

impl SegmentTimer {
    /// Builds a timer over `segments`. Planned durations above
    /// `MAX_SEGMENT_SECS` are capped.
    pub fn new(mut segments: Vec<Segment>) -> Result<Self, ConfigError> {
        if segments.is_empty() {
            return Err(ConfigError::NoSegments);
        }
        if let Some(segment) = segments.iter().find(|s| s.planned_secs == 0) {
            return Err(ConfigError::ZeroDuration {
                name: segment.name.clone(),
            });
        }
        for segment in &mut segments {
            segment.planned_secs = segment.planned_secs.min(MAX_SEGMENT_SECS);
        }
        let actual = vec![Duration::ZERO; segments.len()];
        Ok(Self {
            segments,
            current: 0,
            elapsed: Duration::ZERO,
            actual,
            last_tick: None,
            paused: false,
            muted: false,
            finished: false,
            completion_signalled: false,
            started_at: None,
            ended_at: None,
        })
    }

    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Segment {
        &self.segments[self.current]
    }

    pub fn upcoming(&self) -> Option<&Segment> {
        self.segments.get(self.current + 1)
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn phase(&self) -> Phase {
        if self.finished {
            Phase::Finished
        } else {
            Phase::Active
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn planned(&self) -> Duration {
        Duration::from_secs(self.current().planned_secs)
    }

    /// Elapsed time in the current segment, clamped to its planned duration.
    pub fn elapsed_in_segment(&self) -> Duration {
        self.elapsed.min(self.planned())
    }

    pub fn remaining_in_segment(&self) -> Duration {
        if self.finished {
            return Duration::ZERO;
        }
        self.planned().saturating_sub(self.elapsed)
    }

    /// Remaining time in the current segment plus every later segment's plan.
    pub fn total_remaining(&self) -> Duration {
        if self.finished {
            return Duration::ZERO;
        }
        let future: u64 = self.segments[self.current + 1..]
            .iter()
            .map(|s| s.planned_secs)
            .sum();
        self.remaining_in_segment() + Duration::from_secs(future)
    }

    pub fn planned_total(&self) -> Duration {
        Duration::from_secs(self.segments.iter().map(|s| s.planned_secs).sum())
    }

    /// Time actually spent on the segments before the current one.
    pub fn elapsed_before_current(&self) -> Duration {
        self.actual[..self.current].iter().sum()
    }

    pub fn progress(&self) -> f64 {
        if self.finished {
            return 1.0;
        }
        let planned = self.planned().as_secs_f64();
        if planned <= 0.0 {
            return 1.0;
        }
        (self.elapsed_in_segment().as_secs_f64() / planned).clamp(0.0, 1.0)
    }

    pub fn is_segment_complete(&self) -> bool {
        self.finished || self.elapsed >= self.planned()
    }

    /// A paused segment reports PAUSED even once its planned time is used up.
    pub fn status(&self) -> SegmentStatus {
        if self.finished {
            SegmentStatus::Completed
        } else if self.paused {
            SegmentStatus::Paused
        } else if self.is_segment_complete() {
            SegmentStatus::Completed
        } else {
            SegmentStatus::Running
        }
    }

    /// Drops the time since the last tick without charging it to a segment.
    pub fn hold(&mut self, now: Instant) {
        if self.last_tick.is_some() {
            self.last_tick = Some(now);
        }
    }

    pub fn wall_elapsed(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(start) => self.ended_at.unwrap_or(now).saturating_duration_since(start),
            None => Duration::ZERO,
        }
    }

    pub fn summary(&self, now: Instant) -> Summary {
        let rows = self
            .segments
            .iter()
            .zip(&self.actual)
            .map(|(segment, actual)| SummaryRow {
                name: segment.name.clone(),
                planned: Duration::from_secs(segment.planned_secs),
                actual: *actual,
            })
            .collect::<Vec<_>>();
        Summary {
            actual_total: self.actual.iter().sum(),
            planned_total: self.planned_total(),
            wall_elapsed: self.wall_elapsed(now),
            rows,
        }
    }

    pub fn rename(&mut self, index: usize, name: String) -> bool {
        match self.segments.get_mut(index) {
            Some(segment) => {
                segment.name = name;
                true
            }
            None => false,
        }
    }

    pub fn set_duration(&mut self, index: usize, secs: u64) -> bool {
        match self.segments.get_mut(index) {
            Some(segment) => {
                segment.planned_secs = secs.clamp(MIN_SEGMENT_SECS, MAX_SEGMENT_SECS);
                true
            }
            None => false,
        }
    }

    pub fn insert_after(&mut self, index: usize, mut segment: Segment) {
        segment.planned_secs = segment.planned_secs.clamp(MIN_SEGMENT_SECS, MAX_SEGMENT_SECS);
        let position = (index + 1).min(self.segments.len());
        self.segments.insert(position, segment);
        self.actual.insert(position, Duration::ZERO);
        if position <= self.current {
            self.current += 1;
        }
    }

    /// Remove a segment. The last remaining segment cannot be removed.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.segments.len() <= 1 || index >= self.segments.len() {
            return false;
        }
        self.segments.remove(index);
        self.actual.remove(index);
        if index < self.current {
            self.current -= 1;
        } else if index == self.current {
            self.current = self.current.min(self.segments.len() - 1);
            self.restart_segment();
        }
        true
    }

    fn advance(&mut self, now: Instant) {
        let last = self.last_tick.replace(now).unwrap_or(now);
        if self.finished || self.paused {
            return;
        }
        self.started_at.get_or_insert(last);
        let delta = now.saturating_duration_since(last);
        self.elapsed += delta;
        self.actual[self.current] += delta;
    }

    fn restart_segment(&mut self) {
        self.elapsed = Duration::ZERO;
        self.completion_signalled = false;
    }
}

impl TimerControl for SegmentTimer {
    fn tick(&mut self, now: Instant) -> Option<TickEvent> {
        self.advance(now);
        if self.finished || self.paused {
            return None;
        }
        if !self.is_segment_complete() {
            self.completion_signalled = false;
            return None;
        }
        if self.completion_signalled {
            return None;
        }
        self.completion_signalled = true;
        Some(TickEvent::SegmentCompleted {
            index: self.current,
            audible: !self.muted,
        })
    }

    fn pause(&mut self, now: Instant) {
        if self.paused || self.finished {
            return;
        }
        self.advance(now);
        self.paused = true;
    }

    fn resume(&mut self, now: Instant) {
        if !self.paused || self.finished {
            return;
        }
        self.paused = false;
        self.last_tick = Some(now);
        self.started_at.get_or_insert(now);
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn next(&mut self) {
        if self.finished {
            return;
        }
        if self.current + 1 < self.segments.len() {
            self.current += 1;
            self.restart_segment();
        } else {
            self.finished = true;
            self.ended_at = self.last_tick;
        }
    }

    fn prev(&mut self) {
        if self.finished {
            self.finished = false;
            self.ended_at = None;
            self.restart_segment();
            return;
        }
        if self.current > 0 {
            self.current -= 1;
            self.restart_segment();
        }
    }

    fn adjust_duration(&mut self, delta_secs: i64) {
        if self.finished {
            return;
        }
        let segment = &mut self.segments[self.current];
        let planned = segment.planned_secs.min(MAX_SEGMENT_SECS) as i64;
        let adjusted = planned
            .saturating_add(delta_secs)
            .clamp(MIN_SEGMENT_SECS as i64, MAX_SEGMENT_SECS as i64);
        segment.planned_secs = adjusted as u64;
    }

    fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }
}
