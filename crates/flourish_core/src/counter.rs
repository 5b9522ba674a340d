use crate::easing::ease_out_expo;
use crate::format::{format_count, format_percentage};

/// Animation length shared by counters and rings, in host time units.
pub const ANIMATION_DURATION_MS: f64 = 1600.0;

/// Per-element start delay applied to counters in document order.
pub const COUNTER_STAGGER_MS: f64 = 120.0;

/// Timestamp type carried by frame messages. Any monotonic millisecond
/// source works; tests inject plain numbers.
pub type TimeMs = f64;

/// Formatting kind of a counter element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKind {
    Count,
    Percentage,
}

/// One animated counter, driven from 0 to its target by frame timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTask {
    target: f64,
    kind: CounterKind,
    start_delay: TimeMs,
    start_time: Option<TimeMs>,
    finished: bool,
}

impl CounterTask {
    /// Builds the task for the counter at `index` in document order.
    ///
    /// Returns `None` when the raw attribute does not parse as a finite
    /// number; such elements are skipped entirely but still occupy their
    /// document-order index for staggering.
    pub fn from_attribute(raw: Option<&str>, kind: CounterKind, index: usize) -> Option<Self> {
        let target: f64 = raw.unwrap_or("0").trim().parse::<f64>().ok().filter(|t| t.is_finite())?;
        Some(Self {
            target,
            kind,
            start_delay: index as TimeMs * COUNTER_STAGGER_MS,
            start_time: None,
            finished: false,
        })
    }

    /// Advances the task to `now` and returns the new display text.
    ///
    /// Returns `None` while the stagger delay has not elapsed and after
    /// the task has finished. The first call records the start time.
    pub fn tick(&mut self, now: TimeMs) -> Option<String> {
        if self.finished {
            return None;
        }
        let start = *self.start_time.get_or_insert(now);
        let elapsed = now - start - self.start_delay;
        if elapsed < 0.0 {
            return None;
        }
        let progress = (elapsed / ANIMATION_DURATION_MS).min(1.0);
        let value = ease_out_expo(progress) * self.target;
        if progress >= 1.0 {
            self.finished = true;
        }
        Some(match self.kind {
            CounterKind::Percentage => format_percentage(value),
            CounterKind::Count => format_count(value),
        })
    }

    /// True once the final frame has been produced.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
