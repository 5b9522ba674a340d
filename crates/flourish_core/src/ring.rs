use std::f64::consts::PI;

use crate::counter::{TimeMs, ANIMATION_DURATION_MS};
use crate::easing::ease_out_expo;

/// Dash styling applied to a ring element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingStyle {
    /// Dash pattern baseline: one full circle on, one full circle off.
    pub dash_array: (f64, f64),
    /// Arc length left hidden; the full circumference is an empty arc.
    pub dash_offset: f64,
}

/// Baseline style for a ring of the given radius, applied before any
/// animation frame runs.
pub fn baseline_style(radius: f64) -> RingStyle {
    let circumference = 2.0 * PI * radius;
    RingStyle {
        dash_array: (circumference, circumference),
        dash_offset: circumference,
    }
}

/// One animated progress ring, revealed from empty to its target percent.
#[derive(Debug, Clone, PartialEq)]
pub struct RingTask {
    target: f64,
    circumference: f64,
    start_time: Option<TimeMs>,
    finished: bool,
}

impl RingTask {
    /// Builds the task from the raw percentage attribute. Returns `None`
    /// when the attribute does not parse; the ring then keeps its empty
    /// baseline style.
    pub fn from_attribute(raw: Option<&str>, radius: f64) -> Option<Self> {
        let target: f64 = raw.unwrap_or("0").trim().parse::<f64>().ok().filter(|t| t.is_finite())?;
        Some(Self {
            target,
            circumference: 2.0 * PI * radius,
            start_time: None,
            finished: false,
        })
    }

    /// Advances the task to `now` and returns the new dash offset. Rings
    /// have no stagger; the first call records the start time.
    pub fn tick(&mut self, now: TimeMs) -> Option<f64> {
        if self.finished {
            return None;
        }
        let start = *self.start_time.get_or_insert(now);
        let progress = ((now - start) / ANIMATION_DURATION_MS).min(1.0);
        let eased = ease_out_expo(progress);
        if progress >= 1.0 {
            self.finished = true;
        }
        Some(self.circumference - (self.target / 100.0) * self.circumference * eased)
    }

    /// True once the final frame has been produced.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
