//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Step` counter.  `SimClock` maps it to
//! simulated time:
//!
//!   elapsed_time = step * time_step
//!
//! Using an integer step as the canonical unit keeps ordering exact; the
//! floating-point `time_step` is only used when reporting.

use std::fmt;

// ── Step ──────────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    /// `true` if this step falls on an `interval` boundary.  An interval of
    /// zero never matches.
    #[inline]
    pub fn is_on_interval(self, interval: u64) -> bool {
        interval > 0 && self.0.is_multiple_of(interval)
    }
}

impl std::ops::Add<u64> for Step {
    type Output = Step;
    #[inline]
    fn add(self, rhs: u64) -> Step {
        Step(self.0 + rhs)
    }
}

impl std::ops::Sub for Step {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Step) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current step and converts it to simulated time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated time represented by one step.
    pub time_step: f64,
    /// Steps completed so far.  Accumulates across `simulate` calls.
    pub current_step: Step,
}

impl SimClock {
    pub fn new(time_step: f64) -> Self {
        Self { time_step, current_step: Step::ZERO }
    }

    /// Advance the clock by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.current_step = Step(self.current_step.0 + 1);
    }

    /// Simulated time elapsed since step 0.
    #[inline]
    pub fn elapsed_time(&self) -> f64 {
        self.current_step.0 as f64 * self.time_step
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (t = {:.3})", self.current_step, self.elapsed_time())
    }
}
