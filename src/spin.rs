///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use std::time::Duration;

use crate::wheel_data::SpinPlan;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// SpinAnimation
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Visual deceleration from one rotation to the next.
///
/// Only drives what is painted. The committed rotation lives in [`crate::WheelData`] and the
/// result is resolved by the widget timer, not by this animation finishing.
#[derive(Clone, Debug, PartialEq)]
pub struct SpinAnimation {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
}

impl SpinAnimation {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    pub fn from_plan(plan: &SpinPlan, duration: Duration) -> Self {
        Self::new(plan.from, plan.to, duration)
    }

    /// Feeds the interval reported by an animation frame, in nanoseconds.
    pub fn advance(&mut self, nanos: u64) {
        self.elapsed = (self.elapsed + Duration::from_nanos(nanos)).min(self.duration);
    }

    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Rotation to paint right now, in degrees.
    pub fn rotation(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_out_cubic(self.progress())
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let inverse = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inverse * inverse * inverse
}
