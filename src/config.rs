///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use std::ops::Range;
use std::time::Duration;

use crate::error::WheelError;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// WheelConfig
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Clone, Debug, PartialEq)]
pub struct WheelConfig {
    /// How long the wheel decelerates before the result is committed.
    pub spin_duration: Duration,
    pub min_full_rotations: u32,
    /// Exclusive upper bound.
    pub max_full_rotations: u32,
    /// Wheel radius as a fraction of the smaller side of the widget.
    pub wheel_radius_ratio: f64,
    pub label_text_size: f64,
}

impl WheelConfig {
    pub fn new(spin_duration: Duration, min_full_rotations: u32, max_full_rotations: u32) -> Self {
        Self {
            spin_duration,
            min_full_rotations,
            max_full_rotations,
            ..Default::default()
        }
    }

    pub fn with_spin_duration(mut self, spin_duration: Duration) -> Self {
        self.spin_duration = spin_duration;
        self
    }

    pub fn with_full_rotations(mut self, min: u32, max: u32) -> Self {
        self.min_full_rotations = min;
        self.max_full_rotations = max;
        self
    }

    pub fn with_wheel_radius_ratio(mut self, ratio: f64) -> Self {
        self.wheel_radius_ratio = ratio;
        self
    }

    pub fn with_label_text_size(mut self, size: f64) -> Self {
        self.label_text_size = size;
        self
    }

    pub fn full_rotations(&self) -> Range<u32> {
        self.min_full_rotations..self.max_full_rotations
    }

    pub fn validate(&self) -> Result<(), WheelError> {
        if self.min_full_rotations >= self.max_full_rotations {
            return Err(WheelError::InvalidConfig("full rotation range is empty"));
        }
        if self.spin_duration.is_zero() {
            return Err(WheelError::InvalidConfig("spin duration must be positive"));
        }
        if !(self.wheel_radius_ratio > 0.0 && self.wheel_radius_ratio <= 0.5) {
            return Err(WheelError::InvalidConfig("wheel radius ratio must be in (0, 0.5]"));
        }
        Ok(())
    }
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spin_duration: Duration::from_secs(5),
            min_full_rotations: 5,
            max_full_rotations: 10,
            wheel_radius_ratio: 0.45,
            label_text_size: 14.0,
        }
    }
}
