//! Slider configuration — externally settable knobs and their validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("value interval must be positive, got {0}")]
    NonPositiveInterval(f64),

    #[error("maximum value {max} is below minimum value {min}")]
    InvertedRange { min: f64, max: f64 },
}

/// Configuration of the control. Every field is externally settable; the
/// control marks itself for redraw on mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub minimum_value: f64,
    pub maximum_value: f64,
    /// Step between selectable values. Should divide the value span evenly;
    /// a non-divisible interval leaves a ragged final gap in the tick row.
    pub value_interval: f64,
    /// Print the discrete values below the track in place of the tick marks.
    pub shows_values_below_track: bool,
    pub elongate_capping_tick_marks: bool,
    /// Animate the knob to the snapped position; the observer is then
    /// notified on animation completion instead of synchronously.
    pub animate_snapping: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            minimum_value: 0.0,
            maximum_value: 100.0,
            value_interval: 5.0,
            shows_values_below_track: false,
            elongate_capping_tick_marks: true,
            animate_snapping: true,
        }
    }
}

impl SliderConfig {
    /// Check the configuration is usable for mapping and layout.
    ///
    /// Live setters accept anything (degenerate configurations render
    /// incorrectly but never crash); validation gates persisted-state load.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.value_interval <= 0.0 || !self.value_interval.is_finite() {
            return Err(ConfigError::NonPositiveInterval(self.value_interval));
        }
        if self.maximum_value < self.minimum_value {
            return Err(ConfigError::InvertedRange {
                min: self.minimum_value,
                max: self.maximum_value,
            });
        }
        Ok(())
    }

    pub fn value_span(&self) -> f64 {
        self.maximum_value - self.minimum_value
    }
}
