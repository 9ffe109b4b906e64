//! Touch-to-value mapping — fraction of the usable range, snapped to the
//! configured interval.

use crate::config::SliderConfig;
use crate::geometry::TrackGeometry;

/// Result of mapping a touch position to a discretized value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapped {
    /// Knob-relative x, clamped to `[0, usable_range]`. Recorded by the
    /// control as its last known touch position.
    pub relative_x: f64,
    /// Value snapped to the configured interval.
    pub value: f64,
}

/// Snap a raw value to the nearest interval multiple.
///
/// The `abs` mirrors negative raw values onto their positive counterpart,
/// so ranges dipping below zero are not handled faithfully. Pre-existing
/// behavior, pinned by `snap_mirrors_negative_raw_values` below.
pub fn snap_to_interval(raw: f64, interval: f64) -> f64 {
    (interval * (raw / interval).round()).abs()
}

/// Map a touch x within the control bounds to a snapped value.
///
/// Returns `None` when the geometry leaves no usable range or the interval
/// is unusable; the caller keeps its previous value rather than dividing
/// by zero.
pub fn map_touch(
    geometry: TrackGeometry,
    config: &SliderConfig,
    touch_x: f64,
) -> Option<Mapped> {
    if geometry.is_degenerate() || config.value_interval <= 0.0 {
        return None;
    }

    let relative_x = (touch_x - geometry.first_tick_x()).clamp(0.0, geometry.usable_range());
    let fraction = relative_x / geometry.usable_range();
    let raw = fraction * config.value_span() + config.minimum_value;

    Some(Mapped {
        relative_x,
        value: snap_to_interval(raw, config.value_interval),
    })
}
