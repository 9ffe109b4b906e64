//! The control — tracking state machine, snapping, and two-phase observer
//! notification.
//!
//! Touch positions are computed at gesture begin and end only; no
//! intermediate drag notifications are sent. When `animate_snapping` is on,
//! the host animates the knob and calls [`SteppedSlider::complete_snap`] on
//! completion, which fires the deferred notification. A snap landing while
//! one is pending supersedes it; the stale notification is dropped.

use crate::config::SliderConfig;
use crate::geometry::TrackGeometry;
use crate::layout::TickLayout;
use crate::mapping;
use crate::style::{Style, StyleParams};

/// Observer callback. One at a time; last writer wins. Lifetime is
/// caller-managed — no weak-reference semantics.
pub type ValueObserver = Box<dyn FnMut(f64)>;

/// Tracking phase of a touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingPhase {
    #[default]
    Idle,
    Tracking,
}

/// How the observer learns about a snap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyMode {
    /// Observer was notified synchronously inside the touch call.
    Immediate,
    /// Host animates the knob, then calls [`SteppedSlider::complete_snap`].
    Deferred,
}

/// Outcome of a touch transition or keyboard step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapOutcome {
    /// Value snapped; the host repositions (or animates) the knob.
    Snapped { value: f64, notify: NotifyMode },
    /// Degenerate geometry or a missing position; nothing changed.
    Ignored,
}

/// A slider that snaps to discrete intervals instead of continuous values.
pub struct SteppedSlider {
    config: SliderConfig,
    style: Style,
    value: f64,
    last_known_x: f64,
    phase: TrackingPhase,
    pending: Option<f64>,
    observer: Option<ValueObserver>,
    needs_redraw: bool,
}

impl SteppedSlider {
    pub fn new(config: SliderConfig) -> Self {
        let value = config.minimum_value;
        Self {
            config,
            style: Style::default(),
            value,
            last_known_x: 0.0,
            phase: TrackingPhase::Idle,
            pending: None,
            observer: None,
            needs_redraw: true,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn params(&self) -> StyleParams {
        self.style.params()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn last_known_x(&self) -> f64 {
        self.last_known_x
    }

    pub fn phase(&self) -> TrackingPhase {
        self.phase
    }

    /// Track x of the knob for the current value.
    pub fn knob_x(&self, geometry: TrackGeometry) -> f64 {
        geometry.x_for_value(
            self.value,
            self.config.minimum_value,
            self.config.maximum_value,
        )
    }

    /// Tick layout for the current configuration and style.
    pub fn layout(&self, geometry: TrackGeometry, bounds_height: f64) -> TickLayout<'_> {
        TickLayout::new(geometry, &self.config, self.style.params(), bounds_height)
    }

    // ── Configuration ────────────────────────────────────────────────
    //
    // Every mutation marks the control for redraw; the host drains the
    // flag to coalesce repaints.

    pub fn set_config(&mut self, config: SliderConfig) {
        self.config = config;
        self.needs_redraw = true;
    }

    /// Select a style by integer index, mapped modulo the variant count.
    pub fn set_style_index(&mut self, index: i64) {
        self.set_style(Style::from_index(index));
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
        self.needs_redraw = true;
    }

    pub fn set_range(&mut self, minimum: f64, maximum: f64) {
        self.config.minimum_value = minimum;
        self.config.maximum_value = maximum;
        self.needs_redraw = true;
    }

    pub fn set_value_interval(&mut self, interval: f64) {
        self.config.value_interval = interval;
        self.needs_redraw = true;
    }

    pub fn set_shows_values_below_track(&mut self, shows: bool) {
        self.config.shows_values_below_track = shows;
        self.needs_redraw = true;
    }

    pub fn set_elongate_capping_tick_marks(&mut self, elongate: bool) {
        self.config.elongate_capping_tick_marks = elongate;
        self.needs_redraw = true;
    }

    pub fn set_animate_snapping(&mut self, animate: bool) {
        self.config.animate_snapping = animate;
        self.needs_redraw = true;
    }

    /// Restore a value directly (persisted state). Not snapped: before the
    /// first interaction the value may sit off-grid.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.needs_redraw = true;
    }

    /// Drain the redraw flag. Returns true at most once per mutation batch.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    // ── Observer ─────────────────────────────────────────────────────

    /// Register the observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl FnMut(f64) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    // ── Interaction ──────────────────────────────────────────────────

    /// Touch-begin. Tracking is always accepted; a missing position is a
    /// no-op rather than an assumed origin.
    pub fn touch_began(
        &mut self,
        geometry: TrackGeometry,
        touch_x: Option<f64>,
    ) -> SnapOutcome {
        self.phase = TrackingPhase::Tracking;
        match touch_x {
            Some(x) => self.apply_touch(geometry, x),
            None => SnapOutcome::Ignored,
        }
    }

    /// Touch-end. Recomputes from the final position. A release without a
    /// prior touch-begin is ignored; a release with no position ends the
    /// gesture but keeps the value.
    pub fn touch_ended(
        &mut self,
        geometry: TrackGeometry,
        touch_x: Option<f64>,
    ) -> SnapOutcome {
        if self.phase != TrackingPhase::Tracking {
            return SnapOutcome::Ignored;
        }
        self.phase = TrackingPhase::Idle;
        match touch_x {
            Some(x) => self.apply_touch(geometry, x),
            None => SnapOutcome::Ignored,
        }
    }

    /// Move by whole intervals (the keyboard path). Runs through the same
    /// snap-and-notify flow as a touch.
    pub fn step(&mut self, steps: i64) -> SnapOutcome {
        if self.config.value_interval <= 0.0
            || self.config.maximum_value < self.config.minimum_value
        {
            return SnapOutcome::Ignored;
        }
        let raw = self.value + steps as f64 * self.config.value_interval;
        let clamped = raw.clamp(self.config.minimum_value, self.config.maximum_value);
        let value = mapping::snap_to_interval(clamped, self.config.value_interval);
        self.commit(value)
    }

    /// Fire the deferred notification once the host's snap animation has
    /// completed. No-op when nothing is pending.
    pub fn complete_snap(&mut self) {
        if let Some(value) = self.pending.take() {
            self.notify(value);
        }
    }

    fn apply_touch(&mut self, geometry: TrackGeometry, touch_x: f64) -> SnapOutcome {
        match mapping::map_touch(geometry, &self.config, touch_x) {
            Some(mapped) => {
                self.last_known_x = mapped.relative_x;
                self.commit(mapped.value)
            }
            None => SnapOutcome::Ignored,
        }
    }

    fn commit(&mut self, value: f64) -> SnapOutcome {
        self.value = value;
        self.needs_redraw = true;
        if self.config.animate_snapping {
            self.pending = Some(value);
            SnapOutcome::Snapped {
                value,
                notify: NotifyMode::Deferred,
            }
        } else {
            self.pending = None;
            self.notify(value);
            SnapOutcome::Snapped {
                value,
                notify: NotifyMode::Immediate,
            }
        }
    }

    fn notify(&mut self, value: f64) {
        if let Some(observer) = self.observer.as_mut() {
            observer(value);
        }
    }
}
