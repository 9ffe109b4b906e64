//! Application state — single-owner, main-thread only.
//!
//! Everything is serialized on the UI thread; the observer callback talks
//! back through an mpsc channel drained once per loop iteration.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::mpsc::{channel, Receiver};
use std::time::Instant;

use chrono::{Local, NaiveDateTime};
use ratatui::layout::Rect;

use stepslider_core::{NotifyMode, SliderConfig, SnapOutcome, SteppedSlider, TrackGeometry};

use crate::animation::SnapAnimation;
use crate::feedback::FeedbackGenerator;
use crate::ui;

/// Cap on the readout's notification log.
const EVENT_LOG_CAP: usize = 32;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// One observer notification, as shown in the readout log.
#[derive(Debug, Clone)]
pub struct ValueEvent {
    pub at: NaiveDateTime,
    pub value: f64,
}

pub struct AppState {
    pub slider: SteppedSlider,
    /// Terminal area, refreshed each loop iteration; hit-testing and
    /// drawing share the same layout computed from it.
    pub area: Rect,
    /// Track x the knob is currently drawn at.
    pub knob_x: f64,
    pub animation: Option<SnapAnimation>,
    /// Column under an in-flight drag. Display only; no values are
    /// computed until the gesture ends.
    pub drag_x: Option<f64>,
    pub settings_cursor: usize,
    pub value_events: VecDeque<ValueEvent>,
    pub observer_rx: Receiver<f64>,
    pub feedback: FeedbackGenerator,
    pub status: Option<(StatusLevel, String)>,
    pub running: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        let (observer_tx, observer_rx) = channel();
        let mut slider = SteppedSlider::new(SliderConfig::default());
        slider.set_observer(move |value| {
            let _ = observer_tx.send(value);
        });

        let mut feedback = FeedbackGenerator::new();
        feedback.prepare();

        Self {
            slider,
            area: Rect::default(),
            knob_x: 0.0,
            animation: None,
            drag_x: None,
            settings_cursor: 0,
            value_events: VecDeque::new(),
            observer_rx,
            feedback,
            status: None,
            running: true,
            dirty: true,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some((StatusLevel::Info, message.into()));
        self.dirty = true;
    }

    pub fn set_warning(&mut self, message: impl Into<String>) {
        self.status = Some((StatusLevel::Warning, message.into()));
        self.dirty = true;
    }

    // ── Geometry and hit-testing ─────────────────────────────────────

    /// Inner drawing area of the slider panel for the current screen.
    pub fn slider_rect(&self) -> Rect {
        ui::panel_inner(ui::screen_layout(self.area).slider)
    }

    /// Track geometry for the current screen, if there is one.
    pub fn geometry(&self) -> Option<TrackGeometry> {
        let inner = self.slider_rect();
        if inner.width == 0 {
            return None;
        }
        Some(TrackGeometry::new(
            inner.width as f64,
            self.slider.params().knob_width,
        ))
    }

    /// Track x for a click landing inside the slider panel.
    pub fn slider_hit(&self, column: u16, row: u16) -> Option<f64> {
        let inner = self.slider_rect();
        let inside = column >= inner.x
            && column < inner.x + inner.width
            && row >= inner.y
            && row < inner.y + inner.height;
        inside.then(|| (column - inner.x) as f64)
    }

    /// Track x for any column, clamped to the track. Used when a gesture
    /// ends outside the panel.
    pub fn track_x_for_column(&self, column: u16) -> Option<f64> {
        let inner = self.slider_rect();
        if inner.width == 0 {
            return None;
        }
        let x = column as i64 - inner.x as i64;
        Some(x.clamp(0, inner.width as i64 - 1) as f64)
    }

    /// Knob x to draw this frame: the drag position while a finger is
    /// down, otherwise the (possibly animating) knob position.
    pub fn display_knob_x(&self) -> f64 {
        self.drag_x.unwrap_or(self.knob_x)
    }

    // ── Snap routing ─────────────────────────────────────────────────

    /// Route a snap outcome: animate or jump the knob toward the snapped
    /// position. Deferred notifications resolve in [`AppState::advance`].
    pub fn handle_outcome(&mut self, outcome: SnapOutcome, now: Instant) {
        let SnapOutcome::Snapped { notify, .. } = outcome else {
            return;
        };
        self.dirty = true;

        let Some(geometry) = self.geometry() else {
            // Nothing to animate without a screen; resolve immediately.
            self.slider.complete_snap();
            return;
        };
        let target = self.slider.knob_x(geometry);

        match notify {
            NotifyMode::Deferred => {
                self.animation = Some(match self.animation {
                    Some(animation) => animation.retarget(target, now),
                    None => SnapAnimation::new(self.knob_x, target, now),
                });
            }
            NotifyMode::Immediate => {
                self.animation = None;
                self.knob_x = target;
            }
        }
    }

    /// Advance the animation and redraw bookkeeping. Completing an
    /// animation fires the control's deferred notification.
    pub fn advance(&mut self, now: Instant) {
        if let Some(animation) = self.animation {
            self.knob_x = animation.position(now);
            self.dirty = true;
            if animation.is_finished(now) {
                self.animation = None;
                self.knob_x = animation.target();
                self.slider.complete_snap();
            }
        } else if self.drag_x.is_none() {
            // Keep the resting knob glued to the value (config mutation or
            // resize can move the mapping under it).
            if let Some(geometry) = self.geometry() {
                let resting = self.slider.knob_x(geometry);
                if (resting - self.knob_x).abs() > f64::EPSILON {
                    self.knob_x = resting;
                    self.dirty = true;
                }
            }
        }

        if self.slider.take_needs_redraw() {
            self.dirty = true;
        }
    }

    /// Drain observer notifications into the readout log, pulsing the
    /// feedback generator once per landed snap.
    pub fn drain_observer(&mut self, sink: &mut impl Write) {
        while let Ok(value) = self.observer_rx.try_recv() {
            self.value_events.push_front(ValueEvent {
                at: Local::now().naive_local(),
                value,
            });
            self.value_events.truncate(EVENT_LOG_CAP);
            let _ = self.feedback.pulse(sink);
            self.dirty = true;
        }
    }

    /// One event-loop tick: animation, then the observer drain.
    pub fn tick(&mut self, now: Instant) {
        self.advance(now);
        self.drain_observer(&mut io::stdout());
    }

    /// Latest observed value, falling back to the control's value before
    /// the first notification.
    pub fn latest_value(&self) -> f64 {
        self.value_events
            .front()
            .map(|event| event.value)
            .unwrap_or_else(|| self.slider.value())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::SNAP_DURATION;
    use crate::test_helpers::sized_app;

    #[test]
    fn slider_hit_maps_columns_into_track_coordinates() {
        let app = sized_app();
        let inner = app.slider_rect();
        assert_eq!(app.slider_hit(inner.x, inner.y), Some(0.0));
        assert_eq!(app.slider_hit(inner.x + 10, inner.y + 2), Some(10.0));
        // Outside the panel.
        assert_eq!(app.slider_hit(0, 20), None);
    }

    #[test]
    fn track_x_clamps_to_the_panel() {
        let app = sized_app();
        let inner = app.slider_rect();
        assert_eq!(app.track_x_for_column(0), Some(0.0));
        assert_eq!(
            app.track_x_for_column(u16::MAX),
            Some((inner.width - 1) as f64)
        );
    }

    #[test]
    fn deferred_snap_notifies_after_the_animation_lands() {
        let mut app = sized_app();
        let now = Instant::now();
        let geometry = app.geometry().unwrap();

        let outcome = app.slider.touch_began(geometry, Some(39.0));
        app.handle_outcome(outcome, now);
        assert!(app.animation.is_some());

        // Mid-flight: no notification yet.
        app.advance(now + SNAP_DURATION / 2);
        let mut sink = Vec::new();
        app.drain_observer(&mut sink);
        assert!(app.value_events.is_empty());

        // Landed: notification plus one feedback pulse.
        app.advance(now + SNAP_DURATION);
        app.drain_observer(&mut sink);
        assert_eq!(app.value_events.len(), 1);
        assert_eq!(app.value_events[0].value, 50.0);
        assert_eq!(sink, b"\x07");
        assert!(app.animation.is_none());
    }

    #[test]
    fn immediate_snap_notifies_within_the_same_call() {
        let mut app = sized_app();
        app.slider.set_animate_snapping(false);
        let geometry = app.geometry().unwrap();

        let outcome = app.slider.touch_began(geometry, Some(39.0));
        app.handle_outcome(outcome, Instant::now());
        assert!(app.animation.is_none());

        let mut sink = Vec::new();
        app.drain_observer(&mut sink);
        assert_eq!(app.value_events.len(), 1);
        assert_eq!(app.value_events[0].value, 50.0);
    }

    #[test]
    fn resting_knob_follows_the_value() {
        let mut app = sized_app();
        app.slider.set_value(100.0);
        app.advance(Instant::now());

        let geometry = app.geometry().unwrap();
        assert_eq!(app.knob_x, geometry.last_tick_x());
    }

    #[test]
    fn event_log_is_bounded() {
        let mut app = sized_app();
        app.slider.set_animate_snapping(false);
        let mut sink = Vec::new();
        for _ in 0..(EVENT_LOG_CAP + 10) {
            app.slider.step(1);
            app.slider.step(-1);
        }
        app.drain_observer(&mut sink);
        assert_eq!(app.value_events.len(), EVENT_LOG_CAP);
    }
}
