//! Input dispatch — global keys, settings adjustment, and the mouse
//! press/drag/release gesture that stands in for touch tracking.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use stepslider_core::TrackingPhase;

use crate::app::AppState;
use crate::ui::settings_panel::SETTING_COUNT;

pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Instant) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.settings_cursor + 1 < SETTING_COUNT {
                app.settings_cursor += 1;
                app.dirty = true;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.settings_cursor = app.settings_cursor.saturating_sub(1);
            app.dirty = true;
        }
        KeyCode::Char('h') | KeyCode::Left => adjust_setting(app, -1),
        KeyCode::Char('l') | KeyCode::Right => adjust_setting(app, 1),
        KeyCode::Char('H') => nudge(app, -1, now),
        KeyCode::Char('L') => nudge(app, 1, now),
        _ => {}
    }
}

/// Move the slider by one interval through the same snap/notify flow as a
/// touch gesture.
fn nudge(app: &mut AppState, steps: i64, now: Instant) {
    let outcome = app.slider.step(steps);
    app.handle_outcome(outcome, now);
}

fn adjust_setting(app: &mut AppState, direction: i64) {
    let config = app.slider.config().clone();
    match app.settings_cursor {
        0 => {
            let index = app.slider.style().index() as i64 + direction;
            app.slider.set_style_index(index);
            app.set_status(format!("Style: {}", app.slider.style().label()));
        }
        1 => {
            let minimum = (config.minimum_value + direction as f64 * config.value_interval)
                .min(config.maximum_value);
            app.slider.set_range(minimum, config.maximum_value);
        }
        2 => {
            let maximum = (config.maximum_value + direction as f64 * config.value_interval)
                .max(config.minimum_value);
            app.slider.set_range(config.minimum_value, maximum);
        }
        3 => {
            let interval = (config.value_interval + direction as f64).max(1.0);
            app.slider.set_value_interval(interval);
        }
        4 => app
            .slider
            .set_shows_values_below_track(!config.shows_values_below_track),
        5 => app
            .slider
            .set_elongate_capping_tick_marks(!config.elongate_capping_tick_marks),
        6 => app.slider.set_animate_snapping(!config.animate_snapping),
        _ => {}
    }
    app.dirty = true;
}

pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(geometry) = app.geometry() else {
                return;
            };
            if let Some(x) = app.slider_hit(mouse.column, mouse.row) {
                let outcome = app.slider.touch_began(geometry, Some(x));
                app.handle_outcome(outcome, now);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            // Visual follow only; no value is computed until release.
            if app.slider.phase() == TrackingPhase::Tracking {
                if let Some(x) = app.track_x_for_column(mouse.column) {
                    app.drag_x = Some(x);
                    app.dirty = true;
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if app.slider.phase() == TrackingPhase::Tracking {
                // The gesture ends wherever the pointer is, clamped onto
                // the track; without a screen there is no position.
                let x = app.track_x_for_column(mouse.column);
                let geometry = app.geometry().unwrap_or_else(|| {
                    stepslider_core::TrackGeometry::new(0.0, app.slider.params().knob_width)
                });
                app.drag_x = None;
                let outcome = app.slider.touch_ended(geometry, x);
                app.handle_outcome(outcome, now);
            }
        }
        _ => {}
    }
}
