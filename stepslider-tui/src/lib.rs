//! Stepped-slider TUI — a discrete snapping slider rendered with ratatui.
//!
//! Provides:
//! - The slider surface (track, knob, tick marks, optional value row)
//! - Mouse press/drag/release interaction with snap-on-release
//! - A fixed 100 ms ease-in-out snap animation with deferred notification
//! - A terminal stand-in for haptic feedback
//! - A demo screen: settings rows plus an observer-driven readout

pub mod animation;
pub mod app;
pub mod feedback;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;

#[cfg(test)]
mod test_helpers;
