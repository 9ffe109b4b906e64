//! Stepped-slider engine — discrete-interval snapping without any UI dependency.
//!
//! This crate contains everything about the control that can be tested headless:
//! - Style variants (closed set of presentation parameter bundles)
//! - Slider configuration and validation
//! - Track geometry (insets, usable range, value ↔ x mapping)
//! - Touch-to-value snapping
//! - Tick-mark layout (capping + intermediary marks)
//! - Interaction state machine with two-phase observer notification

pub mod config;
pub mod control;
pub mod geometry;
pub mod layout;
pub mod mapping;
pub mod style;

pub use config::{ConfigError, SliderConfig};
pub use control::{NotifyMode, SnapOutcome, SteppedSlider, TrackingPhase};
pub use geometry::TrackGeometry;
pub use layout::{TickKind, TickLayout, TickMark};
pub use mapping::{map_touch, snap_to_interval, Mapped};
pub use style::{Style, StyleParams, TickColor};
