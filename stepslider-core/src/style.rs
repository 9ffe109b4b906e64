//! Style variants — a closed set of presentation parameter bundles.
//!
//! Each variant fixes the knob width, tick width, tick heights, tick color,
//! and whether the variant paints its own track textures. Selection goes
//! through an integer index mapped modulo the variant count, so any selector
//! value lands on a valid style.

use serde::{Deserialize, Serialize};

/// Presentation variant for the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Style {
    #[default]
    Classic,
    Modern,
}

/// Abstract color token for tick marks. The front end resolves it to a
/// concrete color; the engine stays free of UI types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickColor {
    Black,
    LightGray,
}

/// Immutable presentation parameters of a [`Style`] variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleParams {
    /// Knob width in track units. Half of it insets each end of the track
    /// so the knob never overhangs.
    pub knob_width: f64,
    pub tick_width: f64,
    pub intermediary_tick_height: f64,
    pub elongated_tick_height: f64,
    /// Whether the variant supplies its own min/max track textures.
    /// Modern leaves both to the default track.
    pub custom_track: bool,
    pub tick_color: TickColor,
}

impl Style {
    pub const COUNT: usize = 2;

    /// Map an arbitrary integer selector onto a variant: even → Classic,
    /// odd → Modern. Euclidean remainder keeps negative selectors valid.
    pub fn from_index(index: i64) -> Self {
        if index.rem_euclid(Self::COUNT as i64) == 0 {
            Style::Classic
        } else {
            Style::Modern
        }
    }

    pub fn index(self) -> usize {
        match self {
            Style::Classic => 0,
            Style::Modern => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Style::Classic => "Classic",
            Style::Modern => "Modern",
        }
    }

    /// Presentation parameters for this variant.
    pub fn params(self) -> StyleParams {
        match self {
            Style::Classic => StyleParams {
                knob_width: 5.0,
                tick_width: 1.0,
                intermediary_tick_height: 3.0,
                elongated_tick_height: 5.0,
                custom_track: true,
                tick_color: TickColor::Black,
            },
            Style::Modern => StyleParams {
                knob_width: 3.0,
                tick_width: 3.0,
                intermediary_tick_height: 3.0,
                elongated_tick_height: 5.0,
                custom_track: false,
                tick_color: TickColor::LightGray,
            },
        }
    }
}
