//! Color and glyph tokens for the stepped-slider TUI.
//!
//! App chrome uses a fixed palette; the slider surface resolves its colors
//! and glyphs from the control's style variant so the two presentation
//! bundles stay visually distinct.

use ratatui::style::{Color, Modifier, Style};

use stepslider_core::{Style as SliderStyle, TickColor};

// ── App chrome ───────────────────────────────────────────────────────

pub fn accent() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn positive() -> Style {
    Style::default().fg(Color::Green)
}

pub fn warning() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    panel_border(active).add_modifier(Modifier::BOLD)
}

// ── Slider surface ───────────────────────────────────────────────────

/// Concrete color for the variant's abstract tick color token.
pub fn tick_style(style: SliderStyle) -> Style {
    let color = match style.params().tick_color {
        TickColor::Black => Color::Black,
        TickColor::LightGray => Color::Gray,
    };
    Style::default().fg(color)
}

/// Knob texture. The glyph string is exactly `knob_width` cells wide.
pub fn knob_glyph(style: SliderStyle) -> &'static str {
    match style {
        SliderStyle::Classic => "▐███▌",
        SliderStyle::Modern => "▐█▌",
    }
}

/// Track textures on either side of the knob. Classic supplies its own
/// min/max pair; Modern falls back to the default track.
pub fn track_glyphs(style: SliderStyle) -> (&'static str, &'static str) {
    if style.params().custom_track {
        ("━", "╌")
    } else {
        ("─", "─")
    }
}

pub fn track_min_style(style: SliderStyle) -> Style {
    if style.params().custom_track {
        accent()
    } else {
        Style::default().fg(Color::White)
    }
}

pub fn track_max_style(_style: SliderStyle) -> Style {
    muted()
}

/// Tick glyph by mark height: elongated capping marks read taller.
pub fn tick_glyph(height: f64) -> &'static str {
    if height >= 4.0 {
        "│"
    } else {
        "╵"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knob_glyph_width_matches_the_style_params() {
        for style in [SliderStyle::Classic, SliderStyle::Modern] {
            let cells = knob_glyph(style).chars().count();
            assert_eq!(cells as f64, style.params().knob_width);
        }
    }

    #[test]
    fn variant_tick_colors_stay_distinct() {
        assert_ne!(
            tick_style(SliderStyle::Classic),
            tick_style(SliderStyle::Modern)
        );
    }

    #[test]
    fn elongated_marks_use_the_tall_glyph() {
        assert_eq!(tick_glyph(5.0), "│");
        assert_eq!(tick_glyph(3.0), "╵");
    }

    #[test]
    fn modern_uses_the_default_track_on_both_sides() {
        let (min_side, max_side) = track_glyphs(SliderStyle::Modern);
        assert_eq!(min_side, max_side);

        let (min_side, max_side) = track_glyphs(SliderStyle::Classic);
        assert_ne!(min_side, max_side);
    }
}
