//! The slider surface — track, knob, and tick row.
//!
//! Pure rendering over the control's state; the app's dirty flag decides
//! when a frame is drawn at all.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::widgets::Widget;

use stepslider_core::{SteppedSlider, TickKind, TrackGeometry};

use crate::theme;
use crate::ui::format_value;

/// Rows within the panel body.
const TRACK_ROW: u16 = 1;
const TICK_ROW: u16 = 2;
const HINT_ROW: u16 = 4;

pub struct SliderPanel<'a> {
    slider: &'a SteppedSlider,
    /// Track x where the knob is drawn; may sit mid-animation or mid-drag.
    knob_x: f64,
}

impl<'a> SliderPanel<'a> {
    pub fn new(slider: &'a SteppedSlider, knob_x: f64) -> Self {
        Self { slider, knob_x }
    }

    fn render_track(&self, area: Rect, buf: &mut Buffer) {
        let style = self.slider.style();
        let (min_glyph, max_glyph) = theme::track_glyphs(style);
        let knob_chars: Vec<char> = theme::knob_glyph(style).chars().collect();
        let knob_cells = knob_chars.len() as i64;
        let knob_col = self.knob_x.round() as i64;
        let knob_start = knob_col - knob_cells / 2;

        let y = area.y + TRACK_ROW;
        for col in 0..area.width as i64 {
            let x = area.x + col as u16;
            if col >= knob_start && col < knob_start + knob_cells {
                let glyph = knob_chars[(col - knob_start) as usize].to_string();
                buf.set_string(x, y, glyph, theme::accent().add_modifier(Modifier::BOLD));
            } else if col < knob_col {
                buf.set_string(x, y, min_glyph, theme::track_min_style(style));
            } else {
                buf.set_string(x, y, max_glyph, theme::track_max_style(style));
            }
        }
    }

    fn render_ticks(&self, area: Rect, buf: &mut Buffer, geometry: TrackGeometry) {
        let style = self.slider.style();
        let layout = self.slider.layout(geometry, area.height as f64);
        let y = area.y + TICK_ROW;

        for mark in layout.iter() {
            let width = (mark.width.round() as i64).max(1);
            let start = mark.x.round() as i64;
            for offset in 0..width {
                let col = start + offset;
                if col < 0 || col >= area.width as i64 {
                    continue;
                }
                buf.set_string(
                    area.x + col as u16,
                    y,
                    theme::tick_glyph(mark.height),
                    theme::tick_style(style),
                );
            }
        }
    }

    /// Discrete values printed in place of the tick marks. Capping values
    /// always; intermediary values only where the spacing fits them.
    fn render_values(&self, area: Rect, buf: &mut Buffer, geometry: TrackGeometry) {
        let style = self.slider.style();
        let layout = self.slider.layout(geometry, area.height as f64);
        let spacing = layout.spacing();
        let y = area.y + TICK_ROW;
        let mut last_end: i64 = -1;

        for mark in layout.iter() {
            let label = format_value(mark.value);
            let width = label.chars().count() as i64;
            if mark.kind == TickKind::Intermediary && spacing < (width + 1) as f64 {
                continue;
            }
            let max_start = (area.width as i64 - width).max(0);
            let start = (mark.x.round() as i64 - width / 2).clamp(0, max_start);
            if start <= last_end {
                continue;
            }
            buf.set_string(area.x + start as u16, y, &label, theme::tick_style(style));
            last_end = start + width;
        }
    }
}

impl Widget for SliderPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height <= TICK_ROW {
            return;
        }
        let geometry = TrackGeometry::new(area.width as f64, self.slider.params().knob_width);
        if geometry.is_degenerate() {
            buf.set_string(area.x, area.y, "…", theme::warning());
            return;
        }

        self.render_track(area, buf);
        if self.slider.config().shows_values_below_track {
            self.render_values(area, buf, geometry);
        } else {
            self.render_ticks(area, buf, geometry);
        }

        if area.height > HINT_ROW {
            let hint = "click+release to snap · H/L to nudge";
            if (area.width as usize) > hint.len() {
                buf.set_string(area.x, area.y + HINT_ROW, hint, theme::muted());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepslider_core::{SliderConfig, Style};

    fn content_row(buf: &Buffer, area: Rect, row: u16) -> String {
        let mut content = String::new();
        for x in area.x..area.x + area.width {
            content.push_str(buf.cell((x, area.y + row)).unwrap().symbol());
        }
        content
    }

    fn slider() -> SteppedSlider {
        SteppedSlider::new(SliderConfig::default())
    }

    #[test]
    fn renders_without_panic() {
        let area = Rect::new(0, 0, 78, 5);
        let mut buf = Buffer::empty(area);
        let slider = slider();
        SliderPanel::new(&slider, 2.5).render(area, &mut buf);
    }

    #[test]
    fn knob_appears_on_the_track_row() {
        let area = Rect::new(0, 0, 78, 5);
        let mut buf = Buffer::empty(area);
        let slider = slider();
        SliderPanel::new(&slider, 39.0).render(area, &mut buf);

        let track = content_row(&buf, area, TRACK_ROW);
        assert!(track.contains('█'), "knob missing from track: {track}");
    }

    #[test]
    fn tick_row_carries_capping_and_intermediary_marks() {
        let area = Rect::new(0, 0, 78, 5);
        let mut buf = Buffer::empty(area);
        let slider = slider();
        SliderPanel::new(&slider, 2.5).render(area, &mut buf);

        let ticks = content_row(&buf, area, TICK_ROW);
        // Elongated caps by default, short intermediaries.
        assert!(ticks.contains('│'), "capping marks missing: {ticks}");
        assert!(ticks.contains('╵'), "intermediary marks missing: {ticks}");
    }

    #[test]
    fn unelongated_caps_use_the_short_glyph() {
        let area = Rect::new(0, 0, 78, 5);
        let mut buf = Buffer::empty(area);
        let mut slider = slider();
        slider.set_elongate_capping_tick_marks(false);
        SliderPanel::new(&slider, 2.5).render(area, &mut buf);

        let ticks = content_row(&buf, area, TICK_ROW);
        assert!(!ticks.contains('│'));
        assert!(ticks.contains('╵'));
    }

    #[test]
    fn values_replace_tick_marks_when_enabled() {
        let area = Rect::new(0, 0, 78, 5);
        let mut buf = Buffer::empty(area);
        let mut slider = slider();
        slider.set_shows_values_below_track(true);
        SliderPanel::new(&slider, 2.5).render(area, &mut buf);

        let row = content_row(&buf, area, TICK_ROW);
        assert!(row.contains('0'), "capping values missing: {row}");
        assert!(row.contains("100"), "maximum value missing: {row}");
        assert!(!row.contains('╵'), "tick marks should be replaced: {row}");
    }

    #[test]
    fn modern_style_renders_wide_ticks() {
        let area = Rect::new(0, 0, 78, 5);
        let mut buf = Buffer::empty(area);
        let mut slider = slider();
        slider.set_style(Style::Modern);
        SliderPanel::new(&slider, 1.5).render(area, &mut buf);

        let ticks = content_row(&buf, area, TICK_ROW);
        // Modern tick width is 3: the caps alone contribute 6 cells.
        let cells = ticks.chars().filter(|c| *c == '│' || *c == '╵').count();
        assert!(cells >= 6, "expected wide ticks, got {cells} cells");
    }

    #[test]
    fn degenerate_area_renders_nothing_but_does_not_panic() {
        let area = Rect::new(0, 0, 3, 5);
        let mut buf = Buffer::empty(area);
        let slider = slider();
        SliderPanel::new(&slider, 0.0).render(area, &mut buf);

        let track = content_row(&buf, area, TRACK_ROW);
        assert!(!track.contains('█'));
    }
}
