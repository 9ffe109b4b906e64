//! Tick-mark layout — two capping marks plus evenly spaced intermediary
//! marks, produced lazily in track coordinates.

use crate::config::SliderConfig;
use crate::geometry::TrackGeometry;
use crate::style::StyleParams;

/// Vertical inset of the tick row from the bottom of the bounds.
pub const TICK_BOTTOM_INSET: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// Mark at either extreme of the track, optionally elongated.
    Capping,
    Intermediary,
}

/// One tick mark. A rounded rectangle in track coordinates, plus the
/// discrete value the mark stands for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub kind: TickKind,
    pub value: f64,
}

/// Pure layout over the current configuration, style, and bounds.
#[derive(Debug, Clone, Copy)]
pub struct TickLayout<'a> {
    geometry: TrackGeometry,
    config: &'a SliderConfig,
    style: StyleParams,
    bounds_height: f64,
}

impl<'a> TickLayout<'a> {
    pub fn new(
        geometry: TrackGeometry,
        config: &'a SliderConfig,
        style: StyleParams,
        bounds_height: f64,
    ) -> Self {
        Self {
            geometry,
            config,
            style,
            bounds_height,
        }
    }

    /// Number of intermediary marks: `floor(span / interval) - 1`, never
    /// negative. A non-divisible interval leaves the final gap ragged
    /// rather than failing.
    pub fn tick_count(&self) -> usize {
        if self.config.value_interval <= 0.0 {
            return 0;
        }
        let steps =
            (self.config.value_span() / self.config.value_interval).floor() as i64 - 1;
        steps.max(0) as usize
    }

    /// Pixel spacing between adjacent marks.
    pub fn spacing(&self) -> f64 {
        self.geometry.usable_range() / (self.tick_count() as f64 + 1.0)
    }

    fn capping_height(&self) -> f64 {
        if self.config.elongate_capping_tick_marks {
            self.style.elongated_tick_height
        } else {
            self.style.intermediary_tick_height
        }
    }

    fn tick_y(&self) -> f64 {
        self.bounds_height - TICK_BOTTOM_INSET
    }

    fn mark(&self, x: f64, height: f64, kind: TickKind, value: f64) -> TickMark {
        TickMark {
            x,
            y: self.tick_y(),
            width: self.style.tick_width,
            height,
            corner_radius: self.style.tick_width / 2.0,
            kind,
            value,
        }
    }

    /// Lazy walk over the marks: left cap, intermediaries, right cap.
    pub fn iter(&self) -> TickMarks<'a> {
        TickMarks {
            layout: *self,
            emitted: 0,
            previous_x: self.geometry.first_tick_x(),
        }
    }
}

/// Iterator over [`TickMark`]s. Intermediary x positions accumulate
/// unrounded and round per mark, matching the painted positions.
pub struct TickMarks<'a> {
    layout: TickLayout<'a>,
    emitted: usize,
    previous_x: f64,
}

impl Iterator for TickMarks<'_> {
    type Item = TickMark;

    fn next(&mut self) -> Option<TickMark> {
        let layout = self.layout;
        let count = layout.tick_count();
        let index = self.emitted;
        if index >= count + 2 {
            return None;
        }
        self.emitted += 1;

        let config = layout.config;
        let mark = if index == 0 {
            layout.mark(
                layout.geometry.first_tick_x(),
                layout.capping_height(),
                TickKind::Capping,
                config.minimum_value,
            )
        } else if index <= count {
            let x = self.previous_x + layout.spacing();
            self.previous_x = x;
            layout.mark(
                x.round(),
                layout.style.intermediary_tick_height,
                TickKind::Intermediary,
                config.minimum_value + index as f64 * config.value_interval,
            )
        } else {
            layout.mark(
                layout.geometry.last_tick_x(),
                layout.capping_height(),
                TickKind::Capping,
                config.maximum_value,
            )
        };
        Some(mark)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.layout.tick_count() + 2).saturating_sub(self.emitted);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TickMarks<'_> {}
