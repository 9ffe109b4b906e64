//! Top-level UI layout — slider surface, settings, readout, status bar.

pub mod readout_panel;
pub mod settings_panel;
pub mod slider_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

use slider_panel::SliderPanel;

/// Screen regions, computed the same way for drawing and for mouse
/// hit-testing.
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub slider: Rect,
    pub settings: Rect,
    pub readout: Rect,
    pub status: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(settings_panel::SETTING_COUNT as u16 + 2),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    ScreenLayout {
        slider: chunks[0],
        settings: chunks[1],
        readout: chunks[2],
        status: chunks[3],
    }
}

/// Inner drawing area of a bordered panel.
pub fn panel_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let layout = screen_layout(f.area());

    draw_border(f, layout.slider, " Slider ", true);
    f.render_widget(
        SliderPanel::new(&app.slider, app.display_knob_x()),
        panel_inner(layout.slider),
    );

    draw_border(f, layout.settings, " Settings ", false);
    settings_panel::render(f, panel_inner(layout.settings), app);

    draw_border(f, layout.readout, " Readout ", false);
    readout_panel::render(f, panel_inner(layout.readout), app);

    status_bar::render(f, layout.status, app);
}

fn draw_border(f: &mut Frame, area: Rect, title: &str, active: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(active))
        .title(title)
        .title_style(theme::panel_title(active));
    f.render_widget(block, area);
}

/// Display form of a snapped value: whole numbers drop the fraction.
pub(crate) fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_regions_tile_the_screen() {
        let layout = screen_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.slider, Rect::new(0, 0, 80, 7));
        assert_eq!(layout.settings.y, 7);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn panel_inner_shrinks_by_the_border() {
        let inner = panel_inner(Rect::new(0, 0, 80, 7));
        assert_eq!(inner, Rect::new(1, 1, 78, 5));
    }

    #[test]
    fn whole_values_format_without_a_fraction() {
        assert_eq!(format_value(55.0), "55");
        assert_eq!(format_value(2.5), "2.5");
    }
}
