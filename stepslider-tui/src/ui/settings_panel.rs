//! Settings rows — cursor-driven adjustment of the control's configuration.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub const SETTING_LABELS: [&str; 7] = [
    "Style",
    "Minimum Value",
    "Maximum Value",
    "Value Interval",
    "Values Below Track",
    "Elongate Capping Ticks",
    "Animate Snapping",
];

pub const SETTING_COUNT: usize = SETTING_LABELS.len();

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let config = app.slider.config();
    let on_off = |enabled: bool| if enabled { "on" } else { "off" };

    let values: Vec<String> = vec![
        app.slider.style().label().to_string(),
        format!("{:.0}", config.minimum_value),
        format!("{:.0}", config.maximum_value),
        format!("{:.0}", config.value_interval),
        on_off(config.shows_values_below_track).to_string(),
        on_off(config.elongate_capping_tick_marks).to_string(),
        on_off(config.animate_snapping).to_string(),
    ];

    let mut lines: Vec<Line> = Vec::new();
    for (i, (label, value)) in SETTING_LABELS.iter().zip(values.iter()).enumerate() {
        let is_active = i == app.settings_cursor;
        let style = if is_active {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::muted()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{label:>24}: "), style),
            Span::styled(value.clone(), style),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
