//! Readout — the observer-driven value label plus recent notifications.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::format_value;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("FPS: {}", format_value(app.latest_value())),
            theme::accent().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let visible = area.height.saturating_sub(2) as usize;
    for event in app.value_events.iter().take(visible) {
        lines.push(Line::from(vec![
            Span::styled(event.at.format("%H:%M:%S").to_string(), theme::muted()),
            Span::raw("  "),
            Span::styled(
                format!("snapped to {}", format_value(event.value)),
                theme::positive(),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
