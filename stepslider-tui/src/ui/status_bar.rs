//! One-line status bar — leveled status message or key hints.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

const HINTS: &str = " q quit │ j/k select │ h/l adjust │ H/L nudge │ click+release to snap";

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let line = match &app.status {
        Some((StatusLevel::Warning, message)) => {
            Line::from(Span::styled(format!(" {message}"), theme::warning()))
        }
        Some((StatusLevel::Info, message)) => {
            Line::from(Span::styled(format!(" {message}"), theme::accent()))
        }
        None => Line::from(Span::styled(HINTS, theme::muted())),
    };

    f.render_widget(Paragraph::new(line), area);
}
