//! Test helpers for driving the app without a terminal.

use ratatui::layout::Rect;

use crate::app::AppState;

/// An app pinned to an 80x24 screen so hit-testing and geometry resolve.
pub fn sized_app() -> AppState {
    let mut app = AppState::new();
    app.area = Rect::new(0, 0, 80, 24);
    app
}
