//! App state persistence — JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use stepslider_core::SliderConfig;

use crate::app::AppState;
use crate::ui::settings_panel::SETTING_COUNT;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    pub config: SliderConfig,
    pub style_index: usize,
    pub value: f64,
    pub settings_cursor: usize,
}

/// Load persisted state from disk. Returns defaults if the file is
/// missing, corrupt, or carries an invalid configuration.
pub fn load(path: &Path) -> PersistedState {
    let state: PersistedState = match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    };
    if state.config.validate().is_err() {
        return PersistedState::default();
    }
    state
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from the app.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        config: app.slider.config().clone(),
        style_index: app.slider.style().index(),
        value: app.slider.value(),
        settings_cursor: app.settings_cursor,
    }
}

/// Apply persisted state to the app.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.slider.set_config(state.config);
    app.slider.set_style_index(state.style_index as i64);
    app.slider.set_value(state.value);
    app.settings_cursor = state.settings_cursor.min(SETTING_COUNT - 1);
}
