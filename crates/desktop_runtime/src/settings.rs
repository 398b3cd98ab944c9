//! Persisted desktop preferences.
//!
//! Only this snapshot survives a reload. Window layout and the VFS are rebuilt from scratch on
//! every boot.

use platform_host::{load_setting_with, save_setting_with, SettingsStore};
use serde::{Deserialize, Serialize};

use crate::error::RuntimeError;

pub const SETTINGS_KEY: &str = "webos.settings.v1";
pub const DEFAULT_ACCENT_COLOR: &str = "#0ea5e9";
pub const DEFAULT_WALLPAPER: &str = "/assets/wallpapers/Windows/img0.jpg";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsSnapshot {
    pub theme: ThemeMode,
    pub accent_color: String,
    pub wallpaper: String,
    pub sound_muted: bool,
}

impl Default for SettingsSnapshot {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            wallpaper: DEFAULT_WALLPAPER.to_string(),
            sound_muted: false,
        }
    }
}

/// Loads the persisted snapshot, falling back to defaults when absent or unreadable.
pub fn load_settings(store: &dyn SettingsStore) -> SettingsSnapshot {
    match load_setting_with::<_, SettingsSnapshot>(store, SETTINGS_KEY) {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => SettingsSnapshot::default(),
        Err(err) => {
            leptos::logging::warn!("settings load failed, using defaults: {err}");
            SettingsSnapshot::default()
        }
    }
}

pub fn persist_settings(
    store: &dyn SettingsStore,
    snapshot: &SettingsSnapshot,
) -> Result<(), RuntimeError> {
    save_setting_with(store, SETTINGS_KEY, snapshot).map_err(RuntimeError::Settings)
}

#[cfg(test)]
mod tests {
    use platform_host::MemorySettingsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_or_corrupt_settings_load_defaults() {
        let store = MemorySettingsStore::default();
        assert_eq!(load_settings(&store), SettingsSnapshot::default());

        store.save_raw(SETTINGS_KEY, "{not json").expect("save raw");
        assert_eq!(load_settings(&store), SettingsSnapshot::default());
    }

    #[test]
    fn settings_round_trip_through_store() {
        let store = MemorySettingsStore::default();
        let snapshot = SettingsSnapshot {
            theme: ThemeMode::Light,
            accent_color: "#f97316".to_string(),
            wallpaper: "/assets/wallpapers/bliss.jpg".to_string(),
            sound_muted: true,
        };
        persist_settings(&store, &snapshot).expect("persist");
        assert_eq!(load_settings(&store), snapshot);
        assert!(store
            .raw(SETTINGS_KEY)
            .expect("raw json")
            .contains("\"accentColor\":\"#f97316\""));
    }

    #[test]
    fn partial_snapshot_fills_missing_fields() {
        let store = MemorySettingsStore::default();
        store
            .save_raw(SETTINGS_KEY, r#"{"theme":"light"}"#)
            .expect("save raw");
        let loaded = load_settings(&store);
        assert_eq!(loaded.theme, ThemeMode::Light);
        assert_eq!(loaded.accent_color, DEFAULT_ACCENT_COLOR);
        assert!(!loaded.sound_muted);
    }
}
