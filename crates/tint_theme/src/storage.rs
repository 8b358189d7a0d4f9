//! Durable key-value persistence
//!
//! Theme settings persist through a small string-to-string store. Storage
//! trouble is never surfaced to callers: a missing, unreadable, or corrupt
//! entry is treated as "no saved preference" and logged.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::settings::{Mode, Settings};

/// Structured settings snapshot, JSON-encoded.
pub const SETTINGS_KEY: &str = "settings";
/// Legacy key: plain preset name. Read only when [`SETTINGS_KEY`] is absent.
pub const LEGACY_PRESET_KEY: &str = "theme-preset";
/// Legacy key: `"true"`/`"false"` dark-mode flag.
pub const LEGACY_DARK_KEY: &str = "dark-mode";

/// A durable string store scoped to the application.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store for tests and embedded use.
///
/// Clones share the same underlying map, so a clone stands in for "the same
/// storage seen by a later session".
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl Storage for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.write().unwrap().remove(key);
    }
}

/// File-backed store: one JSON object (string values) per file.
///
/// Every access goes to disk; the store holds no cache. I/O and parse
/// failures degrade to "nothing stored".
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> HashMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return HashMap::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(err) => {
                warn!(
                    "FileStore: {} is not a valid store file ({err}), starting empty",
                    self.path.display()
                );
                HashMap::new()
            }
        }
    }

    fn write_map(&self, map: &HashMap<String, String>) {
        let raw = match serde_json::to_string_pretty(map) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("FileStore: failed to encode store ({err})");
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Err(err) = fs::write(&self.path, raw) {
            warn!("FileStore: failed to write {} ({err})", self.path.display());
        }
    }
}

impl Storage for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map);
    }

    fn remove(&self, key: &str) {
        let mut map = self.read_map();
        if map.remove(key).is_some() {
            self.write_map(&map);
        }
    }
}

/// Load settings, migrating legacy keys the first time.
///
/// Read precedence: the structured [`SETTINGS_KEY`]; if absent or
/// unparsable, the legacy keys; with nothing stored, hard defaults. When the
/// legacy keys are the source, the structured key is written so future loads
/// take the first path.
pub fn load_settings(storage: &dyn Storage) -> Settings {
    if let Some(settings) = read_structured(storage) {
        return settings;
    }

    let legacy_preset = storage.get(LEGACY_PRESET_KEY);
    let legacy_dark = storage.get(LEGACY_DARK_KEY);
    let migrate = legacy_preset.is_some() || legacy_dark.is_some();

    let mut settings = Settings::default();
    if let Some(name) = legacy_preset {
        settings.preset_name = name;
    }
    if let Some(flag) = legacy_dark {
        settings.mode = Mode::from_legacy_flag(&flag);
    }

    if migrate {
        debug!("load_settings: migrating legacy theme keys to the structured snapshot");
        save_settings(storage, &settings);
    }
    settings
}

/// Read-only settings load for the bootstrap path: no migration writes.
pub fn peek_settings(storage: &dyn Storage) -> Settings {
    if let Some(settings) = read_structured(storage) {
        return settings;
    }
    let mut settings = Settings::default();
    if let Some(name) = storage.get(LEGACY_PRESET_KEY) {
        settings.preset_name = name;
    }
    if let Some(flag) = storage.get(LEGACY_DARK_KEY) {
        settings.mode = Mode::from_legacy_flag(&flag);
    }
    settings
}

fn read_structured(storage: &dyn Storage) -> Option<Settings> {
    let raw = storage.get(SETTINGS_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(settings) => Some(settings),
        Err(err) => {
            warn!("load_settings: stored settings are unparsable ({err}), ignoring");
            None
        }
    }
}

/// Persist the settings snapshot under the structured key.
pub fn save_settings(storage: &dyn Storage, settings: &Settings) {
    match serde_json::to_string(settings) {
        Ok(raw) => storage.set(SETTINGS_KEY, &raw),
        Err(err) => warn!("save_settings: failed to encode settings ({err})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn structured_key_wins_over_legacy_keys() {
        let store = MemoryStore::default();
        store.set(SETTINGS_KEY, r#"{"mode":"dark","presetName":"ocean"}"#);
        store.set(LEGACY_PRESET_KEY, "violet");
        store.set(LEGACY_DARK_KEY, "false");

        let settings = load_settings(&store);
        assert_eq!(settings.preset_name, "ocean");
        assert_eq!(settings.mode, Mode::Dark);
    }

    #[test]
    fn legacy_keys_migrate_once() {
        let store = MemoryStore::default();
        store.set(LEGACY_PRESET_KEY, "violet");
        store.set(LEGACY_DARK_KEY, "true");

        let settings = load_settings(&store);
        assert_eq!(settings.preset_name, "violet");
        assert_eq!(settings.mode, Mode::Dark);

        // The structured key now exists and is preferred.
        let raw = store.get(SETTINGS_KEY).expect("migration writes the snapshot");
        let reread: Settings = serde_json::from_str(&raw).unwrap();
        assert_eq!(reread, settings);
    }

    #[test]
    fn corrupt_snapshot_falls_back_to_defaults() {
        let store = MemoryStore::default();
        store.set(SETTINGS_KEY, "{not json");
        assert_eq!(load_settings(&store), Settings::default());
    }

    #[test]
    fn peek_never_writes() {
        let store = MemoryStore::default();
        store.set(LEGACY_PRESET_KEY, "violet");
        let settings = peek_settings(&store);
        assert_eq!(settings.preset_name, "violet");
        assert_eq!(store.get(SETTINGS_KEY), None);
    }
}
