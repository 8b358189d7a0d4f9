//! Pre-render bootstrap
//!
//! A minimal, synchronous variant of theme resolution that runs before the
//! full store opens: it reads the persisted settings (tolerating every
//! failure mode), looks up a reduced per-preset entry, and sets just enough
//! variables to avoid a flash of incorrectly styled content. The full store
//! replaces the fragment at startup.
//!
//! This path must never panic. Worst case it installs nothing and the first
//! real application corrects the styling.

use std::sync::Arc;

use indexmap::IndexMap;
use tint_core::hex_to_oklch;
use tracing::debug;

use crate::settings::Mode;
use crate::storage::{peek_settings, Storage};
use crate::vars::{ghost_accent, StyleScope, ThemeVariables};

/// Reduced per-preset entry: key colors only, not full scales.
struct BootEntry {
    name: &'static str,
    primary_500: &'static str,
    primary_600: &'static str,
    secondary_500: &'static str,
}

/// One entry per shipped preset. The first entry is the fallback.
const BOOT: &[BootEntry] = &[
    BootEntry { name: "default", primary_500: "#10b981", primary_600: "#059669", secondary_500: "#64748b" },
    BootEntry { name: "ocean", primary_500: "#3b82f6", primary_600: "#2563eb", secondary_500: "#64748b" },
    BootEntry { name: "violet", primary_500: "#8b5cf6", primary_600: "#7c3aed", secondary_500: "#71717a" },
    BootEntry { name: "ember", primary_500: "#f97316", primary_600: "#ea580c", secondary_500: "#78716c" },
    BootEntry { name: "rose", primary_500: "#f43f5e", primary_600: "#e11d48", secondary_500: "#737373" },
    BootEntry { name: "lagoon", primary_500: "#14b8a6", primary_600: "#0d9488", secondary_500: "#6b7280" },
    BootEntry { name: "indigo", primary_500: "#6366f1", primary_600: "#4f46e5", secondary_500: "#64748b" },
    BootEntry { name: "graphite", primary_500: "#71717a", primary_600: "#52525b", secondary_500: "#737373" },
];

/// Install the minimal pre-render variable set.
///
/// Reads persisted settings without writing anything back (no migration on
/// this path), resolves the reduced entry (default on miss), and sets only
/// `color-primary-500`, `color-primary-600`, `color-secondary-500`, the
/// per-mode `accent`, and the mode marker.
pub fn bootstrap(storage: &dyn Storage, scope: &StyleScope) {
    let settings = peek_settings(storage);
    let entry = BOOT
        .iter()
        .find(|entry| entry.name == settings.preset_name)
        .unwrap_or(&BOOT[0]);

    let primary = hex_to_oklch(entry.primary_500);

    let mut scale = IndexMap::new();
    scale.insert("color-primary-500".to_string(), primary.to_string());
    scale.insert(
        "color-primary-600".to_string(),
        hex_to_oklch(entry.primary_600).to_string(),
    );
    scale.insert(
        "color-secondary-500".to_string(),
        hex_to_oklch(entry.secondary_500).to_string(),
    );

    let mut light = IndexMap::new();
    light.insert(
        "accent".to_string(),
        ghost_accent(primary, Mode::Light).to_string(),
    );
    let mut dark = IndexMap::new();
    dark.insert(
        "accent".to_string(),
        ghost_accent(primary, Mode::Dark).to_string(),
    );

    scope.install(Arc::new(ThemeVariables::new(scale, light, dark)));
    scope.set_mode(settings.mode);
    debug!("bootstrap: minimal variables installed for {:?}", entry.name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, SETTINGS_KEY};

    #[test]
    fn bootstrap_applies_persisted_preset_and_mode() {
        let storage = MemoryStore::default();
        storage.set(SETTINGS_KEY, r#"{"mode":"dark","presetName":"ocean"}"#);

        let scope = StyleScope::new();
        bootstrap(&storage, &scope);

        assert_eq!(scope.mode(), Mode::Dark);
        // Ocean primary is blue; the documented mapping for #3b82f6.
        assert_eq!(
            scope.var("color-primary-500").as_deref(),
            Some("oklch(0.62 0.21 259)")
        );
        assert!(scope.var("accent").is_some());
    }

    #[test]
    fn bootstrap_tolerates_corrupt_storage() {
        let storage = MemoryStore::default();
        storage.set(SETTINGS_KEY, "][ not json");

        let scope = StyleScope::new();
        bootstrap(&storage, &scope);

        // Defaults: light mode, default preset.
        assert_eq!(scope.mode(), Mode::Light);
        assert_eq!(
            scope.var("color-primary-500").as_deref(),
            Some("oklch(0.64 0.20 166)")
        );
        // No migration write happens on this path.
        let raw = storage.get(SETTINGS_KEY).unwrap();
        assert_eq!(raw, "][ not json");
    }

    #[test]
    fn bootstrap_falls_back_for_unknown_preset() {
        let storage = MemoryStore::default();
        storage.set(SETTINGS_KEY, r#"{"presetName":"no-such-preset"}"#);

        let scope = StyleScope::new();
        bootstrap(&storage, &scope);
        assert_eq!(
            scope.var("color-primary-500").as_deref(),
            Some("oklch(0.64 0.20 166)")
        );
    }
}
