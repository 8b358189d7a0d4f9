//! The theme store
//!
//! Explicit application-state object for the theme system: constructed once
//! at startup with a [`Storage`] backend, then passed down to whatever needs
//! theme access. Owns the preset table, the settings snapshot, the per-preset
//! fragment cache, and the live [`StyleScope`].
//!
//! Preset and mode operations are infallible by design: unknown names fall
//! back to the default preset, storage trouble degrades to defaults, and a
//! shade that fails conversion is substituted with neutral gray. Every
//! change persists the settings snapshot.

use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tint_core::{hex_to_oklch, Oklch};
use tracing::{debug, warn};

use crate::presets::{Preset, PresetOption, PresetTable, DEFAULT_PRESET};
use crate::scale::Shade;
use crate::settings::{Contrast, Layout, Mode, Settings};
use crate::storage::{load_settings, save_settings, Storage};
use crate::vars::{ghost_accent, ghost_foreground, StyleScope, ThemeVariables};

/// Runtime theme state.
pub struct ThemeStore {
    storage: Box<dyn Storage>,

    /// Preset table: built-in catalog plus runtime imports.
    presets: RwLock<PresetTable>,

    /// The active configuration snapshot (replaced wholesale on change).
    settings: RwLock<Settings>,

    /// Generated fragments keyed by preset name.
    cache: RwLock<FxHashMap<String, Arc<ThemeVariables>>>,

    /// The live variable scope.
    scope: StyleScope,
}

impl ThemeStore {
    /// Open the store: load persisted settings (migrating legacy keys) and
    /// apply the persisted preset and mode.
    pub fn open(storage: Box<dyn Storage>) -> Self {
        let settings = load_settings(storage.as_ref());
        let store = Self {
            storage,
            presets: RwLock::new(PresetTable::builtin()),
            settings: RwLock::new(settings.clone()),
            cache: RwLock::new(FxHashMap::default()),
            scope: StyleScope::new(),
        };
        store.scope.set_mode(settings.mode);
        store.apply_preset(&settings.preset_name);
        store
    }

    // ========== Access ==========

    /// The live variable scope.
    pub fn scope(&self) -> &StyleScope {
        &self.scope
    }

    /// The current settings snapshot.
    pub fn settings(&self) -> Settings {
        self.settings.read().unwrap().clone()
    }

    /// Preset names in table order.
    pub fn preset_names(&self) -> Vec<String> {
        self.presets.read().unwrap().names()
    }

    /// Picker entries in table order.
    pub fn preset_options(&self) -> Vec<PresetOption> {
        self.presets.read().unwrap().options()
    }

    /// Resolve a preset by name (silent fallback to the default).
    pub fn resolve_preset(&self, name: &str) -> Preset {
        self.presets.read().unwrap().get(name).clone()
    }

    // ========== Preset application ==========

    /// Apply a preset by name.
    ///
    /// Resolution falls back to the default preset for unknown names. The
    /// generated fragment is cached keyed by preset name, installed into the
    /// scope wholesale, and the canonical name is persisted as the active
    /// preset. Repeat calls reuse the cached fragment without re-running
    /// color conversion.
    pub fn apply_preset(&self, name: &str) {
        let (canonical, fragment) = {
            let presets = self.presets.read().unwrap();
            if !presets.contains(name) {
                warn!("apply_preset: unknown preset {name:?}, falling back to {DEFAULT_PRESET:?}");
            }
            let preset = presets.get(name);
            let canonical = preset.name.clone();

            let cached = self.cache.read().unwrap().get(&canonical).cloned();
            let fragment = match cached {
                Some(fragment) => {
                    debug!("apply_preset: cache hit for {canonical:?}");
                    fragment
                }
                None => {
                    let fragment = Arc::new(generate(preset));
                    self.cache
                        .write()
                        .unwrap()
                        .insert(canonical.clone(), fragment.clone());
                    fragment
                }
            };
            (canonical, fragment)
        };

        self.scope.install(fragment);
        debug!("apply_preset: {canonical:?} active");
        self.update_settings(|settings| settings.preset_name = canonical);
    }

    // ========== Mode ==========

    /// Switch the color scheme. Flips only the scope marker; the fragment is
    /// untouched, so mode and preset stay orthogonal.
    pub fn set_mode(&self, mode: Mode) {
        if self.scope.mode() == mode {
            return;
        }
        debug!("set_mode: switching to {:?}", mode);
        self.scope.set_mode(mode);
        self.update_settings(|settings| settings.mode = mode);
    }

    /// Toggle between light and dark mode.
    pub fn toggle_mode(&self) {
        self.set_mode(self.scope.mode().toggle());
    }

    // ========== Display preferences ==========

    pub fn set_stretch(&self, stretch: bool) {
        self.update_settings(|settings| settings.stretch = stretch);
    }

    pub fn set_layout(&self, layout: Layout) {
        self.update_settings(|settings| settings.layout = layout);
    }

    pub fn set_contrast(&self, contrast: Contrast) {
        self.update_settings(|settings| settings.contrast = contrast);
    }

    // ========== Overrides and imports ==========

    /// One-off variable override for legacy imported documents.
    ///
    /// Merged over the active fragment's mode maps and installed; no preset
    /// is created and the cache is untouched, so re-applying any preset
    /// restores pristine output.
    pub fn apply_override(
        &self,
        light: IndexMap<String, String>,
        dark: IndexMap<String, String>,
    ) {
        debug!(
            "apply_override: {} light / {} dark variables",
            light.len(),
            dark.len()
        );
        let merged = self.scope.current().with_overrides(light, dark);
        self.scope.install(Arc::new(merged));
    }

    /// Add an imported preset to the table and apply it.
    ///
    /// Replaces any same-named entry; the stale cache entry is dropped so
    /// the next application regenerates from the imported scales.
    pub fn import_preset(&self, preset: Preset) {
        let preset = preset.normalized();
        let name = preset.name.clone();
        debug!("import_preset: {name:?}");
        self.cache.write().unwrap().remove(&name);
        self.presets.write().unwrap().insert(preset);
        self.apply_preset(&name);
    }

    // ========== Reset ==========

    /// Back to hard defaults, persisted.
    pub fn reset(&self) {
        debug!("reset: restoring default settings");
        *self.settings.write().unwrap() = Settings::default();
        save_settings(self.storage.as_ref(), &Settings::default());
        self.scope.set_mode(Mode::Light);
        self.apply_preset(DEFAULT_PRESET);
    }

    // ========== Internal ==========

    /// Replace the settings snapshot wholesale and persist it.
    fn update_settings(&self, mutate: impl FnOnce(&mut Settings)) {
        let next = {
            let mut guard = self.settings.write().unwrap();
            let mut next = guard.clone();
            mutate(&mut next);
            *guard = next.clone();
            next
        };
        save_settings(self.storage.as_ref(), &next);
    }
}

/// Generate the variable fragment for one preset.
fn generate(preset: &Preset) -> ThemeVariables {
    let mut scale = IndexMap::new();
    for (family, shades) in [
        ("primary", &preset.primary),
        ("secondary", &preset.secondary),
        ("accent", &preset.accent),
    ] {
        for (shade, hex) in shades.iter() {
            scale.insert(
                format!("color-{family}-{}", shade.key()),
                hex_to_oklch(hex).to_string(),
            );
        }
        // DEFAULT alias
        scale.insert(
            format!("color-{family}"),
            hex_to_oklch(shades.default_value()).to_string(),
        );
    }

    let primary = hex_to_oklch(preset.primary.default_value());
    ThemeVariables::new(
        scale,
        ui_vars(preset, Mode::Light, primary),
        ui_vars(preset, Mode::Dark, primary),
    )
}

/// UI-level variables for one mode, derived from the preset's neutral
/// (secondary) scale with the primary driving ring and ghost accents.
fn ui_vars(preset: &Preset, mode: Mode, primary: Oklch) -> IndexMap<String, String> {
    let sec = &preset.secondary;
    let conv = |hex: &str| hex_to_oklch(hex).to_string();
    let white = Oklch::new(1.0, 0.0, 0.0).to_string();

    let mut vars = IndexMap::new();
    match mode {
        Mode::Light => {
            vars.insert("background".to_string(), white.clone());
            vars.insert("foreground".to_string(), conv(sec.get(Shade::S950)));
            vars.insert("card".to_string(), white);
            vars.insert("card-foreground".to_string(), conv(sec.get(Shade::S950)));
            vars.insert("muted".to_string(), conv(sec.get(Shade::S100)));
            vars.insert("muted-foreground".to_string(), conv(sec.get(Shade::S500)));
            vars.insert("border".to_string(), conv(sec.get(Shade::S200)));
            vars.insert("input".to_string(), conv(sec.get(Shade::S200)));
            vars.insert("ring".to_string(), conv(preset.primary.get(Shade::S500)));
        }
        Mode::Dark => {
            vars.insert("background".to_string(), conv(sec.get(Shade::S950)));
            vars.insert("foreground".to_string(), conv(sec.get(Shade::S50)));
            vars.insert("card".to_string(), conv(sec.get(Shade::S900)));
            vars.insert("card-foreground".to_string(), conv(sec.get(Shade::S50)));
            vars.insert("muted".to_string(), conv(sec.get(Shade::S800)));
            vars.insert("muted-foreground".to_string(), conv(sec.get(Shade::S400)));
            vars.insert("border".to_string(), conv(sec.get(Shade::S800)));
            vars.insert("input".to_string(), conv(sec.get(Shade::S800)));
            vars.insert("ring".to_string(), conv(preset.primary.get(Shade::S400)));
        }
    }
    vars.insert("accent".to_string(), ghost_accent(primary, mode).to_string());
    vars.insert(
        "accent-foreground".to_string(),
        ghost_foreground(primary, mode).to_string(),
    );
    vars
}
