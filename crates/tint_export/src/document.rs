//! The exported theme document

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tint_theme::{Mode, Preset, ShadeScale, ThemeStore};

/// Per-mode UI-variable maps, captured from the live scope at export time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CssVars {
    #[serde(default)]
    pub light: IndexMap<String, String>,
    #[serde(default)]
    pub dark: IndexMap<String, String>,
}

/// The canonical interchange shape shared by all four export forms.
///
/// Shade maps come from the resolved preset; `cssVars` reflects the live
/// document, including any one-off overrides. On import, `cssVars` and
/// `label` may be omitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeDocument {
    pub name: String,
    #[serde(default)]
    pub label: String,
    pub primary: ShadeScale,
    pub secondary: ShadeScale,
    pub accent: ShadeScale,
    #[serde(rename = "cssVars", default)]
    pub css_vars: CssVars,
}

impl ThemeDocument {
    /// Snapshot the named preset plus the live per-mode variables.
    ///
    /// Unknown names resolve to the default preset, matching the engine's
    /// fallback behavior.
    pub fn capture(store: &ThemeStore, name: &str) -> Self {
        let preset = store.resolve_preset(name);
        let fragment = store.scope().current();
        Self {
            name: preset.name,
            label: preset.label,
            primary: preset.primary,
            secondary: preset.secondary,
            accent: preset.accent,
            css_vars: CssVars {
                light: fragment.mode_vars(Mode::Light).clone(),
                dark: fragment.mode_vars(Mode::Dark).clone(),
            },
        }
    }

    /// Convert into a preset, normalizing the `DEFAULT` aliases.
    ///
    /// An empty label falls back to the name.
    pub fn into_preset(self) -> Preset {
        let label = if self.label.trim().is_empty() {
            self.name.clone()
        } else {
            self.label
        };
        Preset {
            name: self.name,
            label,
            primary: self.primary,
            secondary: self.secondary,
            accent: self.accent,
        }
        .normalized()
    }
}
