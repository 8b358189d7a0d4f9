//! Resolved runtime settings
//!
//! The settings snapshot is the single source of truth for the active
//! configuration. It is always fully defined: every field carries a serde
//! default so a partial or outdated stored snapshot loads into a complete
//! value. Changes replace the snapshot wholesale, never field-by-field.

use serde::{Deserialize, Serialize};

use crate::presets::DEFAULT_PRESET;

/// Light or dark color scheme.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub fn toggle(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    /// Root-level marker class used by stylesheets to select the mode.
    pub fn class_name(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    /// Interpret the legacy `dark-mode` storage flag.
    pub fn from_legacy_flag(flag: &str) -> Self {
        if flag == "true" {
            Mode::Dark
        } else {
            Mode::Light
        }
    }
}

/// Content width preference.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Vertical,
    Horizontal,
}

/// Contrast preference.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contrast {
    #[default]
    Normal,
    High,
}

/// The active configuration snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_preset_name")]
    pub preset_name: String,
    #[serde(default)]
    pub stretch: bool,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub contrast: Contrast,
}

fn default_preset_name() -> String {
    DEFAULT_PRESET.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::Light,
            preset_name: default_preset_name(),
            stretch: false,
            layout: Layout::Vertical,
            contrast: Contrast::Normal,
        }
    }
}
