//! Built-in preset catalog and the runtime preset table

pub mod palette;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::scale::ShadeScale;

/// The designated fallback preset. Always present in the table.
pub const DEFAULT_PRESET: &str = "default";

/// A named, complete color scheme: three shade scales.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub label: String,
    pub primary: ShadeScale,
    pub secondary: ShadeScale,
    pub accent: ShadeScale,
}

impl Preset {
    fn builtin(name: &str, label: &str, primary: [&str; 11], secondary: [&str; 11], accent: [&str; 11]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            primary: ShadeScale::from_hex(primary),
            secondary: ShadeScale::from_hex(secondary),
            accent: ShadeScale::from_hex(accent),
        }
    }

    /// Re-pin every scale's `DEFAULT` alias to its 500 step.
    pub fn normalized(mut self) -> Self {
        self.primary = self.primary.normalized();
        self.secondary = self.secondary.normalized();
        self.accent = self.accent.normalized();
        self
    }
}

/// One entry for UI preset pickers.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetOption {
    pub value: String,
    pub label: String,
    /// Primary `DEFAULT` hex, for the picker swatch.
    pub swatch: String,
}

/// Insertion-ordered `name -> Preset` table.
///
/// Seeded from the built-in catalog; extendable at runtime by import. The
/// default preset is always resolvable.
#[derive(Clone, Debug)]
pub struct PresetTable {
    entries: IndexMap<String, Preset>,
}

impl Default for PresetTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PresetTable {
    /// The shipped catalog, in display order.
    pub fn builtin() -> Self {
        use palette::*;

        let catalog = [
            Preset::builtin(DEFAULT_PRESET, "Emerald", EMERALD, SLATE, TEAL),
            Preset::builtin("ocean", "Ocean", BLUE, SLATE, SKY),
            Preset::builtin("violet", "Violet", VIOLET, ZINC, FUCHSIA),
            Preset::builtin("ember", "Ember", ORANGE, STONE, AMBER),
            Preset::builtin("rose", "Rose", ROSE, NEUTRAL, PINK),
            Preset::builtin("lagoon", "Lagoon", TEAL, GRAY, CYAN),
            Preset::builtin("indigo", "Indigo", INDIGO, SLATE, PURPLE),
            Preset::builtin("graphite", "Graphite", ZINC, NEUTRAL, LIME),
        ];

        let mut entries = IndexMap::with_capacity(catalog.len());
        for preset in catalog {
            entries.insert(preset.name.clone(), preset);
        }
        Self { entries }
    }

    /// Resolve a preset by name, falling back to the default preset.
    ///
    /// Never fails: the default is seeded by the constructor and inserts
    /// only add entries.
    pub fn get(&self, name: &str) -> &Preset {
        self.entries
            .get(name)
            .unwrap_or_else(|| &self.entries[DEFAULT_PRESET])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Preset names in table order.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Picker entries in table order.
    pub fn options(&self) -> Vec<PresetOption> {
        self.entries
            .values()
            .map(|preset| PresetOption {
                value: preset.name.clone(),
                label: preset.label.clone(),
                swatch: preset.primary.default_value().to_string(),
            })
            .collect()
    }

    /// Add or replace a preset (runtime imports).
    pub fn insert(&mut self, preset: Preset) {
        self.entries.insert(preset.name.clone(), preset);
    }
}
