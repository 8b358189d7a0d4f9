//! Generated theme variables and the live style scope
//!
//! Applying a preset produces a [`ThemeVariables`] fragment: shared scale
//! variables plus one UI-variable map per mode. The fragment is installed
//! into the [`StyleScope`] wholesale — readers always observe either the old
//! fragment or the new one, never a half-written mix.

use std::sync::{Arc, RwLock};

use arc_swap::ArcSwap;
use indexmap::IndexMap;
use tint_core::Oklch;

use crate::settings::Mode;

/// Ghost accent lightness per mode. Ghosts sit near the end of the scale
/// opposite the mode's text color.
const GHOST_LIGHT_L: f32 = 0.93;
const GHOST_DARK_L: f32 = 0.27;
const GHOST_FG_LIGHT_L: f32 = 0.32;
const GHOST_FG_DARK_L: f32 = 0.90;

/// Ghost chroma is the primary's chroma scaled down and clamped so ghosts
/// stay subtle regardless of how saturated the source preset is.
const GHOST_CHROMA_SCALE: f32 = 0.25;
const GHOST_CHROMA_MIN: f32 = 0.02;
const GHOST_CHROMA_MAX: f32 = 0.06;

/// Low-chroma accent for ghost/outline interactive elements.
///
/// Fixed lightness per mode, clamped chroma, and the primary's hue.
pub fn ghost_accent(primary: Oklch, mode: Mode) -> Oklch {
    let l = match mode {
        Mode::Light => GHOST_LIGHT_L,
        Mode::Dark => GHOST_DARK_L,
    };
    Oklch::new(l, ghost_chroma(primary), primary.h)
}

/// Foreground paired with [`ghost_accent`].
pub fn ghost_foreground(primary: Oklch, mode: Mode) -> Oklch {
    let l = match mode {
        Mode::Light => GHOST_FG_LIGHT_L,
        Mode::Dark => GHOST_FG_DARK_L,
    };
    Oklch::new(l, ghost_chroma(primary), primary.h)
}

fn ghost_chroma(primary: Oklch) -> f32 {
    (primary.c * GHOST_CHROMA_SCALE).clamp(GHOST_CHROMA_MIN, GHOST_CHROMA_MAX)
}

/// The derived output of applying a preset.
///
/// `scale` holds the mode-independent color variables
/// (`color-primary-50` … `color-accent-950` plus the `DEFAULT` aliases).
/// `light`/`dark` hold the UI-level variables (background, foreground,
/// border, accent, …) for each mode. Maps are insertion-ordered so exported
/// output is deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeVariables {
    scale: IndexMap<String, String>,
    light: IndexMap<String, String>,
    dark: IndexMap<String, String>,
}

impl ThemeVariables {
    pub fn new(
        scale: IndexMap<String, String>,
        light: IndexMap<String, String>,
        dark: IndexMap<String, String>,
    ) -> Self {
        Self { scale, light, dark }
    }

    /// Mode-independent scale variables.
    pub fn scale(&self) -> &IndexMap<String, String> {
        &self.scale
    }

    /// UI variables for one mode.
    pub fn mode_vars(&self, mode: Mode) -> &IndexMap<String, String> {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    /// The full variable set a renderer consumes: scale ∪ mode.
    pub fn resolved(&self, mode: Mode) -> IndexMap<String, String> {
        let mut vars = self.scale.clone();
        for (name, value) in self.mode_vars(mode) {
            vars.insert(name.clone(), value.clone());
        }
        vars
    }

    /// Look up one variable, mode map first, then the shared scale.
    pub fn get(&self, mode: Mode, name: &str) -> Option<&str> {
        self.mode_vars(mode)
            .get(name)
            .or_else(|| self.scale.get(name))
            .map(String::as_str)
    }

    /// Merge one-off overrides into the mode maps (legacy import path).
    pub fn with_overrides(
        &self,
        light: IndexMap<String, String>,
        dark: IndexMap<String, String>,
    ) -> Self {
        let mut merged = self.clone();
        merged.light.extend(light);
        merged.dark.extend(dark);
        merged
    }
}

/// The addressable, swappable live variable scope.
///
/// Holds the active fragment behind an atomic swap and the root-level mode
/// marker. Fragment and marker are independent: changing the mode never
/// touches the fragment and vice versa.
pub struct StyleScope {
    vars: ArcSwap<ThemeVariables>,
    mode: RwLock<Mode>,
}

impl Default for StyleScope {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleScope {
    pub fn new() -> Self {
        Self {
            vars: ArcSwap::from_pointee(ThemeVariables::default()),
            mode: RwLock::new(Mode::Light),
        }
    }

    /// Replace the active fragment wholesale.
    pub fn install(&self, vars: Arc<ThemeVariables>) {
        self.vars.store(vars);
    }

    /// The active fragment.
    pub fn current(&self) -> Arc<ThemeVariables> {
        self.vars.load_full()
    }

    /// The active mode marker.
    pub fn mode(&self) -> Mode {
        *self.mode.read().unwrap()
    }

    /// Flip only the mode marker.
    pub fn set_mode(&self, mode: Mode) {
        *self.mode.write().unwrap() = mode;
    }

    /// Resolve one variable through the active mode.
    pub fn var(&self, name: &str) -> Option<String> {
        let mode = self.mode();
        self.current().get(mode, name).map(str::to_string)
    }
}
