//! Tint theme system
//!
//! A switchable multi-theme design system: named color presets with full
//! shade scales, light/dark mode, generated OKLCH variables, and durable
//! settings.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Presets**: eight built-in color schemes (primary/secondary/accent
//!   shade scales), extendable at runtime by import
//! - **Resolution**: preset + mode → a set of named OKLCH variables,
//!   installed atomically into a swappable [`StyleScope`]
//! - **Persistence**: settings survive restarts, including a one-time
//!   migration from legacy single-value keys
//! - **Bootstrap**: a minimal pre-render pass that sets just enough
//!   variables to avoid a flash of incorrectly styled content
//!
//! # Quick Start
//!
//! ```rust
//! use tint_theme::{MemoryStore, Mode, ThemeStore};
//!
//! let store = ThemeStore::open(Box::new(MemoryStore::default()));
//! store.apply_preset("ocean");
//! store.set_mode(Mode::Dark);
//!
//! let accent = store.scope().var("accent");
//! assert!(accent.is_some());
//! ```
//!
//! # Failure semantics
//!
//! Preset and mode operations never fail: unknown preset names resolve to
//! the default preset, storage trouble is treated as "no saved preference",
//! and a shade that fails color conversion is substituted with neutral gray.
//! Only the import path (in `tint_export`) surfaces errors.

pub mod bootstrap;
pub mod presets;
pub mod scale;
pub mod settings;
pub mod storage;
pub mod store;
pub mod vars;

// Re-export commonly used types
pub use presets::{Preset, PresetOption, PresetTable, DEFAULT_PRESET};
pub use scale::{Shade, ShadeScale};
pub use settings::{Contrast, Layout, Mode, Settings};
pub use storage::{load_settings, save_settings, FileStore, MemoryStore, Storage};
pub use store::ThemeStore;
pub use vars::{StyleScope, ThemeVariables};
