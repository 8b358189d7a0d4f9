//! Tint theme interchange
//!
//! Exports the live theme to four interchange forms sharing one logical
//! document, and parses documents back into first-class presets:
//!
//! - **Structured** (`.json`): the canonical document — shade maps plus the
//!   live per-mode variable maps
//! - **Stylesheet** (`.css`): custom properties scoped under a
//!   `data-theme` attribute selector, light and dark blocks
//! - **Tailwind config** (`-tailwind.js`): a `theme.extend` fragment keyed
//!   off the live variable names
//! - **Module** (`-theme.js`): the structured form wrapped in an exported
//!   constant with a usage note
//!
//! Exports read the live scope at call time, so output reflects exactly
//! what is on screen, including one-off overrides. Import accepts the full
//! structured shape (added to the preset table and applied) or a legacy
//! `cssVars`-only document (applied as an override); anything else fails
//! with a descriptive [`ImportError`] and leaves the table and live theme
//! untouched.

mod document;
mod error;
mod export;
mod import;

pub use document::{CssVars, ThemeDocument};
pub use error::{ExportError, ImportError};
pub use export::{export_theme, slug, write_export, Export, ExportFormat};
pub use import::{import_document, import_file, Imported};
