//! Import path
//!
//! Accepts either the full structured document (becomes a first-class
//! preset) or a legacy `cssVars`-only document (applied as a one-off
//! override). Validation happens before any mutation: on failure the
//! preset table and the live theme are exactly as they were.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tint_theme::ThemeStore;
use tracing::debug;

use crate::document::{CssVars, ThemeDocument};
use crate::error::ImportError;

/// What an import produced.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Imported {
    /// A new (or replaced) preset, added to the table and applied.
    Preset(String),
    /// A legacy document applied as a live override only.
    Override,
}

/// Import a parsed theme document.
pub fn import_document(store: &ThemeStore, document: Value) -> Result<Imported, ImportError> {
    let object = document.as_object().ok_or(ImportError::NotAnObject)?;

    // Any shade map present means the sender intended the full shape, so
    // missing pieces surface as field errors rather than shape errors.
    let looks_structured = ["primary", "secondary", "accent"]
        .iter()
        .any(|key| object.contains_key(*key));

    if looks_structured {
        let doc: ThemeDocument = serde_json::from_value(document.clone())
            .map_err(|err| ImportError::InvalidDocument(err.to_string()))?;
        if doc.name.trim().is_empty() {
            return Err(ImportError::MissingName);
        }
        let preset = doc.into_preset();
        let name = preset.name.clone();
        store.import_preset(preset);
        debug!("import_document: preset {name:?} imported and applied");
        return Ok(Imported::Preset(name));
    }

    if let Some(raw_vars) = object.get("cssVars") {
        let vars: CssVars = serde_json::from_value(raw_vars.clone())
            .map_err(|err| ImportError::InvalidDocument(err.to_string()))?;
        store.apply_override(vars.light, vars.dark);
        debug!("import_document: legacy document applied as a live override");
        return Ok(Imported::Override);
    }

    Err(ImportError::UnrecognizedShape)
}

/// Import a theme document from a file.
///
/// A small local read-to-completion; read and parse failures surface as a
/// single user-facing error naming the file and wrapping the cause.
pub fn import_file(store: &ThemeStore, path: &Path) -> Result<Imported, ImportError> {
    let raw = fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&raw).map_err(|source| ImportError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    import_document(store, value)
}
