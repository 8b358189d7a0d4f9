//! Export serializers
//!
//! Four forms of one logical document. All read the live scope at call
//! time; the stylesheet form scopes variables under a `data-theme`
//! attribute selector and always carries both mode blocks.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tint_theme::{ThemeStore, ThemeVariables};
use tracing::debug;

use crate::document::ThemeDocument;
use crate::error::ExportError;

/// The four interchange forms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExportFormat {
    Structured,
    Stylesheet,
    TailwindConfig,
    Module,
}

impl ExportFormat {
    /// Download file name for a theme name.
    pub fn file_name(self, name: &str) -> String {
        let slug = slug(name);
        match self {
            ExportFormat::Structured => format!("{slug}.json"),
            ExportFormat::Stylesheet => format!("{slug}.css"),
            ExportFormat::TailwindConfig => format!("{slug}-tailwind.js"),
            ExportFormat::Module => format!("{slug}-theme.js"),
        }
    }
}

/// Lowercase, spaces to hyphens.
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// A rendered export: suggested file name plus contents.
#[derive(Clone, Debug, PartialEq)]
pub struct Export {
    pub file_name: String,
    pub contents: String,
}

/// Serialize the named theme in the requested form.
///
/// Captures the live document state at call time. Unknown names resolve to
/// the default preset, like every other engine operation.
pub fn export_theme(
    store: &ThemeStore,
    format: ExportFormat,
    name: &str,
) -> Result<Export, ExportError> {
    let doc = ThemeDocument::capture(store, name);
    let fragment = store.scope().current();

    let contents = match format {
        ExportFormat::Structured => structured(&doc)?,
        ExportFormat::Stylesheet => stylesheet(&doc, &fragment),
        ExportFormat::TailwindConfig => tailwind(&doc),
        ExportFormat::Module => module(&doc)?,
    };
    let file_name = format.file_name(&doc.name);
    debug!("export_theme: {:?} as {format:?} -> {file_name}", doc.name);

    Ok(Export { file_name, contents })
}

/// Write a rendered export into a directory, returning the full path.
pub fn write_export(export: &Export, dir: &Path) -> Result<PathBuf, ExportError> {
    let path = dir.join(&export.file_name);
    fs::write(&path, &export.contents).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn structured(doc: &ThemeDocument) -> Result<String, ExportError> {
    let mut out = serde_json::to_string_pretty(doc)?;
    out.push('\n');
    Ok(out)
}

fn stylesheet(doc: &ThemeDocument, fragment: &ThemeVariables) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "/* {} */", doc.label);
    let _ = writeln!(out, "[data-theme=\"{}\"] {{", doc.name);
    for (name, value) in fragment.scale() {
        let _ = writeln!(out, "  --{name}: {value};");
    }
    let _ = writeln!(out, "  --radius: 0.5rem;");
    for (name, value) in &doc.css_vars.light {
        let _ = writeln!(out, "  --{name}: {value};");
    }
    out.push_str("}\n\n");

    let _ = writeln!(out, ".dark [data-theme=\"{}\"] {{", doc.name);
    for (name, value) in &doc.css_vars.dark {
        let _ = writeln!(out, "  --{name}: {value};");
    }
    out.push_str("}\n");
    out
}

fn tailwind(doc: &ThemeDocument) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "/* Tailwind config fragment for the \"{}\" theme. */", doc.label);
    out.push_str("module.exports = {\n  theme: {\n    extend: {\n      colors: {\n");
    for name in doc.css_vars.light.keys() {
        let key = match name.strip_suffix("-foreground") {
            Some(base) => format!("{base}-fg"),
            None => name.clone(),
        };
        let _ = writeln!(out, "        {}: \"hsl(var(--{name}))\",", js_key(&key));
    }
    out.push_str("      },\n      borderRadius: {\n");
    out.push_str("        lg: \"var(--radius)\",\n");
    out.push_str("        md: \"calc(var(--radius) - 2px)\",\n");
    out.push_str("        sm: \"calc(var(--radius) - 4px)\",\n");
    out.push_str("      },\n    },\n  },\n};\n");
    out
}

fn module(doc: &ThemeDocument) -> Result<String, ExportError> {
    let ident = format!("{}Theme", camel(&slug(&doc.name)));
    let json = serde_json::to_string_pretty(doc)?;
    let mut out = String::new();
    let _ = writeln!(out, "// \"{}\" theme export.", doc.label);
    let _ = writeln!(out, "// Usage: register with your theme loader before first render:");
    let _ = writeln!(out, "//   registerTheme({ident});");
    let _ = writeln!(out, "export const {ident} = {json};");
    Ok(out)
}

/// Quote object keys that are not plain JS identifiers.
fn js_key(key: &str) -> String {
    if key.contains('-') {
        format!("\"{key}\"")
    } else {
        key.to_string()
    }
}

fn camel(slug: &str) -> String {
    let mut out = String::with_capacity(slug.len());
    for (i, part) in slug.split('-').filter(|part| !part.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(part);
        } else {
            let mut chars = part.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}
