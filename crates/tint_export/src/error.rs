use std::path::PathBuf;

use thiserror::Error;

/// Import failures. The preset table and live theme are unchanged whenever
/// one of these is returned.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("theme document must be a JSON object")]
    NotAnObject,

    #[error(
        "theme document has neither color scales nor css variables; \
         expected `primary`/`secondary`/`accent` shade maps or a `cssVars` block"
    )]
    UnrecognizedShape,

    #[error("invalid theme document: {0}")]
    InvalidDocument(String),

    #[error("theme document needs a non-empty `name`")]
    MissingName,

    #[error("failed to read theme file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("theme file {} is not valid JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Export failures.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode theme document")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write export file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
