//! Crate-level error types for docvet's fatal failures.
//!
//! Per-link and per-document findings are `types::Diagnostic` values inside
//! the verdict, not errors; this enum covers only the conditions that stop a
//! run before a verdict exists.

use std::path::PathBuf;

/// Each variant names the path or reason involved so the top-level handler
/// can print a useful one-line diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The documentation root directory does not exist.
    #[error("docs directory not found: {}", path.display())]
    DocsDirNotFound {
        /// The directory that was expected to exist.
        path: PathBuf,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// The documentation root exists but contains no markdown files.
    #[error("no markdown files found under {}", root.display())]
    NoDocuments {
        /// The directory that was searched.
        root: PathBuf,
    },

    /// Config file exists but cannot be parsed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),
}
