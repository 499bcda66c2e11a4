/// Core domain types for docvet resolutions, diagnostics, and verdicts.
use std::fmt;
use std::path::PathBuf;

/// Outcome of resolving one raw link against the document index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The link target was not found via exact or relative resolution.
    Broken {
        /// The raw link text exactly as authored, before anchor stripping.
        link: String,
        /// The document containing the link, relative to the docs root.
        source: PathBuf,
    },
    /// External, mailto, same-document anchor, or empty link — not checked.
    Skipped,
    /// The link target exists in the document index.
    Valid,
}

/// A single error-level finding from one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// An internal link whose target is not a known document.
    BrokenLink {
        /// The raw link text exactly as authored.
        link: String,
        /// The offending document, as displayed in the report.
        source: PathBuf,
    },
    /// A document whose content could not be read or decoded.
    UnreadableDocument {
        /// The unreadable document, as displayed in the report.
        path: PathBuf,
        /// Description of the read failure.
        reason: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::BrokenLink { link, source } => {
                write!(f, "Broken link in {}: {link}", source.display())
            },
            Diagnostic::UnreadableDocument { path, reason } => {
                write!(f, "Cannot read {}: {reason}", path.display())
            },
        }
    }
}

/// Aggregate result of one validation run. Diagnostics keep the order in
/// which they were found: document enumeration order, then link order
/// within a document.
#[derive(Debug, Default)]
pub struct Verdict {
    /// Error-level diagnostics; any entry fails the run.
    pub errors: Vec<Diagnostic>,
    /// Warning-level diagnostics. Part of the result shape for forward
    /// compatibility; nothing populates this today.
    pub warnings: Vec<Diagnostic>,
}

impl Verdict {
    /// A run passes exactly when it produced zero errors.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
