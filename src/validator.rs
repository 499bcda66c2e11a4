//! Validation run orchestration: index once, then extract and resolve per
//! document, folding findings into an immutable verdict.

use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::extract::LinkExtractor;
use crate::index::DocIndex;
use crate::resolver;
use crate::types::{Diagnostic, Resolution, Verdict};

/// Validate every document in `paths` (relative to `root`) and aggregate
/// the findings.
///
/// Documents are processed in the given order, links in their order of
/// appearance, so the verdict's diagnostics are deterministic for a given
/// input. A document that cannot be read contributes a single diagnostic
/// and is otherwise skipped; its links are not extracted. Diagnostics carry
/// root-joined paths, matching how the report displays them.
///
/// # Errors
///
/// Returns `Error::NoDocuments` when `paths` is empty; per-document
/// failures never abort the run.
pub fn validate(root: &Path, paths: &[PathBuf]) -> Result<Verdict, Error> {
    if paths.is_empty() {
        return Err(Error::NoDocuments {
            root: root.to_path_buf(),
        });
    }

    let index = DocIndex::build(paths);
    let extractor = LinkExtractor::new();
    let mut errors = Vec::new();

    for path in paths {
        let content = match std::fs::read_to_string(root.join(path)) {
            Ok(content) => content,
            Err(e) => {
                errors.push(Diagnostic::UnreadableDocument {
                    path: root.join(path),
                    reason: e.to_string(),
                });
                continue;
            },
        };

        for raw_link in extractor.extract(&content) {
            if let Resolution::Broken { link, source } = resolver::resolve(&raw_link, path, &index)
            {
                errors.push(Diagnostic::BrokenLink {
                    link,
                    source: root.join(source),
                });
            }
        }
    }

    Ok(Verdict {
        errors,
        warnings: Vec::new(),
    })
}
