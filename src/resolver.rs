use std::path::{Component, Path, PathBuf};

use crate::index::DocIndex;
use crate::types::Resolution;

/// Link targets ending in this extension are looked up as-is; anything else
/// gets it appended before lookup.
const DOC_EXTENSION: &str = ".md";

/// Classify and resolve one raw link target from `source` against the index.
///
/// External (`http://`, `https://`, `mailto:`) and same-document anchor
/// links are skipped, as are links that are empty once the anchor fragment
/// is stripped and whitespace trimmed. Everything else is resolved first by
/// exact index lookup, then relative to the source document's directory.
/// A broken resolution carries the source path and the original raw link
/// text, before any cleaning.
pub fn resolve(raw_link: &str, source: &Path, index: &DocIndex) -> Resolution {
    if raw_link.starts_with("http://")
        || raw_link.starts_with("https://")
        || raw_link.starts_with("mailto:")
    {
        return Resolution::Skipped;
    }

    if raw_link.starts_with('#') {
        return Resolution::Skipped;
    }

    let cleaned = match raw_link.find('#') {
        Some(anchor) => &raw_link[..anchor],
        None => raw_link,
    }
    .trim();

    if cleaned.is_empty() {
        return Resolution::Skipped;
    }

    let candidate = if cleaned.ends_with(DOC_EXTENSION) {
        cleaned.to_string()
    } else {
        format!("{cleaned}{DOC_EXTENSION}")
    };

    // Bare filenames and already-root-relative paths hit the index directly.
    if index.contains(&candidate) {
        return Resolution::Valid;
    }

    // Links written relative to the source document's own directory.
    let source_dir = source.parent().unwrap_or(Path::new(""));
    if let Some(resolved) = normalize_within_root(&source_dir.join(&candidate)) {
        if index.contains(&resolved.to_string_lossy()) {
            return Resolution::Valid;
        }
    }

    Resolution::Broken {
        link: raw_link.to_string(),
        source: source.to_path_buf(),
    }
}

/// Collapse `.` and `..` components without touching the filesystem.
/// Returns `None` when the path escapes the root (a `..` with nothing left
/// to pop) or contains an absolute component, since such a path can never
/// name a document under the root.
fn normalize_within_root(path: &Path) -> Option<PathBuf> {
    let mut components = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => {
                components.pop()?;
            },
            Component::Normal(c) => components.push(c),
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(components.iter().collect())
}
