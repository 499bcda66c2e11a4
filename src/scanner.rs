use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;

/// Walk the docs root and collect every markdown file, as paths relative to
/// the root. Applies the config's include/exclude filters. The result is
/// sorted so reports are reproducible regardless of filesystem enumeration
/// order.
pub fn discover(root: &Path, config: &Config) -> Vec<PathBuf> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let md_path = entry.path();
        let relative = md_path.strip_prefix(root).unwrap_or(md_path).to_path_buf();

        if !config.should_scan(&relative.to_string_lossy()) {
            continue;
        }

        documents.push(relative);
    }

    documents.sort();
    documents
}
