use std::collections::HashSet;
use std::path::PathBuf;

/// Lookup index of every acceptable way to reference a known document.
///
/// For each document path `a/guide.md` the index holds four forms:
/// the full relative path (`a/guide.md`), the path without its extension
/// (`a/guide`), the file name (`guide.md`), and the file stem (`guide`).
/// The last two are what make bare-filename links resolve from anywhere in
/// the tree. Membership is a pure function of the document set at build
/// time; the index is never updated after construction.
#[derive(Debug)]
pub struct DocIndex {
    entries: HashSet<String>,
}

impl DocIndex {
    /// Build the index from the discovered document paths, all relative to
    /// the docs root.
    pub fn build(paths: &[PathBuf]) -> Self {
        let mut entries = HashSet::new();
        for path in paths {
            entries.insert(path.to_string_lossy().into_owned());
            entries.insert(path.with_extension("").to_string_lossy().into_owned());
            if let Some(name) = path.file_name() {
                entries.insert(name.to_string_lossy().into_owned());
            }
            if let Some(stem) = path.file_stem() {
                entries.insert(stem.to_string_lossy().into_owned());
            }
        }
        Self { entries }
    }

    /// Whether `key` is an acceptable reference to some known document.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains(key)
    }
}
