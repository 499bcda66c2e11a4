//! The docvet check command: discovery, validation, report, exit code.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::Config;
use crate::error::Error;
use crate::scanner;
use crate::types::Verdict;
use crate::validator;

/// Name of the documentation root, resolved under the working directory.
const DOCS_DIR: &str = "docs";

/// Validate every internal link under `docs/`.
///
/// Prints the discovery count, then either a success line or the full
/// error block. All findings for a run are shown together at the end,
/// never interleaved with discovery.
///
/// # Errors
///
/// Returns `Error::DocsDirNotFound` when `docs/` is absent,
/// `Error::NoDocuments` when it contains no markdown files, and config
/// loading errors verbatim.
pub fn check() -> Result<ExitCode, Error> {
    let root = PathBuf::from(DOCS_DIR);
    if !root.is_dir() {
        return Err(Error::DocsDirNotFound { path: root });
    }

    let config = Config::load(Path::new("."))?;
    let documents = scanner::discover(&root, &config);
    if documents.is_empty() {
        return Err(Error::NoDocuments { root });
    }

    println!("Found {} markdown files", documents.len());

    let verdict = validator::validate(&root, &documents)?;
    print_report(&verdict);

    if verdict.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Render the verdict: a success line, or the error block followed by the
/// warning block when warnings exist (nothing populates warnings today).
fn print_report(verdict: &Verdict) {
    if verdict.is_success() && verdict.warnings.is_empty() {
        println!("Documentation validation passed");
        return;
    }

    if !verdict.errors.is_empty() {
        println!("Found {} errors:", verdict.errors.len());
        for error in &verdict.errors {
            println!("  - {error}");
        }
    }

    if !verdict.warnings.is_empty() {
        println!("Found {} warnings:", verdict.warnings.len());
        for warning in &verdict.warnings {
            println!("  - {warning}");
        }
    }
}
