//! Detection rules.

use std::io;
use std::path::Path;

/// How a technology announces itself in a project directory.
#[derive(Debug, Clone, Copy)]
pub enum DetectionRule {
    /// Matches when any of the listed paths exists relative to the directory.
    AnyFile(&'static [&'static str]),

    /// Custom check for markers that aren't a fixed filename
    /// (e.g. "any `*.csproj` file"). IO errors count as non-matches.
    Predicate(fn(&Path) -> io::Result<bool>),
}

impl DetectionRule {
    /// Evaluate the rule against `dir`. Never fails: an unreadable or
    /// missing directory is a non-match for this rule only.
    pub fn matches(&self, dir: &Path) -> bool {
        match self {
            DetectionRule::AnyFile(files) => files.iter().any(|f| dir.join(f).exists()),
            DetectionRule::Predicate(check) => match check(dir) {
                Ok(matched) => matched,
                Err(e) => {
                    tracing::debug!(dir = %dir.display(), error = %e, "detection check failed");
                    false
                }
            },
        }
    }
}

/// Whether any file directly in `dir` carries the given extension.
pub fn any_file_with_extension(dir: &Path, extension: &str) -> io::Result<bool> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.path().extension().is_some_and(|ext| ext == extension) {
            return Ok(true);
        }
    }
    Ok(false)
}
