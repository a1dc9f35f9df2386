//! Marker-file detection against a target directory.
//!
//! Detection walks the [registry](crate::registry) in order and evaluates
//! each technology's rule against an explicit directory — never the implicit
//! working directory — so tests can point it at arbitrary synthetic trees.

pub mod rules;

pub use rules::DetectionRule;

use std::path::Path;

use crate::registry::TechnologyDescriptor;

/// Return the registry entries whose detection rule matches `dir`.
///
/// Matches come back in registry order, which is also execution order.
/// Each rule is evaluated exactly once; evaluation failures (missing or
/// unreadable directory) count as non-matches and never abort detection
/// of the remaining entries.
pub fn detect<'a>(
    dir: &Path,
    registry: &'a [TechnologyDescriptor],
) -> Vec<&'a TechnologyDescriptor> {
    registry
        .iter()
        .filter(|tech| {
            let matched = tech.rule.matches(dir);
            if matched {
                tracing::debug!(technology = tech.name, "marker matched");
            }
            matched
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::registry;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn empty_directory_detects_nothing() {
        let temp = TempDir::new().unwrap();
        let detected = detect(temp.path(), registry());
        assert!(detected.is_empty());
    }

    #[test]
    fn go_mod_detects_exactly_go() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("go.mod"), "module example\n").unwrap();

        let detected = detect(temp.path(), registry());
        assert_eq!(detected.len(), 1);
        assert_eq!(detected[0].name, "Go");
    }

    #[test]
    fn multiple_markers_detect_in_registry_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Dockerfile"), "FROM scratch\n").unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();

        let detected = detect(temp.path(), registry());
        let names: Vec<_> = detected.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Node.js", "Docker"]);
    }

    #[test]
    fn csproj_file_detects_dotnet() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("App.csproj"), "<Project/>").unwrap();

        let detected = detect(temp.path(), registry());
        assert_eq!(detected.len(), 1);
        assert_eq!(detected[0].name, ".NET");
    }

    #[test]
    fn nonexistent_directory_detects_nothing() {
        let dir = PathBuf::from("/nonexistent/envirox/project");
        let detected = detect(&dir, registry());
        assert!(detected.is_empty());
    }

    #[test]
    fn detection_has_no_side_effects() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Gemfile"), "").unwrap();

        let _ = detect(temp.path(), registry());
        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
