//! The technology registry.
//!
//! A fixed, ordered table pairing each technology's detection rule with its
//! install and setup steps. The table order is the deterministic execution
//! order; entries are otherwise independent, and a project may match any
//! number of them (a repo with both `package.json` and a `Dockerfile` is
//! normal). Adding a technology means appending a row, not branching logic.

pub mod steps;

use std::path::Path;

use crate::detect::rules::{any_file_with_extension, DetectionRule};
use crate::error::Result;
use crate::shell::{Executor, HostOs};

/// Everything a step needs: the target directory, the host OS class, and
/// the executor to run commands through.
pub struct StepContext<'a> {
    pub dir: &'a Path,
    pub os: HostOs,
    pub exec: &'a dyn Executor,
}

/// An install or setup action.
pub type StepFn = fn(&StepContext) -> Result<()>;

/// One row of the registry: a technology's detection rule and its actions.
pub struct TechnologyDescriptor {
    /// Short CLI identifier (e.g. "node", "go").
    pub key: &'static str,
    /// Display name (e.g. "Node.js").
    pub name: &'static str,
    /// How this technology is detected in a project directory.
    pub rule: DetectionRule,
    /// Idempotent action ensuring the toolchain is present. No-op when the
    /// tool already resolves on the search path.
    pub install: StepFn,
    /// Action that fetches/builds project dependencies with the native tool.
    pub setup: StepFn,
}

/// The fixed technology table, in execution order.
static REGISTRY: &[TechnologyDescriptor] = &[
    TechnologyDescriptor {
        key: "node",
        name: "Node.js",
        rule: DetectionRule::AnyFile(&["package.json"]),
        install: steps::node_install,
        setup: steps::node_setup,
    },
    TechnologyDescriptor {
        key: "python",
        name: "Python",
        rule: DetectionRule::AnyFile(&["requirements.txt"]),
        install: steps::python_install,
        setup: steps::python_setup,
    },
    TechnologyDescriptor {
        key: "go",
        name: "Go",
        rule: DetectionRule::AnyFile(&["go.mod"]),
        install: steps::go_install,
        setup: steps::go_setup,
    },
    TechnologyDescriptor {
        key: "docker",
        name: "Docker",
        rule: DetectionRule::AnyFile(&["Dockerfile"]),
        install: steps::docker_install,
        setup: steps::docker_setup,
    },
    TechnologyDescriptor {
        key: "rust",
        name: "Rust",
        rule: DetectionRule::AnyFile(&["Cargo.toml"]),
        install: steps::rust_install,
        setup: steps::rust_setup,
    },
    TechnologyDescriptor {
        key: "ruby",
        name: "Ruby",
        rule: DetectionRule::AnyFile(&["Gemfile"]),
        install: steps::ruby_install,
        setup: steps::ruby_setup,
    },
    TechnologyDescriptor {
        key: "maven",
        name: "Java (Maven)",
        rule: DetectionRule::AnyFile(&["pom.xml"]),
        install: steps::maven_install,
        setup: steps::maven_setup,
    },
    TechnologyDescriptor {
        key: "gradle",
        name: "Java (Gradle)",
        rule: DetectionRule::AnyFile(&["build.gradle"]),
        install: steps::gradle_install,
        setup: steps::gradle_setup,
    },
    TechnologyDescriptor {
        key: "php",
        name: "PHP (Composer)",
        rule: DetectionRule::AnyFile(&["composer.json"]),
        install: steps::php_install,
        setup: steps::php_setup,
    },
    TechnologyDescriptor {
        key: "dotnet",
        name: ".NET",
        rule: DetectionRule::Predicate(csproj_present),
        install: steps::dotnet_install,
        setup: steps::dotnet_setup,
    },
];

fn csproj_present(dir: &Path) -> std::io::Result<bool> {
    any_file_with_extension(dir, "csproj")
}

/// The fixed, ordered technology table.
pub fn registry() -> &'static [TechnologyDescriptor] {
    REGISTRY
}

/// Look up a registry entry by its CLI key.
pub fn find(key: &str) -> Option<&'static TechnologyDescriptor> {
    REGISTRY.iter().find(|tech| tech.key == key)
}
