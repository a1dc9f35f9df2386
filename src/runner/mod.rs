//! Sequential setup orchestration.
//!
//! Technologies are processed one at a time, in registry order: install
//! step, then setup step, each awaited to completion before the next entry
//! starts. Install scripts may mutate shared host state (global toolchains,
//! package-manager locks), so nothing runs concurrently. A technology's
//! failure is recorded and the run continues with the remaining entries.

pub mod report;

pub use report::{RunReport, RunStatus, SetupOutcome, TechnologyOutcome};

use std::path::Path;

use crate::detect::detect;
use crate::error::{EnviroxError, Result};
use crate::registry::{registry, StepContext, TechnologyDescriptor};
use crate::shell::{Executor, HostOs};
use crate::ui::{EnviroxTheme, Output};

/// Detect technologies in `dir` and run install + setup for each match.
///
/// An empty detection result is a successful run with a
/// [`RunStatus::NothingDetected`] report, not an error.
pub fn setup_environment(
    dir: &Path,
    os: HostOs,
    exec: &dyn Executor,
    output: &Output,
) -> RunReport {
    let theme = EnviroxTheme::new();
    let detected = detect(dir, registry());

    if detected.is_empty() {
        output.println(&theme.format_warning(
            "No known configuration files detected. Nothing to set up.",
        ));
        return RunReport::default();
    }

    let mut report = RunReport::default();
    for tech in detected {
        output.println(&theme.format_info(&format!("Detected {} project...", tech.name)));
        let outcome = run_technology(tech, dir, os, exec);
        print_outcome(tech, &outcome, output, &theme);
        report.record(tech.name, outcome);
    }
    report
}

/// Run a single technology's install step then setup step.
///
/// An install failure short-circuits that technology's setup step; the
/// caller decides what happens to the rest of the run.
fn run_technology(
    tech: &TechnologyDescriptor,
    dir: &Path,
    os: HostOs,
    exec: &dyn Executor,
) -> SetupOutcome {
    let ctx = StepContext { dir, os, exec };

    if let Err(e) = (tech.install)(&ctx) {
        tracing::warn!(technology = tech.name, error = %e, "install step failed");
        return SetupOutcome::InstallFailed(e.to_string());
    }
    if let Err(e) = (tech.setup)(&ctx) {
        tracing::warn!(technology = tech.name, error = %e, "setup step failed");
        return SetupOutcome::SetupFailed(e.to_string());
    }
    SetupOutcome::Succeeded
}

/// Run only the install step of the technology with the given key,
/// bypassing detection (`--language`).
pub fn force_install(
    key: &str,
    dir: &Path,
    os: HostOs,
    exec: &dyn Executor,
    output: &Output,
) -> Result<RunReport> {
    let tech = lookup(key)?;
    let theme = EnviroxTheme::new();
    let ctx = StepContext { dir, os, exec };

    let outcome = match (tech.install)(&ctx) {
        Ok(()) => SetupOutcome::Succeeded,
        Err(e) => {
            tracing::warn!(technology = tech.name, error = %e, "install step failed");
            SetupOutcome::InstallFailed(e.to_string())
        }
    };
    print_outcome(tech, &outcome, output, &theme);

    let mut report = RunReport::default();
    report.record(tech.name, outcome);
    Ok(report)
}

/// Run only the setup step of the technology with the given key,
/// bypassing detection and install (`--docker`).
pub fn force_setup(
    key: &str,
    dir: &Path,
    os: HostOs,
    exec: &dyn Executor,
    output: &Output,
) -> Result<RunReport> {
    let tech = lookup(key)?;
    let theme = EnviroxTheme::new();
    let ctx = StepContext { dir, os, exec };

    let outcome = match (tech.setup)(&ctx) {
        Ok(()) => SetupOutcome::Succeeded,
        Err(e) => {
            tracing::warn!(technology = tech.name, error = %e, "setup step failed");
            SetupOutcome::SetupFailed(e.to_string())
        }
    };
    print_outcome(tech, &outcome, output, &theme);

    let mut report = RunReport::default();
    report.record(tech.name, outcome);
    Ok(report)
}

fn lookup(key: &str) -> Result<&'static TechnologyDescriptor> {
    crate::registry::find(key).ok_or_else(|| EnviroxError::UnknownTechnology {
        key: key.to_string(),
    })
}

fn print_outcome(
    tech: &TechnologyDescriptor,
    outcome: &SetupOutcome,
    output: &Output,
    theme: &EnviroxTheme,
) {
    match outcome {
        SetupOutcome::Succeeded => output.println(&theme.format_success(&format!(
            "{} environment set up successfully.",
            tech.name
        ))),
        SetupOutcome::InstallFailed(reason) => output.println(
            &theme.format_error(&format!("{} install failed: {}", tech.name, reason)),
        ),
        SetupOutcome::SetupFailed(reason) => output.println(
            &theme.format_error(&format!("{} setup failed: {}", tech.name, reason)),
        ),
    }
}
