//! Command dispatch.

use crate::cli::args::Cli;
use crate::error::Result;
use crate::runner::{self, RunReport, RunStatus};
use crate::shell::{HostOs, ShellExecutor};
use crate::ui::{EnviroxTheme, Output, OutputMode};

/// Result of dispatching a command.
#[derive(Debug, Clone, Copy)]
pub struct CommandOutcome {
    pub exit_code: i32,
}

/// Execute the invocation described by `cli`.
///
/// Per-technology failures are part of a normal, successful run (exit 0);
/// only errors escaping the runner — unknown technology keys, programming
/// errors — propagate out of here and make the process exit non-zero.
pub fn dispatch(cli: &Cli) -> Result<CommandOutcome> {
    let mode = output_mode(cli);
    let output = Output::new(mode);
    let exec = ShellExecutor::new(mode);
    let os = HostOs::current();

    let dir = cli
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    tracing::debug!(dir = %dir.display(), os = os.name(), "starting run");

    let report = if let Some(language) = cli.language {
        runner::force_install(language.key(), &dir, os, &exec, &output)?
    } else if cli.docker {
        runner::force_setup("docker", &dir, os, &exec, &output)?
    } else {
        runner::setup_environment(&dir, os, &exec, &output)
    };

    if cli.json {
        println!("{}", render_json(&report)?);
    } else {
        print_summary(&report, &output);
    }

    Ok(CommandOutcome { exit_code: 0 })
}

fn output_mode(cli: &Cli) -> OutputMode {
    if cli.json {
        // JSON goes to stdout; suppress all prose so the output stays parseable
        OutputMode::Silent
    } else if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    }
}

fn render_json(report: &RunReport) -> Result<String> {
    let value = serde_json::json!({
        "status": report.status(),
        "succeeded": report.succeeded(),
        "failed": report.failed(),
        "outcomes": report.outcomes,
    });
    serde_json::to_string_pretty(&value)
        .map_err(|e| crate::EnviroxError::Other(anyhow::Error::new(e)))
}

fn print_summary(report: &RunReport, output: &Output) {
    let theme = EnviroxTheme::new();
    match report.status() {
        // the nothing-detected warning was already printed by the runner
        RunStatus::NothingDetected => {}
        RunStatus::Clean => {
            output.println(&theme.format_success("Environment setup completed successfully."));
        }
        RunStatus::Partial => {
            output.println(&theme.format_warning(&format!(
                "Environment setup completed with some failures ({} succeeded, {} failed).",
                report.succeeded(),
                report.failed()
            )));
        }
        RunStatus::AllFailed => {
            output.println(
                &theme.format_error("Environment setup failed for all detected configurations."),
            );
        }
    }
}
