//! The executor seam between setup steps and the host system.
//!
//! Install and setup steps never touch `std::process` directly; they go
//! through [`Executor`] so that tests can substitute a scripted
//! implementation ([`MockExecutor`](super::mock::MockExecutor)) and assert
//! which commands would have run.

use std::path::Path;

use crate::error::{EnviroxError, Result};
use crate::shell::command::{execute, CommandOptions};
use crate::shell::platform;
use crate::ui::{OutputMode, ProgressSpinner};

/// Runs external commands and answers tool-presence queries.
pub trait Executor {
    /// Run `command` through the system shell in `dir`, showing a status
    /// spinner tagged with `description`. Output is captured silently.
    ///
    /// Returns captured stdout on exit code 0; otherwise an error carrying
    /// captured stderr (or a generic message if stderr was empty).
    fn run(&self, dir: &Path, command: &str, description: &str) -> Result<String>;

    /// Whether `name` resolves on the executable search path.
    fn command_exists(&self, name: &str) -> bool;
}

/// Production executor: spawns real processes and renders real spinners.
pub struct ShellExecutor {
    mode: OutputMode,
}

impl ShellExecutor {
    /// Create an executor with the given output mode.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    fn spinner(&self, description: &str) -> ProgressSpinner {
        if self.mode.shows_spinners() && !platform::is_ci() {
            ProgressSpinner::new(description)
        } else {
            ProgressSpinner::hidden()
        }
    }
}

impl Executor for ShellExecutor {
    fn run(&self, dir: &Path, command: &str, description: &str) -> Result<String> {
        tracing::debug!(command, dir = %dir.display(), "executing");

        let spinner = self.spinner(description);
        let options = CommandOptions {
            cwd: Some(dir.to_path_buf()),
            ..Default::default()
        };

        let result = match execute(command, &options) {
            Ok(result) => result,
            Err(e) => {
                spinner.finish_error(&format!("{}: {}", description, e));
                return Err(e);
            }
        };

        if self.mode.shows_command_output() {
            print!("{}", result.stdout);
            eprint!("{}", result.stderr);
        }

        if result.success {
            spinner.finish_success(description);
            Ok(result.stdout)
        } else {
            let detail = result.failure_detail();
            spinner.finish_error(&format!("{}: {}", description, detail));
            tracing::debug!(command, code = ?result.exit_code, "command exited non-zero");
            Err(EnviroxError::CommandFailed {
                command: command.to_string(),
                detail,
            })
        }
    }

    fn command_exists(&self, name: &str) -> bool {
        platform::command_exists(name)
    }
}
