//! Scripted executor for tests.
//!
//! Records every command a step would run without spawning anything, and
//! answers `command_exists` from a configured tool set. Lives outside
//! `#[cfg(test)]` so unit tests across modules and integration tests can
//! share it.

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::Path;

use crate::error::{EnviroxError, Result};
use crate::shell::exec::Executor;

/// An [`Executor`] that records invocations instead of spawning processes.
#[derive(Debug, Default)]
pub struct MockExecutor {
    tools: HashSet<String>,
    failures: Vec<String>,
    calls: RefCell<Vec<String>>,
}

impl MockExecutor {
    /// Executor with no tools installed and every command succeeding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor where the given tools resolve on the search path.
    pub fn with_tools(tools: &[&str]) -> Self {
        Self {
            tools: tools.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Mark a tool as resolvable.
    pub fn add_tool(&mut self, tool: &str) {
        self.tools.insert(tool.to_string());
    }

    /// Make any command containing `needle` fail with exit status 1.
    pub fn fail_matching(&mut self, needle: &str) {
        self.failures.push(needle.to_string());
    }

    /// The commands that were run, in order.
    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Number of commands run so far.
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Executor for MockExecutor {
    fn run(&self, _dir: &Path, command: &str, _description: &str) -> Result<String> {
        self.calls.borrow_mut().push(command.to_string());
        if self.failures.iter().any(|f| command.contains(f)) {
            Err(EnviroxError::CommandFailed {
                command: command.to_string(),
                detail: "exit status 1".to_string(),
            })
        } else {
            Ok(String::new())
        }
    }

    fn command_exists(&self, name: &str) -> bool {
        self.tools.contains(name)
    }
}
