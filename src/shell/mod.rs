//! Shell command execution and platform probing.

pub mod command;
pub mod exec;
pub mod mock;
pub mod platform;

pub use command::{execute, CommandOptions, CommandResult};
pub use exec::{Executor, ShellExecutor};
pub use mock::MockExecutor;
pub use platform::{command_exists, is_ci, is_elevated, HostOs};
