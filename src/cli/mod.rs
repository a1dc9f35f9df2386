//! Command-line interface for EnviroX.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command dispatch

pub mod args;
pub mod commands;

pub use args::{Cli, Language};
pub use commands::{dispatch, CommandOutcome};
