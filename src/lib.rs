//! EnviroX - Automatic development environment setup.
//!
//! EnviroX is a CLI tool that inspects a project directory, detects which
//! language ecosystems it uses via marker files (`package.json`, `go.mod`,
//! `Cargo.toml`, ...), and runs each ecosystem's native install and setup
//! commands, reporting per-technology outcomes.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detect`] - Marker-file detection against a target directory
//! - [`error`] - Error types and result aliases
//! - [`registry`] - The ordered technology table and its install/setup steps
//! - [`runner`] - Sequential setup orchestration and outcome reporting
//! - [`shell`] - Shell command execution and platform probing
//! - [`ui`] - Spinners, theming, and terminal output
//!
//! # Example
//!
//! ```
//! use envirox::registry;
//!
//! // The registry is a fixed, ordered table; Node.js is the first entry.
//! let table = registry::registry();
//! assert_eq!(table[0].name, "Node.js");
//! assert!(registry::find("go").is_some());
//! ```

pub mod cli;
pub mod detect;
pub mod error;
pub mod registry;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{EnviroxError, Result};
