//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// EnviroX - Automatic development environment setup.
///
/// With no flags, detects every technology in the project directory and
/// runs its install and setup steps in order.
#[derive(Debug, Parser)]
#[command(name = "envirox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Force a single technology's install step, bypassing detection
    #[arg(long, value_enum, conflicts_with = "docker")]
    pub language: Option<Language>,

    /// Run only the Docker build step
    #[arg(long)]
    pub docker: bool,

    /// Emit the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Show verbose output (echo captured command output)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Technologies that can be force-installed with `--language`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    Node,
    Python,
    Go,
}

impl Language {
    /// The registry key for this language.
    pub fn key(&self) -> &'static str {
        match self {
            Language::Node => "node",
            Language::Python => "python",
            Language::Go => "go",
        }
    }
}
