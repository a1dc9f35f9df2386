//! Error types for EnviroX operations.
//!
//! This module defines [`EnviroxError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Per-technology failures (a command exiting non-zero, a tool that must be
//!   installed by hand) are caught at the technology boundary by the runner
//!   and converted into report entries — they never abort the run.
//! - Use `anyhow::Error` (via `EnviroxError::Other`) for unexpected errors.
//! - All errors should provide actionable messages for users.

use thiserror::Error;

/// Core error type for EnviroX operations.
#[derive(Debug, Error)]
pub enum EnviroxError {
    /// Shell command exited non-zero or could not be spawned.
    #[error("Command failed: {detail}")]
    CommandFailed { command: String, detail: String },

    /// A tool has no automatic install path on this platform.
    #[error("{tool} must be installed manually: {url}")]
    ManualInstallRequired { tool: String, url: String },

    /// A required tool is missing and there is nothing we can run without it.
    #[error("{tool} not found. {hint}")]
    ToolMissing { tool: String, hint: String },

    /// The host platform is not supported for this technology's install step.
    #[error("Unsupported platform for {technology} installation")]
    UnsupportedPlatform { technology: String },

    /// `--language` / `--docker` referenced a technology that is not in the registry.
    #[error("Unknown technology: {key}")]
    UnknownTechnology { key: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for EnviroX operations.
pub type Result<T> = std::result::Result<T, EnviroxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_displays_detail() {
        let err = EnviroxError::CommandFailed {
            command: "npm install".into(),
            detail: "ENOENT: no such file".into(),
        };
        assert!(err.to_string().contains("ENOENT"));
    }

    #[test]
    fn manual_install_displays_tool_and_url() {
        let err = EnviroxError::ManualInstallRequired {
            tool: "Node.js".into(),
            url: "https://nodejs.org/en/download/".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Node.js"));
        assert!(msg.contains("https://nodejs.org"));
    }

    #[test]
    fn tool_missing_displays_hint() {
        let err = EnviroxError::ToolMissing {
            tool: "pip".into(),
            hint: "Please install pip.".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("pip not found"));
        assert!(msg.contains("Please install pip."));
    }

    #[test]
    fn unsupported_platform_displays_technology() {
        let err = EnviroxError::UnsupportedPlatform {
            technology: "Ruby".into(),
        };
        assert!(err.to_string().contains("Ruby"));
    }

    #[test]
    fn unknown_technology_displays_key() {
        let err = EnviroxError::UnknownTechnology {
            key: "cobol".into(),
        };
        assert!(err.to_string().contains("cobol"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: EnviroxError = io_err.into();
        assert!(matches!(err, EnviroxError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(EnviroxError::UnknownTechnology { key: "test".into() })
        }
        assert!(returns_error().is_err());
    }
}
