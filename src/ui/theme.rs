//! Visual theme and styling.

use console::Style;

/// EnviroX's visual theme.
#[derive(Debug, Clone)]
pub struct EnviroxTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational/running elements (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
}

impl Default for EnviroxTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl EnviroxTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format an informational message (icon + text in cyan).
    pub fn format_info(&self, msg: &str) -> String {
        format!("{}", self.info.apply_to(format!("ℹ {}", msg)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_success_includes_icon_and_message() {
        let theme = EnviroxTheme::plain();
        assert_eq!(theme.format_success("done"), "✓ done");
    }

    #[test]
    fn format_error_includes_icon_and_message() {
        let theme = EnviroxTheme::plain();
        assert_eq!(theme.format_error("failed"), "✗ failed");
    }

    #[test]
    fn format_warning_includes_icon_and_message() {
        let theme = EnviroxTheme::plain();
        assert_eq!(theme.format_warning("careful"), "⚠ careful");
    }

    #[test]
    fn format_info_includes_icon_and_message() {
        let theme = EnviroxTheme::plain();
        assert_eq!(theme.format_info("detected"), "ℹ detected");
    }

    #[test]
    fn default_theme_matches_new() {
        // Both construct styled variants; just ensure no panic
        let _ = EnviroxTheme::default();
        let _ = EnviroxTheme::new();
    }
}
