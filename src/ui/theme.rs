//! Visual theme and styling.

use console::Style;

/// Colors for front-desk output.
#[derive(Debug, Clone)]
pub struct GuidanceTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
}

impl Default for GuidanceTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl GuidanceTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = GuidanceTheme::plain().format_success("Checked in 123");
        assert_eq!(msg, "✓ Checked in 123");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = GuidanceTheme::plain().format_warning("No open session");
        assert_eq!(msg, "⚠ No open session");
    }

    #[test]
    fn theme_formats_error() {
        let msg = GuidanceTheme::plain().format_error("Failed");
        assert_eq!(msg, "✗ Failed");
    }

    #[test]
    fn theme_formats_header() {
        let msg = GuidanceTheme::plain().format_header("Guidance Session Tracker");
        assert_eq!(msg, "Guidance Session Tracker");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = GuidanceTheme::default();
        let new = GuidanceTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
