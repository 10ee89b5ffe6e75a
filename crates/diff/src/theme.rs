//! Theme definitions for diff display
//!
//! Colors are ANSI escape sequences so rendered diffs can be printed straight
//! to a terminal. The plain theme has empty styles and renders text untouched.

/// Colors for diff display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTheme {
    /// Style for added lines (green)
    pub added: &'static str,

    /// Style for removed lines (red)
    pub removed: &'static str,

    /// Style for the modification count (yellow)
    pub modified: &'static str,

    /// Style for less important elements such as gutters and folds
    pub muted: &'static str,

    /// Style for the header title
    pub title: &'static str,

    /// Sequence that ends a styled span
    pub reset: &'static str,
}

impl DiffTheme {
    /// Create the ANSI color theme
    pub fn ansi() -> Self {
        Self {
            added: "\x1b[32m",
            removed: "\x1b[31m",
            modified: "\x1b[33m",
            muted: "\x1b[2m",
            title: "\x1b[1m",
            reset: "\x1b[0m",
        }
    }

    /// Create a theme without any styling
    pub fn plain() -> Self {
        Self {
            added: "",
            removed: "",
            modified: "",
            muted: "",
            title: "",
            reset: "",
        }
    }

    /// Pick the theme for the given color setting
    pub fn for_color(color: bool) -> Self {
        if color {
            Self::ansi()
        } else {
            Self::plain()
        }
    }

    /// Wrap text in a style
    pub fn paint(&self, style: &str, text: &str) -> String {
        if style.is_empty() {
            text.to_string()
        } else {
            format!("{style}{text}{}", self.reset)
        }
    }
}

impl Default for DiffTheme {
    fn default() -> Self {
        Self::plain()
    }
}
