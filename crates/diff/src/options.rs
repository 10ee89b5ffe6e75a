//! Display options for rendered diffs.
//!
//! This module provides the `ViewOptions` struct which controls how a
//! `DiffResult` is turned into text: unified or split layout, line number
//! gutters, folding of unchanged lines and terminal colors.

use anyhow::{bail, Result};
use derive_more::Display;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Layout of a rendered diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ViewMode {
    /// All lines in scan order, each with a +/-/space marker
    #[default]
    #[display(fmt = "unified")]
    Unified,

    /// Old and new lines in two columns
    #[display(fmt = "split")]
    Split,
}

impl FromStr for ViewMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "unified" => Ok(ViewMode::Unified),
            "split" => Ok(ViewMode::Split),
            other => bail!("unknown view mode: {other}"),
        }
    }
}

/// Language of the diffed content.
///
/// Only used as a label; it has no effect on how lines are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    #[display(fmt = "json")]
    Json,

    #[display(fmt = "sql")]
    Sql,

    #[default]
    #[display(fmt = "text")]
    Text,

    #[display(fmt = "javascript")]
    JavaScript,
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Language::Json),
            "sql" => Ok(Language::Sql),
            "text" | "txt" => Ok(Language::Text),
            "javascript" | "js" => Ok(Language::JavaScript),
            other => bail!("unknown language: {other}"),
        }
    }
}

/// Options controlling how a diff is rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewOptions {
    /// Unified or split layout.
    pub mode: ViewMode,

    /// Whether to show line number gutters.
    pub show_line_numbers: bool,

    /// Language label shown in the header.
    pub language: Language,

    /// Title shown in the header.
    pub title: String,

    /// Number of unchanged lines kept next to each change.
    /// `None` shows every line.
    pub context: Option<usize>,

    /// Width in characters of each column in split view.
    pub column_width: usize,

    /// Whether to emit ANSI color escapes.
    pub color: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            mode: ViewMode::default(),
            show_line_numbers: true,
            language: Language::default(),
            title: "Diff Viewer".to_string(),
            context: None,
            column_width: 60,
            color: false,
        }
    }
}

impl ViewOptions {
    /// Create new view options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout.
    pub fn mode(mut self, mode: ViewMode) -> Self {
        self.mode = mode;
        self
    }

    /// Show or hide line numbers.
    pub fn show_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    /// Set the language label.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Fold unchanged lines, keeping `lines` of context around changes.
    pub fn context(mut self, lines: usize) -> Self {
        self.context = Some(lines);
        self
    }

    /// Set the split view column width.
    pub fn column_width(mut self, width: usize) -> Self {
        self.column_width = width;
        self
    }

    /// Enable or disable colors.
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
