//! Diff Text View - renders a diff document for the terminal
//!
//! The view owns the document being displayed and the options used to draw
//! it, and knows how to export the diff as patch text or JSON.

use anyhow::{Context, Result};
use line_diff::{patch_text, render, render_header, DiffDocument, ViewOptions};
use log::info;
use std::fs;
use std::path::Path;

/// What the view prints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Header and the unified or split body
    #[default]
    Text,
    /// Header only
    Stats,
    /// The diff result serialized as JSON
    Json,
}

/// A diff document together with how to display it
pub struct DiffTextView {
    document: DiffDocument,
    options: ViewOptions,
    format: OutputFormat,
}

impl DiffTextView {
    pub fn new(document: DiffDocument, options: ViewOptions, format: OutputFormat) -> Self {
        Self {
            document,
            options,
            format,
        }
    }

    /// Get the displayed document
    pub fn document(&self) -> &DiffDocument {
        &self.document
    }

    /// Render the view in its output format
    pub fn render(&self) -> Result<String> {
        let result = self.document.result();
        match self.format {
            OutputFormat::Text => Ok(render(result, &self.options)),
            OutputFormat::Stats => Ok(render_header(result, &self.options)),
            OutputFormat::Json => {
                serde_json::to_string_pretty(result).context("Failed to serialize diff")
            }
        }
    }

    /// Write the patch text of the diff to a file
    pub fn write_patch(&self, path: &Path) -> Result<()> {
        let patch = patch_text(self.document.result());
        fs::write(path, patch)
            .with_context(|| format!("Failed to write patch to {}", path.display()))?;
        info!("Wrote patch to {}", path.display());
        Ok(())
    }
}
