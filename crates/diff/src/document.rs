use anyhow::{Context, Result};
use log::debug;
use ropey::Rope;
use std::fs;
use std::ops::Range;
use std::path::Path;

use crate::config::DiffConfig;
use crate::diff_line::DiffResult;

/// Which text of a document an edit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

/// A pair of texts whose diff is kept up to date as either text changes
#[derive(Debug, Clone)]
pub struct DiffDocument {
    /// The old version of the text
    old_text: Rope,

    /// The new version of the text
    new_text: Rope,

    /// How the diff is computed
    config: DiffConfig,

    /// The diff of the current texts
    result: DiffResult,

    /// Incremented every time the diff is recomputed
    revision: u64,
}

/// An immutable snapshot of a diff document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSnapshot {
    /// The diff at the time of the snapshot
    pub result: DiffResult,

    /// The number of lines in the old text
    pub old_line_count: usize,

    /// The number of lines in the new text
    pub new_line_count: usize,

    /// The document revision the snapshot was taken at
    pub revision: u64,
}

impl DiffDocument {
    /// Create a new document with the default configuration
    pub fn new(old_text: &str, new_text: &str) -> Self {
        Self::with_config(old_text, new_text, DiffConfig::default())
    }

    /// Create a new document with the given configuration
    pub fn with_config(old_text: &str, new_text: &str, config: DiffConfig) -> Self {
        let mut document = Self {
            old_text: Rope::from_str(old_text),
            new_text: Rope::from_str(new_text),
            config,
            result: DiffResult::default(),
            revision: 0,
        };
        document.recompute();
        document
    }

    /// Load both texts from files
    pub fn from_paths(old_path: impl AsRef<Path>, new_path: impl AsRef<Path>) -> Result<Self> {
        Self::from_paths_with_config(old_path, new_path, DiffConfig::default())
    }

    /// Load both texts from files and diff them with the given configuration
    pub fn from_paths_with_config(
        old_path: impl AsRef<Path>,
        new_path: impl AsRef<Path>,
        config: DiffConfig,
    ) -> Result<Self> {
        let old_path = old_path.as_ref();
        let new_path = new_path.as_ref();
        let old_text = fs::read_to_string(old_path)
            .with_context(|| format!("Failed to read {}", old_path.display()))?;
        let new_text = fs::read_to_string(new_path)
            .with_context(|| format!("Failed to read {}", new_path.display()))?;
        Ok(Self::with_config(&old_text, &new_text, config))
    }

    /// Replace the diff configuration and recompute
    pub fn set_config(&mut self, config: DiffConfig) {
        self.config = config;
        self.recompute();
    }

    /// Replace the old text and recompute
    pub fn set_old_text(&mut self, text: &str) {
        self.old_text = Rope::from_str(text);
        self.recompute();
    }

    /// Replace the new text and recompute
    pub fn set_new_text(&mut self, text: &str) {
        self.new_text = Rope::from_str(text);
        self.recompute();
    }

    /// Insert text at a char index of one side and recompute
    pub fn insert(&mut self, side: Side, char_idx: usize, text: &str) -> Result<()> {
        self.rope_mut(side)
            .try_insert(char_idx, text)
            .with_context(|| format!("Failed to insert into {side:?} text at char {char_idx}"))?;
        self.recompute();
        Ok(())
    }

    /// Remove a char range from one side and recompute
    pub fn remove(&mut self, side: Side, char_range: Range<usize>) -> Result<()> {
        self.rope_mut(side)
            .try_remove(char_range.clone())
            .with_context(|| format!("Failed to remove {char_range:?} from {side:?} text"))?;
        self.recompute();
        Ok(())
    }

    /// Get the diff of the current texts
    pub fn result(&self) -> &DiffResult {
        &self.result
    }

    /// Get the old text
    pub fn old_text(&self) -> &Rope {
        &self.old_text
    }

    /// Get the new text
    pub fn new_text(&self) -> &Rope {
        &self.new_text
    }

    /// Get the diff configuration
    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Get the current revision
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Get a snapshot of the current diff
    pub fn snapshot(&self) -> DiffSnapshot {
        DiffSnapshot {
            result: self.result.clone(),
            old_line_count: self.result.old_line_count(),
            new_line_count: self.result.new_line_count(),
            revision: self.revision,
        }
    }

    fn rope_mut(&mut self, side: Side) -> &mut Rope {
        match side {
            Side::Old => &mut self.old_text,
            Side::New => &mut self.new_text,
        }
    }

    fn recompute(&mut self) {
        let old_text = self.old_text.to_string();
        let new_text = self.new_text.to_string();
        self.result = self.config.diff(&old_text, &new_text);
        self.revision += 1;
        debug!(
            "recomputed diff at revision {} ({} lines)",
            self.revision,
            self.result.len()
        );
    }
}
