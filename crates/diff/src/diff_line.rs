use derive_more::Display;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a single line in a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiffLineKind {
    /// The line only exists in the new text
    #[display(fmt = "Added")]
    Added,

    /// The line only exists in the old text
    #[display(fmt = "Removed")]
    Removed,

    /// The line exists in both texts
    #[display(fmt = "Unchanged")]
    Unchanged,
}

impl DiffLineKind {
    /// The marker shown in front of the line in a unified view
    pub fn marker(&self) -> char {
        match self {
            DiffLineKind::Added => '+',
            DiffLineKind::Removed => '-',
            DiffLineKind::Unchanged => ' ',
        }
    }
}

/// One classified line of a diff
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffLine {
    /// How the line relates the two texts
    pub kind: DiffLineKind,

    /// 1-based line number in the old text (Removed or Unchanged only)
    pub old_line_number: Option<usize>,

    /// 1-based line number in the new text (Added or Unchanged only)
    pub new_line_number: Option<usize>,

    /// The raw line text, without its newline
    pub content: String,
}

impl DiffLine {
    /// A line that only exists in the new text
    pub fn added(new_line_number: usize, content: impl Into<String>) -> Self {
        Self {
            kind: DiffLineKind::Added,
            old_line_number: None,
            new_line_number: Some(new_line_number),
            content: content.into(),
        }
    }

    /// A line that only exists in the old text
    pub fn removed(old_line_number: usize, content: impl Into<String>) -> Self {
        Self {
            kind: DiffLineKind::Removed,
            old_line_number: Some(old_line_number),
            new_line_number: None,
            content: content.into(),
        }
    }

    /// A line present in both texts
    pub fn unchanged(
        old_line_number: usize,
        new_line_number: usize,
        content: impl Into<String>,
    ) -> Self {
        Self {
            kind: DiffLineKind::Unchanged,
            old_line_number: Some(old_line_number),
            new_line_number: Some(new_line_number),
            content: content.into(),
        }
    }

    /// Whether this line belongs to the old text
    pub fn in_old(&self) -> bool {
        self.old_line_number.is_some()
    }

    /// Whether this line belongs to the new text
    pub fn in_new(&self) -> bool {
        self.new_line_number.is_some()
    }

    /// Whether this line is an addition or a removal
    pub fn is_change(&self) -> bool {
        self.kind != DiffLineKind::Unchanged
    }
}

/// Summary counts for a diff.
///
/// Added and removed lines are reconciled globally: every removal that can be
/// paired with an addition counts as one modification, and only the excess on
/// either side is reported as added or removed. Specific lines are never
/// paired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffStats {
    /// Additions left over after pairing
    pub added: usize,

    /// Removals left over after pairing
    pub removed: usize,

    /// Number of paired additions and removals
    pub modified: usize,
}

impl DiffStats {
    /// Reconcile raw added/removed counts into stats
    pub fn from_counts(raw_added: usize, raw_removed: usize) -> Self {
        let modified = raw_added.min(raw_removed);
        Self {
            added: raw_added - modified,
            removed: raw_removed - modified,
            modified,
        }
    }

    /// Derive stats from a sequence of diff lines
    pub fn from_lines(lines: &[DiffLine]) -> Self {
        let raw_added = lines
            .iter()
            .filter(|l| l.kind == DiffLineKind::Added)
            .count();
        let raw_removed = lines
            .iter()
            .filter(|l| l.kind == DiffLineKind::Removed)
            .count();
        Self::from_counts(raw_added, raw_removed)
    }

    /// Whether every count is zero
    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.modified == 0
    }

    /// The `+N additions`, `-N deletions` and, when there are any,
    /// `N modifications` segments of the stats line
    pub fn labels(&self) -> (String, String, Option<String>) {
        let modified = (self.modified > 0).then(|| format!("{} modifications", self.modified));
        (
            format!("+{} additions", self.added),
            format!("-{} deletions", self.removed),
            modified,
        )
    }
}

impl fmt::Display for DiffStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (added, removed, modified) = self.labels();
        write!(f, "{added}  {removed}")?;
        if let Some(modified) = modified {
            write!(f, "  {modified}")?;
        }
        Ok(())
    }
}

/// The classified lines of a diff together with its stats
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffResult {
    /// Lines in scan order
    pub lines: Vec<DiffLine>,

    /// Summary counts derived from `lines`
    pub stats: DiffStats,
}

impl DiffResult {
    /// Build a result from lines, deriving the stats
    pub fn from_lines(lines: Vec<DiffLine>) -> Self {
        let stats = DiffStats::from_lines(&lines);
        Self { lines, stats }
    }

    /// Get the lines
    pub fn lines(&self) -> &[DiffLine] {
        &self.lines
    }

    /// Get the number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if there are no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of Added lines before pairing
    pub fn raw_added(&self) -> usize {
        self.count(DiffLineKind::Added)
    }

    /// Number of Removed lines before pairing
    pub fn raw_removed(&self) -> usize {
        self.count(DiffLineKind::Removed)
    }

    /// Number of Unchanged lines
    pub fn unchanged(&self) -> usize {
        self.count(DiffLineKind::Unchanged)
    }

    /// Check if the diff has any changes
    pub fn has_changes(&self) -> bool {
        self.lines.iter().any(DiffLine::is_change)
    }

    /// Lines attributed to the old text, in order
    pub fn old_side(&self) -> impl Iterator<Item = &DiffLine> + '_ {
        self.lines.iter().filter(|l| l.in_old())
    }

    /// Lines attributed to the new text, in order
    pub fn new_side(&self) -> impl Iterator<Item = &DiffLine> + '_ {
        self.lines.iter().filter(|l| l.in_new())
    }

    /// Number of lines in the old text
    pub fn old_line_count(&self) -> usize {
        self.old_side().count()
    }

    /// Number of lines in the new text
    pub fn new_line_count(&self) -> usize {
        self.new_side().count()
    }

    fn count(&self, kind: DiffLineKind) -> usize {
        self.lines.iter().filter(|l| l.kind == kind).count()
    }
}
