// Line diff library
// This crate computes classified line diffs and renders them as text

mod config;
mod diff_line;
mod document;
mod line_diff;
mod options;
mod render;
mod text_diff;
mod theme;

pub use config::{DiffAlgorithm, DiffConfig};
pub use diff_line::{DiffLine, DiffLineKind, DiffResult, DiffStats};
pub use document::{DiffDocument, DiffSnapshot, Side};
pub use line_diff::{compute_diff, split_lines};
pub use options::{Language, ViewMode, ViewOptions};
pub use render::{patch_text, render, render_header, render_split, render_unified};
pub use text_diff::TextDiff;
pub use theme::DiffTheme;
