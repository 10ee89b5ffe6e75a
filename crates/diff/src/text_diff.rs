use crate::config::DiffConfig;
use crate::diff_line::DiffResult;
use crate::line_diff::compute_diff;
use crate::render::patch_text;

/// Wrapper around text diff operations
pub struct TextDiff;

impl TextDiff {
    /// Create a greedy line diff between two texts
    pub fn diff(old_text: &str, new_text: &str) -> DiffResult {
        compute_diff(old_text, new_text)
    }

    /// Generate the `+`/`-`/space prefixed patch text of the greedy diff
    pub fn unified_diff(old_text: &str, new_text: &str) -> String {
        patch_text(&compute_diff(old_text, new_text))
    }

    /// Start building a diff configuration
    pub fn configure() -> DiffConfig {
        DiffConfig::default()
    }
}
