use anyhow::{bail, Result};
use derive_more::Display;
use log::debug;
use similar::{capture_diff_slices, Algorithm, DiffTag};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diff_line::{DiffLine, DiffResult};
use crate::line_diff::{compute_diff, split_lines};

/// The algorithm used to line up the two texts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiffAlgorithm {
    /// Single forward pass with one line of lookahead
    #[default]
    #[display(fmt = "greedy")]
    Greedy,

    /// Myers' O(ND) algorithm
    #[display(fmt = "myers")]
    Myers,

    /// Patience diff
    #[display(fmt = "patience")]
    Patience,
}

impl FromStr for DiffAlgorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "greedy" => Ok(DiffAlgorithm::Greedy),
            "myers" => Ok(DiffAlgorithm::Myers),
            "patience" => Ok(DiffAlgorithm::Patience),
            other => bail!("unknown diff algorithm: {other}"),
        }
    }
}

/// Configuration for computing a diff
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffConfig {
    /// The algorithm to use
    pub algorithm: DiffAlgorithm,
}

impl DiffConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the algorithm
    pub fn algorithm(mut self, algorithm: DiffAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Diff two texts with this configuration
    pub fn diff(&self, old_text: &str, new_text: &str) -> DiffResult {
        match self.algorithm {
            DiffAlgorithm::Greedy => compute_diff(old_text, new_text),
            DiffAlgorithm::Myers => similar_diff(Algorithm::Myers, old_text, new_text),
            DiffAlgorithm::Patience => similar_diff(Algorithm::Patience, old_text, new_text),
        }
    }
}

/// Run one of the `similar` algorithms over the same line split as the greedy
/// diff and flatten its ops into diff lines. Replacements list all removed
/// lines before the added ones.
fn similar_diff(algorithm: Algorithm, old_text: &str, new_text: &str) -> DiffResult {
    let old_lines = split_lines(old_text);
    let new_lines = split_lines(new_text);

    let ops = capture_diff_slices(algorithm, &old_lines, &new_lines);
    let mut lines = Vec::with_capacity(old_lines.len().max(new_lines.len()));

    for op in &ops {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                for (old_idx, new_idx) in old_range.zip(new_range) {
                    lines.push(DiffLine::unchanged(
                        old_idx + 1,
                        new_idx + 1,
                        old_lines[old_idx],
                    ));
                }
            }
            DiffTag::Delete => {
                for old_idx in old_range {
                    lines.push(DiffLine::removed(old_idx + 1, old_lines[old_idx]));
                }
            }
            DiffTag::Insert => {
                for new_idx in new_range {
                    lines.push(DiffLine::added(new_idx + 1, new_lines[new_idx]));
                }
            }
            DiffTag::Replace => {
                for old_idx in old_range {
                    lines.push(DiffLine::removed(old_idx + 1, old_lines[old_idx]));
                }
                for new_idx in new_range {
                    lines.push(DiffLine::added(new_idx + 1, new_lines[new_idx]));
                }
            }
        }
    }

    let result = DiffResult::from_lines(lines);
    debug!(
        "{:?} diff produced {} ops: {:?}",
        algorithm,
        ops.len(),
        result.stats
    );
    result
}
