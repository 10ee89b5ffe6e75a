use log::{debug, trace};

use crate::diff_line::{DiffLine, DiffResult};

/// Split text into lines on `\n`.
///
/// A trailing newline yields a final empty line and the empty string yields a
/// single empty line. `\r` is kept as part of the line content.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Compute a greedy line diff between two texts.
///
/// Both texts are scanned forward once. When the current lines differ, the
/// scan looks a single line ahead on each side to spot a pure removal or a
/// pure insertion; otherwise the pair is reported as a removal followed by an
/// addition. Earlier decisions are never revisited, so the output is not a
/// minimal diff when several changed lines are interleaved.
pub fn compute_diff(old_text: &str, new_text: &str) -> DiffResult {
    let old_lines = split_lines(old_text);
    let new_lines = split_lines(new_text);

    let mut lines = Vec::with_capacity(old_lines.len().max(new_lines.len()));
    let mut old_index = 0;
    let mut new_index = 0;

    while old_index < old_lines.len() || new_index < new_lines.len() {
        if old_index >= old_lines.len() {
            lines.push(DiffLine::added(new_index + 1, new_lines[new_index]));
            new_index += 1;
            continue;
        }

        if new_index >= new_lines.len() {
            lines.push(DiffLine::removed(old_index + 1, old_lines[old_index]));
            old_index += 1;
            continue;
        }

        let old_line = old_lines[old_index];
        let new_line = new_lines[new_index];

        if old_line == new_line {
            lines.push(DiffLine::unchanged(old_index + 1, new_index + 1, old_line));
            old_index += 1;
            new_index += 1;
        } else if old_lines.get(old_index + 1) == Some(&new_line) {
            trace!("old line {} removed before a match", old_index + 1);
            lines.push(DiffLine::removed(old_index + 1, old_line));
            old_index += 1;
        } else if new_lines.get(new_index + 1) == Some(&old_line) {
            trace!("new line {} inserted before a match", new_index + 1);
            lines.push(DiffLine::added(new_index + 1, new_line));
            new_index += 1;
        } else {
            trace!(
                "old line {} replaced by new line {}",
                old_index + 1,
                new_index + 1
            );
            lines.push(DiffLine::removed(old_index + 1, old_line));
            lines.push(DiffLine::added(new_index + 1, new_line));
            old_index += 1;
            new_index += 1;
        }
    }

    let result = DiffResult::from_lines(lines);
    debug!(
        "greedy diff of {} old / {} new lines: {:?}",
        old_lines.len(),
        new_lines.len(),
        result.stats
    );
    result
}
