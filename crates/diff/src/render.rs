//! Text rendering of diff results.
//!
//! A `DiffResult` can be rendered as a unified view, where every line is shown
//! in scan order with a `+`/`-`/space marker, or as a split view, where the
//! lines of the old text and the lines of the new text sit in two independent
//! columns. `patch_text` produces the plain export format used for copying or
//! saving a diff.

use std::iter;

use crate::diff_line::{DiffLine, DiffLineKind, DiffResult, DiffStats};
use crate::options::{Language, ViewMode, ViewOptions};
use crate::theme::DiffTheme;

const GUTTER_SEPARATOR: &str = " │ ";
const COLUMN_SEPARATOR: &str = " │ ";

/// A rendered row: either a diff line or a run of hidden unchanged lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row<'a> {
    Line(&'a DiffLine),
    Fold(usize),
}

/// Render the header, a blank line, then the body for the configured mode
pub fn render(result: &DiffResult, options: &ViewOptions) -> String {
    let body = match options.mode {
        ViewMode::Unified => render_unified(result, options),
        ViewMode::Split => render_split(result, options),
    };
    format!("{}\n\n{}", render_header(result, options), body)
}

/// Render the title line and the stats line
pub fn render_header(result: &DiffResult, options: &ViewOptions) -> String {
    let theme = DiffTheme::for_color(options.color);

    let title = if options.language == Language::Text {
        options.title.clone()
    } else {
        format!("{} [{}]", options.title, options.language)
    };

    format!(
        "{}\n{}",
        theme.paint(theme.title, &title),
        render_stats(&result.stats, &theme)
    )
}

fn render_stats(stats: &DiffStats, theme: &DiffTheme) -> String {
    let (added, removed, modified) = stats.labels();
    let mut line = format!(
        "{}  {}",
        theme.paint(theme.added, &added),
        theme.paint(theme.removed, &removed),
    );
    if let Some(modified) = modified {
        line.push_str("  ");
        line.push_str(&theme.paint(theme.modified, &modified));
    }
    line
}

/// Render every line in scan order
pub fn render_unified(result: &DiffResult, options: &ViewOptions) -> String {
    let theme = DiffTheme::for_color(options.color);
    let lines: Vec<&DiffLine> = result.lines.iter().collect();

    fold_rows(&lines, options.context)
        .into_iter()
        .map(|row| {
            let mut out = String::new();
            if options.show_line_numbers {
                let gutter = match row {
                    Row::Line(line) => format!(
                        "{:>4} {:>4}{}",
                        line_number(line.old_line_number),
                        line_number(line.new_line_number),
                        GUTTER_SEPARATOR
                    ),
                    Row::Fold(_) => format!("{:>4} {:>4}{}", "", "", GUTTER_SEPARATOR),
                };
                out.push_str(&theme.paint(theme.muted, &gutter));
            }
            match row {
                Row::Line(line) => {
                    let body = format!("{} {}", line.kind.marker(), line.content);
                    out.push_str(&theme.paint(kind_style(&theme, line.kind), &body));
                }
                Row::Fold(hidden) => {
                    out.push_str(&theme.paint(theme.muted, &fold_label(hidden)));
                }
            }
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the old and new lines side by side.
///
/// The columns are independent: the left lists Removed and Unchanged lines,
/// the right lists Added and Unchanged lines, and rows are zipped without
/// aligning matching lines.
pub fn render_split(result: &DiffResult, options: &ViewOptions) -> String {
    let theme = DiffTheme::for_color(options.color);
    let width = options.column_width;

    let old_side: Vec<&DiffLine> = result.old_side().collect();
    let new_side: Vec<&DiffLine> = result.new_side().collect();
    let old_rows = fold_rows(&old_side, options.context);
    let new_rows = fold_rows(&new_side, options.context);

    let mut out = vec![format!(
        "{}{}{}",
        theme.paint(theme.removed, &fit("Original", width)),
        COLUMN_SEPARATOR,
        theme.paint(theme.added, "Modified")
    )];

    for i in 0..old_rows.len().max(new_rows.len()) {
        let left = match old_rows.get(i) {
            Some(row) => split_cell(row, |l| l.old_line_number, width, true, options, &theme),
            None => fit("", width),
        };
        match new_rows.get(i) {
            Some(row) => {
                let right =
                    split_cell(row, |l| l.new_line_number, width, false, options, &theme);
                out.push(format!("{left}{COLUMN_SEPARATOR}{right}"));
            }
            None => out.push(format!("{left}{}", COLUMN_SEPARATOR.trim_end())),
        }
    }

    out.join("\n")
}

fn split_cell(
    row: &Row<'_>,
    number: impl Fn(&DiffLine) -> Option<usize>,
    width: usize,
    pad: bool,
    options: &ViewOptions,
    theme: &DiffTheme,
) -> String {
    let (text, style) = match row {
        Row::Line(line) => {
            let text = if options.show_line_numbers {
                format!("{:>4} {}", line_number(number(line)), line.content)
            } else {
                line.content.clone()
            };
            (text, kind_style(theme, line.kind))
        }
        Row::Fold(hidden) => {
            let text = if options.show_line_numbers {
                format!("{:>4} {}", "", fold_label(*hidden))
            } else {
                fold_label(*hidden)
            };
            (text, theme.muted)
        }
    };
    let text = if pad {
        fit(&text, width)
    } else {
        truncate(&text, width)
    };
    theme.paint(style, &text)
}

/// Export the diff as `+ `, `- ` or `  ` prefixed lines joined by newlines
pub fn patch_text(result: &DiffResult) -> String {
    result
        .lines
        .iter()
        .map(|line| format!("{} {}", line.kind.marker(), line.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keep `context` unchanged lines next to each change and fold the rest of
/// every unchanged run into a single row
fn fold_rows<'a>(lines: &[&'a DiffLine], context: Option<usize>) -> Vec<Row<'a>> {
    let Some(context) = context else {
        return lines.iter().map(|&line| Row::Line(line)).collect();
    };

    let mut rows = Vec::with_capacity(lines.len());
    let mut i = 0;
    while i < lines.len() {
        if lines[i].is_change() {
            rows.push(Row::Line(lines[i]));
            i += 1;
            continue;
        }

        let start = i;
        while i < lines.len() && !lines[i].is_change() {
            i += 1;
        }
        let run = &lines[start..i];
        let head = if start > 0 { context } else { 0 };
        let tail = if i < lines.len() { context } else { 0 };

        if head + tail >= run.len() {
            rows.extend(run.iter().map(|&line| Row::Line(line)));
        } else {
            rows.extend(run[..head].iter().map(|&line| Row::Line(line)));
            rows.push(Row::Fold(run.len() - head - tail));
            rows.extend(run[run.len() - tail..].iter().map(|&line| Row::Line(line)));
        }
    }
    rows
}

fn fold_label(hidden: usize) -> String {
    if hidden == 1 {
        "⋯ 1 unchanged line".to_string()
    } else {
        format!("⋯ {hidden} unchanged lines")
    }
}

fn kind_style(theme: &DiffTheme, kind: DiffLineKind) -> &'static str {
    match kind {
        DiffLineKind::Added => theme.added,
        DiffLineKind::Removed => theme.removed,
        DiffLineKind::Unchanged => "",
    }
}

fn line_number(number: Option<usize>) -> String {
    number.map(|n| n.to_string()).unwrap_or_default()
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Truncate or pad text to exactly `width` characters
fn fit(text: &str, width: usize) -> String {
    let mut out = truncate(text, width);
    let len = out.chars().count();
    out.extend(iter::repeat(' ').take(width - len));
    out
}
