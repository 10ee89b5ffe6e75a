//! Property tests for the invariants every diff result upholds.

use line_diff::{compute_diff, split_lines, DiffAlgorithm, DiffConfig, DiffLineKind, DiffResult};
use proptest::prelude::*;

/// Texts built from a tiny alphabet so that lines collide often
fn text() -> impl Strategy<Value = String> {
    prop::collection::vec("[abc]{0,2}", 0..8).prop_map(|lines| lines.join("\n"))
}

fn algorithm() -> impl Strategy<Value = DiffAlgorithm> {
    prop_oneof![
        Just(DiffAlgorithm::Greedy),
        Just(DiffAlgorithm::Myers),
        Just(DiffAlgorithm::Patience),
    ]
}

fn check_attribution(result: &DiffResult, old: &str, new: &str) -> Result<(), TestCaseError> {
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);

    let old_numbers: Vec<usize> = result.old_side().filter_map(|l| l.old_line_number).collect();
    let new_numbers: Vec<usize> = result.new_side().filter_map(|l| l.new_line_number).collect();
    prop_assert_eq!(old_numbers, (1..=old_lines.len()).collect::<Vec<_>>());
    prop_assert_eq!(new_numbers, (1..=new_lines.len()).collect::<Vec<_>>());

    let old_content: Vec<&str> = result.old_side().map(|l| l.content.as_str()).collect();
    let new_content: Vec<&str> = result.new_side().map(|l| l.content.as_str()).collect();
    prop_assert_eq!(old_content, old_lines.clone());
    prop_assert_eq!(new_content, new_lines.clone());

    for line in &result.lines {
        match line.kind {
            DiffLineKind::Added => {
                prop_assert!(line.old_line_number.is_none() && line.new_line_number.is_some())
            }
            DiffLineKind::Removed => {
                prop_assert!(line.old_line_number.is_some() && line.new_line_number.is_none())
            }
            DiffLineKind::Unchanged => {
                prop_assert!(line.old_line_number.is_some() && line.new_line_number.is_some())
            }
        }
    }

    prop_assert!(result.len() >= old_lines.len().max(new_lines.len()));
    prop_assert!(result.len() <= old_lines.len() + new_lines.len());
    Ok(())
}

proptest! {
    #[test]
    fn identical_texts_are_unchanged(t in text()) {
        let result = compute_diff(&t, &t);

        prop_assert!(result.lines.iter().all(|l| l.kind == DiffLineKind::Unchanged));
        let content: Vec<&str> = result.lines.iter().map(|l| l.content.as_str()).collect();
        prop_assert_eq!(content, split_lines(&t));
        prop_assert!(result.stats.is_empty());
    }

    #[test]
    fn every_line_is_attributed_once(old in text(), new in text()) {
        check_attribution(&compute_diff(&old, &new), &old, &new)?;
    }

    #[test]
    fn every_algorithm_attributes_every_line(old in text(), new in text(), alg in algorithm()) {
        let result = DiffConfig::default().algorithm(alg).diff(&old, &new);
        check_attribution(&result, &old, &new)?;
    }

    #[test]
    fn stats_preserve_the_net_change(old in text(), new in text()) {
        let result = compute_diff(&old, &new);
        let stats = result.stats;

        prop_assert_eq!(
            stats.added as i64 - stats.removed as i64,
            result.raw_added() as i64 - result.raw_removed() as i64
        );
        prop_assert_eq!(stats.modified, result.raw_added().min(result.raw_removed()));
    }

    #[test]
    fn empty_old_text_only_adds_non_empty_lines(t in text()) {
        // The old side is the single empty line of ""
        let result = compute_diff("", &t);

        prop_assert_eq!(result.old_line_count(), 1);
        for line in result.lines.iter().filter(|l| !l.content.is_empty()) {
            prop_assert_eq!(line.kind, DiffLineKind::Added);
        }
    }

    #[test]
    fn empty_new_text_only_removes_non_empty_lines(t in text()) {
        let result = compute_diff(&t, "");

        prop_assert_eq!(result.new_line_count(), 1);
        for line in result.lines.iter().filter(|l| !l.content.is_empty()) {
            prop_assert_eq!(line.kind, DiffLineKind::Removed);
        }
    }

    #[test]
    fn diff_is_deterministic(old in text(), new in text()) {
        prop_assert_eq!(compute_diff(&old, &new), compute_diff(&old, &new));
    }
}
