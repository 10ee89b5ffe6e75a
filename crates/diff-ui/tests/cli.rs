use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

fn fixture(old: &str, new: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempdir().unwrap();
    let old_path = dir.path().join("old.txt");
    let new_path = dir.path().join("new.txt");
    fs::write(&old_path, old).unwrap();
    fs::write(&new_path, new).unwrap();
    (dir, old_path, new_path)
}

fn diff_ui() -> Command {
    let mut cmd = Command::cargo_bin("diff-ui").unwrap();
    cmd.env_remove("DIFF_UI_VIEW").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_unified_output() {
    let (_dir, old, new) = fixture("a\nb\nc", "a\nx\nc");

    diff_ui()
        .args(["--color", "never", "--no-line-numbers"])
        .arg(&old)
        .arg(&new)
        .assert()
        .success()
        .stdout(
            "Diff Viewer\n+0 additions  -0 deletions  1 modifications\n\n  a\n- b\n+ x\n  c\n",
        );
}

#[test]
fn test_stats_only() {
    let (_dir, old, new) = fixture("a\nb", "a\nb\nc");

    diff_ui()
        .args(["--stats", "--color", "never", "--title", "notes"])
        .arg(&old)
        .arg(&new)
        .assert()
        .success()
        .stdout("notes\n+1 additions  -0 deletions\n");
}

#[test]
fn test_split_view_from_env() {
    let (_dir, old, new) = fixture("a\nb", "a\nc");

    diff_ui()
        .env("DIFF_UI_VIEW", "split")
        .args(["--color", "never"])
        .arg(&old)
        .arg(&new)
        .assert()
        .success()
        .stdout(predicate::str::contains("Original").and(predicate::str::contains("Modified")));
}

#[test]
fn test_json_output() {
    let (_dir, old, new) = fixture("a\nb", "a\nx");

    let output = diff_ui()
        .args(["--format", "json"])
        .arg(&old)
        .arg(&new)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["lines"][1]["kind"], "removed");
    assert_eq!(json["stats"]["modified"], 1);
}

#[test]
fn test_writes_patch_file() {
    let (dir, old, new) = fixture("a\nb\nc", "a\nx\nc");
    let patch = dir.path().join("diff.patch");

    diff_ui()
        .args(["--color", "never", "--output"])
        .arg(&patch)
        .arg(&old)
        .arg(&new)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&patch).unwrap(), "  a\n- b\n+ x\n  c");
}

#[test]
fn test_context_folds_unchanged_lines() {
    let (_dir, old, new) = fixture("1\n2\n3\n4\n5\n6\n7", "1\n2\n3\nX\n5\n6\n7");

    diff_ui()
        .args(["--color", "never", "--no-line-numbers", "--context", "1"])
        .arg(&old)
        .arg(&new)
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "⋯ 2 unchanged lines\n  3\n- 4\n+ X\n  5\n⋯ 2 unchanged lines\n",
        ));
}

#[test]
fn test_split_view_width() {
    let (_dir, old, new) = fixture("abcdefghij", "abcdefghij");

    diff_ui()
        .args(["--view", "split", "--width", "4", "--no-line-numbers", "--color", "never"])
        .arg(&old)
        .arg(&new)
        .assert()
        .success()
        .stdout(predicate::str::contains("\nabcd │ abcd\n"));
}

#[test]
fn test_language_alias_in_header() {
    let (_dir, old, new) = fixture("a", "b");

    diff_ui()
        .args(["--stats", "--color", "never", "--language", "js", "--algorithm", "Patience"])
        .arg(&old)
        .arg(&new)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Diff Viewer [javascript]\n"));
}

#[test]
fn test_unknown_view_is_rejected() {
    let (_dir, old, new) = fixture("a", "b");

    diff_ui()
        .args(["--view", "sideways"])
        .arg(&old)
        .arg(&new)
        .assert()
        .failure()
        .stderr(predicate::str::contains("sideways"));
}

#[test]
fn test_myers_algorithm() {
    let (_dir, old, new) = fixture("a\nb\nc\nd", "a\nd");

    diff_ui()
        .args(["--stats", "--color", "never", "--algorithm", "myers"])
        .arg(&old)
        .arg(&new)
        .assert()
        .success()
        .stdout(predicate::str::contains("-2 deletions"));
}

#[test]
fn test_missing_file_fails() {
    let (dir, old, _new) = fixture("a", "b");

    diff_ui()
        .arg(&old)
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.txt"));
}
