//! Edge case and error handling tests for count

#![cfg(unix)]


use assert_cmd::Command;
use harness::{TestTree, run_count};
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

fn count_cmd(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("count").expect("binary built");
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Fatal errors
// ============================================================================

#[test]
fn test_missing_path_fails() {
    let tree = TestTree::new();

    count_cmd(tree.path())
        .args(["-p", "does-not-exist"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("count: stat"))
        .stderr(predicate::str::contains("does-not-exist"))
        .stdout(predicate::str::contains("counting").not());
}

#[test]
fn test_broken_symlink_aborts() {
    let tree = TestTree::new();
    tree.add_file("real.go", "package real\n");
    symlink("nonexistent.go", tree.path().join("broken_link.go"))
        .expect("Failed to create broken symlink");

    let (stdout, stderr, success) = run_count(tree.path(), &[]);
    assert!(!success, "dangling symlink is a stat failure");
    assert!(stderr.contains("broken_link.go"), "{}", stderr);
    assert!(!stdout.contains("done!"), "{}", stdout);
}

#[test]
fn test_hidden_broken_symlink_ignored() {
    let tree = TestTree::new();
    tree.add_file("real.go", "package real\n");
    symlink("nonexistent.go", tree.path().join(".broken")).expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_count(tree.path(), &[]);
    assert!(success, "hidden entries are never stat'ed");
    assert!(stdout.contains(".go\t\t2\n"), "{}", stdout);
}

#[test]
fn test_unreadable_directory_aborts() {
    let tree = TestTree::new();
    tree.add_file("readable/file.go", "package readable\n");
    let locked = tree.add_dir("locked");
    fs::write(locked.join("inner.go"), "package locked\n").expect("Failed to write file");

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    let listable = fs::read_dir(&locked).is_ok();
    let (_stdout, stderr, success) = run_count(tree.path(), &[]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    if listable {
        // Running with privileges that ignore permission bits.
        return;
    }
    assert!(!success, "unlistable directory is fatal");
    assert!(stderr.contains("read dir"), "{}", stderr);
}

// ============================================================================
// Non-fatal per-file problems
// ============================================================================

#[test]
fn test_unreadable_file_skipped() {
    let tree = TestTree::new();
    tree.add_file("a.go", "package a\n\nfunc A() {}\n");
    let secret = tree.add_file("secret.go", "package secret\n\n\n\n\n\n");

    fs::set_permissions(&secret, fs::Permissions::from_mode(0o000)).unwrap();
    let readable = fs::read(&secret).is_ok();
    let (stdout, stderr, success) = run_count(tree.path(), &[]);
    fs::set_permissions(&secret, fs::Permissions::from_mode(0o644)).unwrap();

    if readable {
        return;
    }
    assert!(success, "unreadable file must not abort: {}", stderr);
    assert!(stdout.contains(".go\t\t4\n"), "{}", stdout);
    assert!(stderr.is_empty(), "skips are silent: {}", stderr);
}

#[test]
fn test_symlink_to_file_followed() {
    let tree = TestTree::new();
    let target = tree.add_file("target.go", "package target\n");
    symlink(&target, tree.path().join("link.go")).expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_count(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("counting 2 files"), "{}", stdout);
    assert!(stdout.contains(".go\t\t4\n"), "{}", stdout);
}

// ============================================================================
// Flags
// ============================================================================

#[test]
fn test_tree_value_clamped() {
    let tree = TestTree::new();
    tree.add_file("x/a.go", "package x\n");

    let (stdout, _stderr, success) = run_count(tree.path(), &["-t", "-3"]);
    assert!(success, "negative depth means whole tree");
    assert_eq!(harness::headers(&stdout).len(), 1);

    let (stdout, _stderr, success) = run_count(tree.path(), &["-t", "1000"]);
    assert!(success, "depth is clamped to 255");
    assert!(harness::headers(&stdout).is_empty(), "{}", stdout);
}

#[test]
fn test_comma_separated_excludes() {
    let tree = TestTree::new();
    tree.add_file("keep.rs", "fn keep() {}\n");
    tree.add_file("drop.md", "# drop\n");
    tree.add_file("build/out.rs", "fn out() {}\n");

    count_cmd(tree.path())
        .args(["-E", "build,.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("counting 1 files"))
        .stdout(predicate::str::contains(".md").not());
}

#[test]
fn test_glob_exclude() {
    let tree = TestTree::new();
    tree.add_file("lib.rs", "pub fn lib() {}\n");
    tree.add_file("lib_generated.rs", "pub fn generated() {}\n");

    count_cmd(tree.path())
        .args(["-E", "*_generated.rs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("counting 1 files"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let tree = TestTree::new();
    tree.add_file("a.go", "package a\n");
    tree.add_file("blob.bin", [0u8; 32]);

    count_cmd(tree.path())
        .arg("-v")
        .assert()
        .success()
        .stderr(predicate::str::contains("not a text file"))
        .stdout(predicate::str::contains("not a text file").not());
}

// ============================================================================
// Special Filenames
// ============================================================================

#[test]
fn test_filename_with_unicode() {
    let tree = TestTree::new();
    tree.add_file("日本語.go", "package jp\n");
    tree.add_file("中文目录/文件.go", "package cn\n");

    let (stdout, _stderr, success) = run_count(tree.path(), &["-t", "1"]);
    assert!(success);
    assert!(stdout.contains("中文目录..."), "{}", stdout);
}

#[test]
fn test_non_ascii_text_counted() {
    let tree = TestTree::new();
    tree.add_file("notes.txt", "Größe und Maß\nÜbung macht den Meister\n");

    let (stdout, _stderr, success) = run_count(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains(".txt\t\t3\n"), "{}", stdout);
}
