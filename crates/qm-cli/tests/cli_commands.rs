//! Integration tests for the qm CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const THREE: &str = "The cat sat. The dog ran. Birds fly high today.";

fn qm() -> Command {
    Command::cargo_bin("qm").unwrap()
}

fn write(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

// ---------------------------------------------------------------------------
// score
// ---------------------------------------------------------------------------

#[test]
fn score_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "entry.txt", THREE);
    qm().arg("score")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 9"))
        .stdout(predicate::str::contains("Sentences: 3"))
        .stdout(predicate::str::contains("Milestone").not());
}

#[test]
fn score_stdin() {
    qm().arg("score")
        .write_stdin(THREE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 9"));
}

#[test]
fn score_json() {
    qm().args(["score", "--json"])
        .write_stdin(THREE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 9"))
        .stdout(predicate::str::contains("\"sentenceCount\": 3"))
        .stdout(predicate::str::contains("\"milestoneJustReached\": false"));
}

#[test]
fn score_breakdown() {
    qm().args(["score", "--breakdown"])
        .write_stdin("The cat sat. Hi.")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sentence"))
        .stdout(predicate::str::contains("The cat sat."))
        .stdout(predicate::str::contains("Score: 3"))
        .stdout(predicate::str::contains("Sentences: 2"));
}

#[test]
fn score_milestone() {
    qm().arg("score")
        .write_stdin("The cat sat. ".repeat(10))
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 30"))
        .stdout(predicate::str::contains("Milestone: 10 sentences!"));
}

#[test]
fn score_missing_file() {
    qm().args(["score", "/nonexistent/entry.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: cannot read"));
}

// ---------------------------------------------------------------------------
// prompt
// ---------------------------------------------------------------------------

#[test]
fn prompt_is_reproducible_with_seed() {
    let first = qm().args(["prompt", "--seed", "7"]).output().unwrap();
    let second = qm().args(["prompt", "--seed", "7"]).output().unwrap();
    assert!(first.status.success());
    assert!(!first.stdout.is_empty());
    assert_eq!(first.stdout, second.stdout);
}

// ---------------------------------------------------------------------------
// journal
// ---------------------------------------------------------------------------

#[test]
fn journal_scores_each_line() {
    qm().args(["journal", "--seed", "1"])
        .write_stdin("The cat sat.\nThe dog ran.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode:"))
        .stdout(predicate::str::contains("Prompt:"))
        .stdout(predicate::str::contains("3 points, 1 sentences"))
        .stdout(predicate::str::contains("Final score: 6 (2 sentences)"));
}

#[test]
fn journal_with_no_time_expires() {
    qm().args(["journal", "--minutes", "0", "--seed", "1"])
        .write_stdin("The cat sat.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Time's up!"))
        .stdout(predicate::str::contains("Final score: 0 (0 sentences)"));
}

// ---------------------------------------------------------------------------
// versus
// ---------------------------------------------------------------------------

#[test]
fn versus_picks_the_higher_score() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", THREE);
    let b = write(&dir, "b.txt", "The cat sat.");
    qm().arg("versus")
        .arg(&a)
        .arg(&b)
        .args(["--name1", "Alice", "--name2", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"completed\""))
        .stdout(predicate::str::contains("\"startedAt\""))
        .stdout(predicate::str::contains("Winner: Alice with 9 points"));
}

#[test]
fn versus_tie() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", THREE);
    qm().arg("versus")
        .arg(&a)
        .arg(&a)
        .assert()
        .success()
        .stdout(predicate::str::contains("It's a tie."));
}

#[test]
fn versus_missing_file() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", THREE);
    qm().arg("versus")
        .arg(&a)
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

#[test]
fn help_lists_commands() {
    qm().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("score"))
        .stdout(predicate::str::contains("journal"))
        .stdout(predicate::str::contains("versus"));
}
