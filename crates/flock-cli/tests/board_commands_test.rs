//! Integration tests for `flock board ...`.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn flock(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("flock").unwrap();
    cmd.env("FLOCK_PATH", data_dir.path());
    cmd
}

#[test]
fn test_board_list_shows_seeded_boards() -> Result<()> {
    let dir = TempDir::new()?;
    let output = flock(&dir)
        .args(["--seed", "7", "--format", "json", "board", "list"])
        .output()?;

    assert!(output.status.success());
    let boards: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(boards.len(), 5);
    assert_eq!(boards[0]["id"], "board-1");
    assert_eq!(boards[0]["name"], "Favorites");
    assert_eq!(boards[0]["post_count"], 15);

    Ok(())
}

#[test]
fn test_board_show_filters_and_reranks() -> Result<()> {
    let dir = TempDir::new()?;
    let output = flock(&dir)
        .args(["--seed", "7", "--format", "json", "board", "show", "board-2"])
        .output()?;

    assert!(output.status.success());
    let posts: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout)?;
    assert!(!posts.is_empty());
    assert!(posts.len() < 20);

    for (index, post) in posts.iter().enumerate() {
        assert_eq!(post["board_id"], "board-2");
        assert_eq!(post["rank"].as_u64().unwrap(), index as u64 + 1);
    }

    Ok(())
}

#[test]
fn test_board_show_plain_names_the_board() {
    let dir = TempDir::new().unwrap();
    flock(&dir)
        .args(["--seed", "7", "board", "show", "board-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Board: Inspiration"));
}

#[test]
fn test_board_show_unknown_board_fails() {
    let dir = TempDir::new().unwrap();
    flock(&dir)
        .args(["--seed", "7", "board", "show", "board-99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown board"));
}

#[test]
fn test_board_create_reports_new_board() {
    let dir = TempDir::new().unwrap();
    flock(&dir)
        .args(["--seed", "7", "board", "create", "Mood Board"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created board Mood Board (board-6)"));
}

#[test]
fn test_board_create_blank_name_fails() {
    let dir = TempDir::new().unwrap();
    flock(&dir)
        .args(["--seed", "7", "board", "create", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("board name must not be blank"));
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    flock(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("board"))
        .stdout(predicate::str::contains("posts"));
}
