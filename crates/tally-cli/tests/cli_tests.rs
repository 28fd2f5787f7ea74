use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Temporary directory plus the database path inside it
fn create_cli_test_environment() -> (TempDir, String) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir
        .path()
        .join("cli_test.db")
        .to_str()
        .expect("Temporary path is not UTF-8")
        .to_string();
    (temp_dir, db_path)
}

/// A `tally` command with plain output against the given database
fn tally_cmd(db_path: &str) -> Command {
    let mut cmd = Command::cargo_bin("tally").expect("Failed to find tally binary");
    cmd.env_remove("TALLY_DATABASE_FILE")
        .args(["--no-color", "--database-file", db_path]);
    cmd
}

#[test]
fn test_cli_add_task_success() {
    let (_dir, db) = create_cli_test_environment();

    tally_cmd(&db)
        .args(["task", "add", "Renew passport", "--due", "2024-09-01", "-p", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created task with ID: 1"))
        .stdout(predicate::str::contains("# 1. Renew passport"))
        .stdout(predicate::str::contains("Due: 2024-09-01"))
        .stdout(predicate::str::contains("▲ High"));
}

#[test]
fn test_cli_add_task_rejects_blank_title() {
    let (_dir, db) = create_cli_test_environment();

    tally_cmd(&db)
        .args(["task", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create task"))
        .stderr(predicate::str::contains("title"));
}

#[test]
fn test_cli_list_empty_tasks() {
    let (_dir, db) = create_cli_test_environment();

    tally_cmd(&db)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_cli_toggle_and_filter_tasks() {
    let (_dir, db) = create_cli_test_environment();

    tally_cmd(&db).args(["task", "add", "Water plants"]).assert().success();
    tally_cmd(&db).args(["task", "add", "Book dentist"]).assert().success();

    tally_cmd(&db)
        .args(["task", "toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked 'Water plants' as completed"));

    tally_cmd(&db)
        .args(["task", "list", "--open"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book dentist"))
        .stdout(predicate::str::contains("Water plants").not());

    tally_cmd(&db)
        .args(["task", "toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reopened 'Water plants'"));
}

#[test]
fn test_cli_edit_task_reports_changes() {
    let (_dir, db) = create_cli_test_environment();

    tally_cmd(&db)
        .args(["task", "add", "Draft", "--notes", "first pass"])
        .assert()
        .success();

    tally_cmd(&db)
        .args(["task", "edit", "1", "--title", "Final draft", "--notes", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated task with ID: 1"))
        .stdout(predicate::str::contains("- Updated title"))
        .stdout(predicate::str::contains("- Cleared notes"));
}

#[test]
fn test_cli_show_missing_task() {
    let (_dir, db) = create_cli_test_environment();

    tally_cmd(&db)
        .args(["task", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task with ID 99 not found"));
}

#[test]
fn test_cli_delete_requires_confirmation() {
    let (_dir, db) = create_cli_test_environment();

    tally_cmd(&db).args(["task", "add", "Keep me"]).assert().success();

    tally_cmd(&db)
        .args(["task", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires explicit confirmation"));

    tally_cmd(&db)
        .args(["task", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted task 'Keep me' (ID: 1)"));
}

#[test]
fn test_cli_habit_check_in_streak() {
    let (_dir, db) = create_cli_test_environment();

    tally_cmd(&db)
        .args(["habit", "add", "Read", "--cadence", "daily"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created habit with ID: 1"));

    tally_cmd(&db)
        .args(["habit", "check-in", "1", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked in. Keep it going!"))
        .stdout(predicate::str::contains("Streak: 1 day"));

    tally_cmd(&db)
        .args(["habit", "check-in", "1", "--date", "2024-03-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Streak: 2 days"));

    tally_cmd(&db)
        .args(["habit", "check-in", "1", "--date", "2024-03-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already checked in for this period."))
        .stdout(predicate::str::contains("Streak: 2 days"));

    tally_cmd(&db)
        .args(["habit", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Read** (ID: 1)"));
}

#[test]
fn test_cli_check_in_rejects_bad_date() {
    let (_dir, db) = create_cli_test_environment();

    tally_cmd(&db).args(["habit", "add", "Read"]).assert().success();

    tally_cmd(&db)
        .args(["habit", "check-in", "1", "--date", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--date"));
}

#[test]
fn test_cli_check_in_missing_habit() {
    let (_dir, db) = create_cli_test_environment();

    tally_cmd(&db)
        .args(["habit", "check-in", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Habit with ID 5 not found"));
}

#[test]
fn test_cli_bookmark_workflow() {
    let (_dir, db) = create_cli_test_environment();

    tally_cmd(&db)
        .args([
            "bookmark",
            "add",
            "Rust Book",
            "https://doc.rust-lang.org/book/",
            "--tags",
            "Rust,docs",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created bookmark with ID: 1"))
        .stdout(predicate::str::contains("#docs #rust"));

    tally_cmd(&db)
        .args(["bookmark", "visit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Visited 'Rust Book' (clicks: 1)"))
        .stdout(predicate::str::contains("https://doc.rust-lang.org/book/"));

    tally_cmd(&db)
        .args(["bookmark", "favorite", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Rust Book' to favorites"));

    tally_cmd(&db)
        .args(["bookmark", "list", "--tag", "rust", "--sort", "clicks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("★ [Rust Book]"));

    tally_cmd(&db)
        .args(["bookmark", "tags"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- #docs\n- #rust"));
}

#[test]
fn test_cli_bookmark_rejects_invalid_url() {
    let (_dir, db) = create_cli_test_environment();

    tally_cmd(&db)
        .args(["bookmark", "add", "Local file", "file:///etc/passwd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("url"));
}

#[test]
fn test_cli_default_command_shows_dashboard() {
    let (_dir, db) = create_cli_test_environment();

    tally_cmd(&db).args(["task", "add", "Open item"]).assert().success();

    tally_cmd(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Dashboard for"))
        .stdout(predicate::str::contains("- Open tasks: 1"))
        .stdout(predicate::str::contains("No habits yet."));
}

#[test]
fn test_cli_dashboard_for_date() {
    let (_dir, db) = create_cli_test_environment();

    tally_cmd(&db)
        .args(["dashboard", "--date", "2024-02-29"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Dashboard for 2024-02-29"))
        .stdout(predicate::str::contains("| 2024-02-16 | 0 |"))
        .stdout(predicate::str::contains("| 2024-02-29 | 0 |"));
}

#[test]
fn test_cli_database_file_from_environment() {
    let (_dir, db) = create_cli_test_environment();

    Command::cargo_bin("tally")
        .expect("Failed to find tally binary")
        .env("TALLY_DATABASE_FILE", &db)
        .args(["--no-color", "task", "add", "From env"])
        .assert()
        .success();

    tally_cmd(&db)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("From env"));
}
