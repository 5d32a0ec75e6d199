//! End-to-end CLI tests for chatsift.
//!
//! These tests run the actual binary with various arguments and check its
//! output files and messages.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const CHAT: &str = "\
Messages and calls are end-to-end encrypted.
15/01/24, 10:30 AM - Alice: Hello!
15/01/24, 10:31 AM - Bob: Hi Alice!
How are you?
15/01/24, 10:32 AM - Bob: POLL:
16/01/24, 21:05 - Alice: see https://example.com
16/01/24, 21:06 - Bob: <Media omitted>
17/01/24, 08:00 - Bob left
";

fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    fs::write(dir.path().join("chat.txt"), CHAT).unwrap();
    fs::write(
        dir.path().join("us_chat.txt"),
        "01/15/24, 10:30 AM - Alice: US export\n01/16/24, 9:00 PM - Bob: second\n",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "shopping list\n- eggs\n- milk\n").unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();

    dir
}

fn chatsift_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatsift"));
    Command::from_std(cmd)
}

fn fixture(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_csv_default() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.csv");

        chatsift_cmd()
            .args([&fixture(&fixtures, "chat.txt"), "-o", output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Done"))
            .stdout(predicate::str::contains("Records:   5"))
            .stdout(predicate::str::contains("Dropped:   1"));

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("date,time_12h,time_24h,sender,message,"));
        assert!(content.contains("2024-01-15,10:30 AM,10:30,Alice,Hello!"));
        assert!(content.contains("\"Hi Alice!\nHow are you?\""));
        assert!(content.contains(",System:,Bob left,"));
        assert!(!content.contains("POLL:"));
    }

    #[test]
    fn test_default_output_next_to_input() {
        let fixtures = setup_fixtures();

        chatsift_cmd()
            .args([&fixture(&fixtures, "chat.txt"), "-f", "json"])
            .assert()
            .success();

        let output = output_path(&fixtures, "chat.json");
        assert!(output.exists());
    }

    #[test]
    fn test_summary_stats() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.csv");

        chatsift_cmd()
            .args([&fixture(&fixtures, "chat.txt"), "-o", output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Senders:   2"))
            .stdout(predicate::str::contains("Media:     1"))
            .stdout(predicate::str::contains("Links:     1"));
    }
}

// ============================================================================
// Output Format Tests
// ============================================================================

mod output_formats {
    use super::*;

    #[test]
    fn test_output_json() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.json");

        chatsift_cmd()
            .args([&fixture(&fixtures, "chat.txt"), "-o", output.to_str().unwrap(), "-f", "json"])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[2]["period_bucket"], "21-22");
        assert_eq!(records[2]["time_12h"], "09:05 PM");
        assert!(content.contains('\n'));
    }

    #[test]
    fn test_output_json_compact() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.json");

        chatsift_cmd()
            .args([
                &fixture(&fixtures, "chat.txt"),
                "-o",
                output.to_str().unwrap(),
                "--format",
                "json",
                "--compact",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(!content.contains('\n'));
    }

    #[test]
    fn test_output_jsonl() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.jsonl");

        chatsift_cmd()
            .args([&fixture(&fixtures, "chat.txt"), "-o", output.to_str().unwrap(), "-f", "jsonl"])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 5);
        for line in content.lines() {
            let _: serde_json::Value = serde_json::from_str(line).unwrap();
        }
    }

    #[test]
    fn test_csv_delimiter() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.csv");

        chatsift_cmd()
            .args([
                &fixture(&fixtures, "chat.txt"),
                "-o",
                output.to_str().unwrap(),
                "--delimiter",
                ";",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("date;time_12h;"));
    }
}

// ============================================================================
// Parsing Option Tests
// ============================================================================

mod parsing_options {
    use super::*;

    #[test]
    fn test_month_first() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.csv");

        chatsift_cmd()
            .args([
                &fixture(&fixtures, "us_chat.txt"),
                "-o",
                output.to_str().unwrap(),
                "--month-first",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("2024-01-15,10:30 AM"));
        assert!(content.contains("2024-01-16,09:00 PM,21:00,Bob"));
    }

    #[test]
    fn test_day_first_drops_us_dates() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.csv");

        chatsift_cmd()
            .args([&fixture(&fixtures, "us_chat.txt"), "-o", output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Records:   0"));

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_skip_system() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.csv");

        chatsift_cmd()
            .args([
                &fixture(&fixtures, "chat.txt"),
                "-o",
                output.to_str().unwrap(),
                "--skip-system",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Records:   4"));

        let content = fs::read_to_string(&output).unwrap();
        assert!(!content.contains("Bob left"));
    }

    #[test]
    fn test_verbose_logs_dropped_chunks() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.csv");

        chatsift_cmd()
            .env_remove("RUST_LOG")
            .args([&fixture(&fixtures, "chat.txt"), "-o", output.to_str().unwrap(), "--verbose"])
            .assert()
            .success()
            .stderr(predicate::str::contains("dropped chunk"))
            .stderr(predicate::str::contains("placeholder"));
    }
}

// ============================================================================
// Filter Tests
// ============================================================================

mod filters {
    use super::*;

    #[test]
    fn test_filter_by_sender_case_insensitive() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.csv");

        chatsift_cmd()
            .args([
                &fixture(&fixtures, "chat.txt"),
                "-o",
                output.to_str().unwrap(),
                "--from",
                "alice",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("From:"));

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(!content.contains(",Bob,"));
    }

    #[test]
    fn test_filter_system_notices() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.csv");

        chatsift_cmd()
            .args([
                &fixture(&fixtures, "chat.txt"),
                "-o",
                output.to_str().unwrap(),
                "--from",
                "System:",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains(",System:,Bob left,"));
    }

    #[test]
    fn test_filter_date_range() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.jsonl");

        chatsift_cmd()
            .args([
                &fixture(&fixtures, "chat.txt"),
                "-o",
                output.to_str().unwrap(),
                "-f",
                "jsonl",
                "--after",
                "2024-01-16",
                "--before",
                "2024-01-16",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("After:"))
            .stdout(predicate::str::contains("Before:"));

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_invalid_filter_date() {
        let fixtures = setup_fixtures();

        chatsift_cmd()
            .args([&fixture(&fixtures, "chat.txt"), "--after", "16/01/2024"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"))
            .stderr(predicate::str::contains("YYYY-MM-DD"));
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_nonexistent_file() {
        chatsift_cmd()
            .args(["nonexistent_file.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
    }

    #[test]
    fn test_not_a_chat_export() {
        let fixtures = setup_fixtures();

        chatsift_cmd()
            .args([&fixture(&fixtures, "notes.txt")])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no entry header found"));

        assert!(!output_path(&fixtures, "notes.csv").exists());
    }

    #[test]
    fn test_empty_file() {
        let fixtures = setup_fixtures();

        chatsift_cmd()
            .args([&fixture(&fixtures, "empty.txt")])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
    }

    #[test]
    fn test_conflicting_date_flags() {
        chatsift_cmd()
            .args(["chat.txt", "--month-first", "--date-fallback"])
            .assert()
            .failure();
    }

    #[test]
    fn test_unknown_format() {
        chatsift_cmd()
            .args(["chat.txt", "-f", "xlsx"])
            .assert()
            .failure();
    }
}
