//! Integration tests for the festival-labels binary
//!
//! Runs the binary against snapshot files in temporary directories and an
//! unreachable source URL, so no network access is needed.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

/// Source URL that refuses connections
const UNREACHABLE_SOURCE: &str = "http://127.0.0.1:1/festivals";

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_festival-labels"))
        .args(args)
        .env_remove("FESTIVALS_SOURCE_URL")
        .env_remove("FESTIVALS_CACHE_FILE")
        .env_remove("FESTIVALS_TIMEOUT_SECS")
        .output()
        .expect("Failed to execute festival-labels")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success(), "Expected --help to exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("festival-labels"));
    assert!(stdout.contains("--cache-file"));
    assert!(stdout.contains("serve"));
}

#[test]
fn test_show_prints_existing_snapshot_verbatim() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let cache_file = temp_dir.path().join("festivals.json");
    fs::write(
        &cache_file,
        r#"[{"label":"Label1","bands":[{"name":"Band1","festivals":[{"name":"Festival1"}]}]}]"#,
    )
    .expect("Should seed cache");

    let output = run_cli(&[
        "--source-url",
        UNREACHABLE_SOURCE,
        "--cache-file",
        cache_file.to_str().unwrap(),
        "show",
    ]);

    assert!(output.status.success());
    let stdout: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(stdout[0]["label"], "Label1");
    assert_eq!(stdout[0]["bands"][0]["festivals"][0]["name"], "Festival1");
}

#[test]
fn test_unreachable_source_prints_and_caches_empty_list() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let cache_file = temp_dir.path().join("nested").join("festivals.json");

    let output = run_cli(&[
        "--source-url",
        UNREACHABLE_SOURCE,
        "--cache-file",
        cache_file.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[]");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error fetching data from API"),
        "Fetch failure should be logged: {}",
        stderr
    );
    assert_eq!(fs::read_to_string(&cache_file).expect("Cache should exist"), "[]");
}

#[test]
fn test_corrupt_snapshot_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let cache_file = temp_dir.path().join("festivals.json");
    fs::write(&cache_file, "not json").expect("Should seed cache");

    let output = run_cli(&[
        "--source-url",
        UNREACHABLE_SOURCE,
        "--cache-file",
        cache_file.to_str().unwrap(),
    ]);

    assert!(!output.status.success(), "Corrupt cache should fail the run");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse cache file"), "stderr: {}", stderr);
    assert_eq!(fs::read_to_string(&cache_file).unwrap(), "not json");
}

#[test]
fn test_zero_timeout_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let cache_file = temp_dir.path().join("festivals.json");

    let output = run_cli(&[
        "--cache-file",
        cache_file.to_str().unwrap(),
        "--timeout-secs",
        "0",
    ]);

    assert!(!output.status.success());
    assert!(!cache_file.exists());
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use festival_labels::cli::{Cli, Command, Config, DEFAULT_BIND};
    use festival_labels::data::DEFAULT_SOURCE_URL;

    #[test]
    fn test_serve_uses_default_bind() {
        let cli = Cli::parse_from(["festival-labels", "--cache-file", "/tmp/f.json", "serve"]);
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(
            config.command,
            Command::Serve {
                bind: DEFAULT_BIND.parse().unwrap()
            }
        );
    }

    #[test]
    fn test_default_source_url() {
        let cli = Cli::parse_from(["festival-labels", "--cache-file", "/tmp/f.json"]);
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert!(config.timeout.is_none());
    }
}
