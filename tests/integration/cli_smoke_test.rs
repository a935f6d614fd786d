//! CLI Smoke Test
//!
//! Runs the compiled binary end to end: create a schema, import the fixture
//! dataset and request the statistics document for one community.

use std::path::Path;
use std::process::{Command, Output};

use anyhow::{ensure, Context, Result};
use tempfile::TempDir;

use crate::common::fixture_path;

const MAIN_COMMUNITY: &str = "11111111-1111-1111-1111-111111111111";

fn community_stats(args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_community-stats"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .context("failed to launch community-stats binary")
}

fn fixture_arg(name: &str) -> Result<String> {
    fixture_path(name)
        .to_str()
        .map(str::to_string)
        .context("fixture path is not valid UTF-8")
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

fn db_arg(dir: &TempDir) -> String {
    dir.path()
        .join("nested")
        .join("smoke.db")
        .to_string_lossy()
        .to_string()
}

fn import_fixture(db_path: &str) -> Result<()> {
    let dataset = fixture_arg("community_dataset.json")?;
    let output = community_stats(&["import", "--file", &dataset, "--database-path", db_path])?;
    ensure!(
        output.status.success(),
        "import failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(())
}

#[test]
fn test_init_db_creates_database() -> Result<()> {
    let dir = TempDir::new()?;
    let db_path = db_arg(&dir);

    let output = community_stats(&["init-db", "--database-path", &db_path])?;

    assert!(output.status.success());
    assert!(Path::new(&db_path).exists());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Schema ready"));

    Ok(())
}

#[test]
fn test_import_reports_rows() -> Result<()> {
    let dir = TempDir::new()?;
    let db_path = db_arg(&dir);
    let dataset = fixture_arg("community_dataset.json")?;

    let output = community_stats(&[
        "import",
        "--file",
        &dataset,
        "--database-path",
        &db_path,
        "--format",
        "json",
    ])?;

    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(summary["communities"], 2);
    assert_eq!(summary["event_attendees"], 15);

    Ok(())
}

#[test]
fn test_stats_json_output() -> Result<()> {
    let dir = TempDir::new()?;
    let db_path = db_arg(&dir);
    import_fixture(&db_path)?;

    let output = community_stats(&[
        "stats",
        "--community-id",
        MAIN_COMMUNITY,
        "--database-path",
        &db_path,
        "--format",
        "json",
    ])?;

    assert!(
        output.status.success(),
        "stats failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let expected = read_json(&fixture_path("community_stats_expected.json"))?;
    assert_eq!(report, expected);

    Ok(())
}

#[test]
fn test_stats_console_output() -> Result<()> {
    let dir = TempDir::new()?;
    let db_path = db_arg(&dir);
    import_fixture(&db_path)?;

    let output = community_stats(&[
        "stats",
        "--community-id",
        MAIN_COMMUNITY,
        "--database-path",
        &db_path,
    ])?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Attendees"));
    assert!(stdout.contains("Cloud Native"));

    Ok(())
}

#[test]
fn test_stats_written_to_file() -> Result<()> {
    let dir = TempDir::new()?;
    let db_path = db_arg(&dir);
    import_fixture(&db_path)?;
    let report_path = dir.path().join("reports").join("stats.json");

    let output = community_stats(&[
        "stats",
        "--community-id",
        MAIN_COMMUNITY,
        "--database-path",
        &db_path,
        "--format",
        "json",
        "-o",
        report_path.to_str().context("report path is not valid UTF-8")?,
    ])?;

    assert!(output.status.success());
    let report = read_json(&report_path)?;
    assert_eq!(report["groups"]["total"], 4);

    Ok(())
}

#[test]
fn test_invalid_community_id_rejected() -> Result<()> {
    let dir = TempDir::new()?;
    let db_path = db_arg(&dir);

    let output = community_stats(&[
        "stats",
        "--community-id",
        "not-a-uuid",
        "--database-path",
        &db_path,
    ])?;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid identifier"));

    Ok(())
}

#[test]
fn test_invalid_configured_basis_fails_command() -> Result<()> {
    let dir = TempDir::new()?;
    let db_path = db_arg(&dir);
    let fallback_dir = dir.path().join("data");

    let output = Command::new(env!("CARGO_BIN_EXE_community-stats"))
        .args(["stats", "--community-id", MAIN_COMMUNITY])
        .current_dir(dir.path())
        .env("COMMUNITY_STATS_DATABASE_PATH", &db_path)
        .env("COMMUNITY_STATS_STATS__ATTENDEE_TIME_BASIS", "eventstart")
        .env_remove("RUST_LOG")
        .output()
        .context("failed to launch community-stats binary")?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration error"), "stderr: {}", stderr);
    assert!(stderr.contains("eventstart"));
    assert!(!Path::new(&db_path).exists());
    assert!(!fallback_dir.exists());

    Ok(())
}
