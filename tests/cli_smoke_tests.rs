mod common;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use serde_json::Value;

const BIN_NAME: &str = "finhealth_cli";

fn cli() -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn report_args(snapshot: &std::path::Path) -> Vec<String> {
    vec![
        "report".into(),
        "--snapshot".into(),
        snapshot.display().to_string(),
        "--year".into(),
        "2024".into(),
        "--month".into(),
        "3".into(),
        "--config-dir".into(),
        common::test_dir().display().to_string(),
    ]
}

#[test]
fn version_command_prints_build_summary() {
    cli()
        .arg("version")
        .assert()
        .success()
        .stdout(contains("finhealth ").and(contains(env!("CARGO_PKG_VERSION"))));
}

#[test]
fn text_report_shows_score_and_status() {
    let snapshot = common::write_snapshot(&common::store_export());
    cli()
        .args(report_args(&snapshot))
        .arg("--no-color")
        .assert()
        .success()
        .stdout(
            contains("Financial dashboard 2024-03")
                .and(contains("Health score 75/100, grade B"))
                .and(contains("Status: Getting Started"))
                .and(contains("10,000,000.00 USD")),
        );
}

#[test]
fn json_report_is_machine_readable() {
    let snapshot = common::write_snapshot(&common::store_export());
    let output = cli()
        .args(report_args(&snapshot))
        .args(["--format", "json"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout is json");
    assert_eq!(report["health"]["score"], 75);
    assert_eq!(report["health"]["grade"], "B");
    assert_eq!(report["status"]["status"], "START");
    assert_eq!(report["summary"]["total_balance"], 15_000_000.0);
    assert_eq!(report["period"]["year"], 2024);
    assert_eq!(report["period"]["month"], 3);
}

#[test]
fn configured_output_format_is_used() {
    let snapshot = common::write_snapshot(&common::store_export());
    let config_dir = common::test_dir();
    std::fs::write(
        config_dir.join("config.json"),
        r#"{"locale":"en-US","currency":"KRW","currency_precision":0,"output":"json"}"#,
    )
    .expect("write config");

    let output = cli()
        .args([
            "report",
            "--snapshot",
            &snapshot.display().to_string(),
            "--year",
            "2024",
            "--month",
            "3",
            "--config-dir",
            &config_dir.display().to_string(),
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout is json");
    assert_eq!(report["health"]["grade"], "B");
}

#[test]
fn missing_snapshot_exits_with_error() {
    let missing = common::test_dir().join("nope.json");
    cli()
        .args(report_args(&missing))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error:").and(contains("nope.json")));
}

#[test]
fn invalid_month_is_rejected() {
    let snapshot = common::write_snapshot(&common::store_export());
    cli()
        .args([
            "report",
            "--snapshot",
            &snapshot.display().to_string(),
            "--month",
            "14",
            "--config-dir",
            &common::test_dir().display().to_string(),
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn config_set_changes_the_next_report() {
    let snapshot = common::write_snapshot(&common::store_export());
    let config_dir = common::test_dir();
    let dir = config_dir.display().to_string();

    cli()
        .args(["config", "--config-dir", &dir, "set", "output", "json"])
        .assert()
        .success()
        .stdout(contains("output = json"));

    let output = cli()
        .args(["report", "--snapshot", &snapshot.display().to_string()])
        .args(["--year", "2024", "--month", "3", "--config-dir", &dir])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout is json");
    assert_eq!(report["health"]["score"], 75);
}

#[test]
fn config_rejects_unknown_setting() {
    cli()
        .args(["config", "--config-dir", &common::test_dir().display().to_string()])
        .args(["set", "theme", "dark"])
        .assert()
        .failure()
        .stderr(contains("Unknown setting `theme`"));
}
