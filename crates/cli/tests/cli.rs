use assert_cmd::Command;
use predicates::prelude::*;

const SCENARIOS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../configs/scenarios");

#[test]
fn propagate_prints_final_state() {
    Command::cargo_bin("propagate")
        .unwrap()
        .args([
            "--eccentricity",
            "0.1",
            "--angular-momentum",
            "5.409e10",
            "--dt",
            "1000",
            "--frame",
            "RIC",
            "--position",
            "100,200,50",
            "--velocity",
            "0.5,-0.2,0.1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Relative Motion (RIC) ==="))
        .stdout(predicate::str::contains("864.106638"));
}

#[test]
fn propagate_compares_with_hcw_on_circular_orbit() {
    Command::cargo_bin("propagate")
        .unwrap()
        .args([
            "--rev-per-day",
            "15.5",
            "--dt",
            "2000",
            "--frame",
            "lvlh",
            "--position",
            "10,0,-5",
            "--velocity",
            "0,0.01,0",
            "--hcw",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("HCW"))
        .stdout(predicate::str::contains("|YA - HCW|"));
}

#[test]
fn propagate_rejects_hyperbolic_chief() {
    Command::cargo_bin("propagate")
        .unwrap()
        .args([
            "--eccentricity",
            "1.2",
            "--rev-per-day",
            "15.5",
            "--dt",
            "10",
            "--position",
            "1,2,3",
            "--velocity",
            "0,0,0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("eccentricity must be in [0, 1)"));
}

#[test]
fn propagate_rejects_malformed_vectors() {
    Command::cargo_bin("propagate")
        .unwrap()
        .args([
            "--angular-momentum",
            "5.2e10",
            "--dt",
            "10",
            "--position",
            "1,2",
            "--velocity",
            "0,0,0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected three comma-separated values"));
}

#[test]
fn sweep_writes_csv_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("out/table.csv");
    let json = dir.path().join("out/summary.json");

    Command::cargo_bin("sweep")
        .unwrap()
        .args(["--config", SCENARIOS, "--name", "leo-circular", "--quiet"])
        .arg("--csv")
        .arg(&csv)
        .arg("--json")
        .arg(&json)
        .assert()
        .success();

    let table = std::fs::read_to_string(&csv).unwrap();
    assert!(table.starts_with("time_s,theta_rad,"));
    // 0..5400 s every 600 s
    assert_eq!(table.lines().count(), 1 + 10);

    let summary = std::fs::read_to_string(&json).unwrap();
    assert!(summary.contains("\"scenario\": \"leo-circular\""));
    assert!(summary.contains("\"frame\": \"LVLH\""));
}

#[test]
fn sweep_json_for_every_scenario_is_one_array() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("all.json");

    Command::cargo_bin("sweep")
        .unwrap()
        .args(["--config", SCENARIOS, "--quiet"])
        .arg("--json")
        .arg(&json)
        .assert()
        .success();

    let text = std::fs::read_to_string(&json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().any(|e| e["scenario"] == "molniya"));
}

#[test]
fn sweep_prints_table_for_all_scenarios() {
    Command::cargo_bin("sweep")
        .unwrap()
        .args(["--config", SCENARIOS])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Scenario: leo-eccentric (RIC) ==="))
        .stdout(predicate::str::contains("=== Scenario: molniya (RIC) ==="))
        .stdout(predicate::str::contains("max |YA - HCW|"));
}

#[test]
fn sweep_reports_unknown_scenario() {
    Command::cargo_bin("sweep")
        .unwrap()
        .args(["--config", SCENARIOS, "--name", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scenario 'nope' not found"));
}
