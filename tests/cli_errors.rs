#![cfg(feature = "cli")]

use predicates::prelude::*;

#[test]
fn cli_fails_without_a_point() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_polynomials");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing evaluation point"));
}

#[test]
fn cli_evaluates_teos10_from_flags() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_polynomials");
    cmd.args([
        "--json",
        "--family",
        "teos10",
        "--theta",
        "10",
        "--salinity",
        "30",
        "--z",
        "-1000",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"density\": 1027.45140"))
        .stdout(predicate::str::contains("\"family\": \"teos10\""));
}

#[test]
fn cli_reads_config_from_stdin() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_polynomials");
    let doc = serde_json::json!({
        "family": "roquet",
        "coefficient_set": "SecondOrder",
        "precision": "f32",
    })
    .to_string();

    cmd.args(["--config", "-", "--theta", "0", "--salinity", "0", "--z", "0"])
        .write_stdin(doc);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Equation of state: roquet (f32)"))
        .stdout(predicate::str::contains("ρ' = 0.8078 Sᴬ + 0.0182 Θ"));
}

#[test]
fn cli_rejects_unknown_coefficient_set() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_polynomials");
    cmd.args(["--coefficient-set", "Quadratic", "--theta", "1", "--salinity", "35", "--z", "0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown coefficient set 'Quadratic'"));
}

#[test]
fn cli_rejects_coefficient_set_for_teos10() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_polynomials");
    cmd.args([
        "--config-json",
        r#"{"family":"teos10","coefficient_set":"Linear"}"#,
        "--theta",
        "1",
        "--salinity",
        "35",
        "--z",
        "0",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("only applies to the second-order family"));
}

#[test]
fn cli_reports_invalid_json_for_config_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_polynomials");
    cmd.arg("--config-json").arg("{not valid json}");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON for --config-json"));
}

#[test]
fn cli_reports_invalid_json_in_file() {
    use std::fs::File;
    use std::io::Write as _;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let file_path = dir.path().join("bad.json");
    let mut f = File::create(&file_path).unwrap();
    writeln!(f, "this is not json").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_polynomials");
    cmd.arg("--config").arg(file_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON in config document"));
}

#[test]
fn cli_reports_missing_config_file() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_polynomials");
    cmd.args(["--config", "/nonexistent/eos.json"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file '/nonexistent/eos.json'"));
}
