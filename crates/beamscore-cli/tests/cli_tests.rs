// ===== beamscore/crates/beamscore-cli/tests/cli_tests.rs =====
use assert_cmd::Command;
use regex::Regex;
use std::fs;

fn beamscore() -> Command {
    Command::cargo_bin("beamscore").expect("binary should build")
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn render_prints_title_with_one_decimal_factor() {
    let output = beamscore()
        .args(["render", "--penalty-factor", "2.0", "--display-cells", "8"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Score Surface (Penalty Factor = 2.0)"));
    assert!(stdout.contains("Rows: Object Radius | Columns: Beam Radius | Cells: Score"));
}

#[test]
fn render_snaps_the_factor_onto_the_step_lattice() {
    let output = beamscore()
        .args(["render", "--penalty-factor", "2.34", "--display-cells", "4"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let re = Regex::new(r"Penalty Factor = (\d+\.\d)").unwrap();
    let stdout = stdout_of(&output);
    let caps = re.captures(&stdout).expect("title should carry the factor");
    assert_eq!(&caps[1], "2.3");
}

#[test]
fn out_of_range_factor_is_rejected() {
    let output = beamscore()
        .args(["render", "--penalty-factor", "9.9"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn degenerate_domain_is_rejected() {
    let output = beamscore()
        .args(["render", "--radius-min", "50", "--radius-max", "50"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn csv_export_writes_the_full_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surface.csv");

    beamscore()
        .args([
            "render",
            "--format",
            "csv",
            "--output",
            path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 101); // header + 100 object rows
    assert!(lines[0].starts_with("object_radius,20.000,"));
    assert_eq!(lines[1].split(',').count(), 101);
}

#[test]
fn json_export_carries_the_render_contract() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surface.json");

    beamscore()
        .args([
            "render",
            "--penalty-factor",
            "1.5",
            "--format",
            "json",
            "--output",
            path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed["penaltyFactor"], 1.5);
    assert_eq!(parsed["beamRadii"].as_array().unwrap().len(), 100);
    assert_eq!(parsed["objectRadii"].as_array().unwrap().len(), 100);

    let scores = parsed["scores"].as_array().unwrap();
    assert_eq!(scores.len(), 100);
    assert!(scores.iter().all(|row| row.as_array().unwrap().len() == 100));
}

#[test]
fn config_file_feeds_the_render_and_cli_flags_win() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("surface.json");
    fs::write(&cfg_path, r#"{ "penalty_factor": 4.0, "samples": 20 }"#).unwrap();

    // File value drives the title.
    let output = beamscore()
        .args(["render", "--config", cfg_path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Penalty Factor = 4.0"));

    // Command line overrides the file.
    let output = beamscore()
        .args([
            "render",
            "--config",
            cfg_path.to_str().unwrap(),
            "--penalty-factor",
            "1.0",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Penalty Factor = 1.0"));
}

#[test]
fn sweep_emits_one_row_per_step() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sweep.json");

    let output = beamscore()
        .args([
            "sweep",
            "--from",
            "1.0",
            "--to",
            "2.0",
            "--step",
            "0.5",
            "--samples",
            "20",
            "--output",
            path.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["penaltyFactor"], 1.0);
    assert_eq!(rows[2]["penaltyFactor"], 2.0);
    assert_eq!(rows[2]["stats"]["min"], 1);
}

#[test]
fn empty_sweep_range_is_rejected() {
    let output = beamscore()
        .args(["sweep", "--from", "3.0", "--to", "1.0"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
