//! End-to-end tests for the `ratebook` binary.
//!
//! Each test runs the compiled binary against a temporary configuration and
//! checks stdout, so the config layer, flag overrides, and output formats are
//! exercised together.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use approx::assert_abs_diff_eq;

fn ratebook(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ratebook"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RATEBOOK_LOG_LEVEL")
        .output()
        .expect("failed to run ratebook")
}

fn json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "ratebook failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_amortization_json_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let output = ratebook(&dir.path().join("absent.toml"), &["--format", "json", "amortization"]);
    let report = json(&output);

    let schedules = report["schedules"].as_array().unwrap();
    assert_eq!(schedules.len(), 2);
    assert_eq!(schedules[0]["mode"], "equal-principal");
    assert_eq!(schedules[1]["rows"].as_array().unwrap().len(), 4);
    assert_abs_diff_eq!(
        schedules[1]["total_interest"].as_f64().unwrap(),
        632.715_109,
        epsilon = 1e-6
    );
    assert_eq!(report["client_preferred"], "equal-principal");
}

#[test]
fn test_flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ratebook.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[savings]\nfuture_value = 20000.0\nyears = 2").unwrap();

    let from_file = json(&ratebook(&path, &["--format", "json", "savings"]));
    assert_abs_diff_eq!(
        from_file["simple_contribution"].as_f64().unwrap(),
        2.0 * 1_183.431_953,
        epsilon = 1e-5
    );

    let overridden = json(&ratebook(
        &path,
        &["--format", "json", "savings", "--future-value", "10000"],
    ));
    assert_abs_diff_eq!(
        overridden["compound_contribution"].as_f64().unwrap(),
        1_181.561_842,
        epsilon = 1e-6
    );
}

#[test]
fn test_accrual_table_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = ratebook(&dir.path().join("absent.toml"), &["accrual"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("October"));
    assert!(stdout.contains("November"));
    assert!(stdout.contains("172,839.59"));
}

#[test]
fn test_amortization_csv() {
    let dir = tempfile::tempdir().unwrap();
    let output = ratebook(
        &dir.path().join("absent.toml"),
        &["--format", "csv", "amortization", "--years", "2"],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    // Header plus 8 quarters for each mode
    assert_eq!(stdout.lines().count(), 1 + 16);
}

#[test]
fn test_csv_unsupported_for_savings() {
    let dir = tempfile::tempdir().unwrap();
    let output = ratebook(&dir.path().join("absent.toml"), &["--format", "csv", "savings"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not supported"));
}

#[test]
fn test_invalid_parameter_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = ratebook(
        &dir.path().join("absent.toml"),
        &["amortization", "--periods-per-year", "0"],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("periods_per_year"));
}

#[test]
fn test_invalid_config_file_reports_validation_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ratebook.toml");
    std::fs::write(&path, "log_level = \"loud\"\n[amortization]\nprincipal = -1.0\n").unwrap();

    let output = ratebook(&path, &["amortization"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("log_level"));
    assert!(stderr.contains("amortization.principal"));
}

#[test]
fn test_bad_section_only_blocks_its_own_command() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ratebook.toml");
    std::fs::write(&path, "[doubling]\nrate = 0.0\n").unwrap();

    let amortization = json(&ratebook(&path, &["--format", "json", "amortization"]));
    assert_eq!(amortization["schedules"].as_array().unwrap().len(), 2);

    let rejected = ratebook(&path, &["doubling"]);
    assert!(!rejected.status.success());
    assert!(String::from_utf8_lossy(&rejected.stderr).contains("doubling.rate"));

    let overridden = ratebook(&path, &["doubling", "--rate", "0.05"]);
    assert!(
        overridden.status.success(),
        "ratebook failed: {}",
        String::from_utf8_lossy(&overridden.stderr)
    );
}

#[test]
fn test_oversized_amortization_term_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = ratebook(
        &dir.path().join("absent.toml"),
        &["amortization", "--years", "65535", "-n", "65535"],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("term_years"));
}
