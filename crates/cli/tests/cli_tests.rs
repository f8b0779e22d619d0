//! CLI integration tests

use std::io::Write;
use std::process::Command;

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "ksize-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(
        stdout.contains("Capacity sizing"),
        "Should show app description"
    );
    assert!(stdout.contains("calculate"), "Should show calculate command");
    assert!(stdout.contains("catalog"), "Should show catalog command");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = Command::new("cargo")
        .args(["run", "-p", "ksize-cli", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("ksize"), "Should show binary name");
}

/// Test a full calculation against a JSON input file
#[test]
fn test_calculate_from_file_json_output() {
    let mut input = tempfile::NamedTempFile::new().expect("tempfile");
    write!(
        input,
        r#"{{
            "distribution": "openshift",
            "technology": "springboot",
            "environments": {{ "prod": {{ "medium": 20 }} }},
            "hadr": {{
                "control_plane_ha": "stacked_ha",
                "control_plane_nodes": 5,
                "node_distribution": "multi_az",
                "availability_zones": 3,
                "dr_pattern": "warm_standby"
            }}
        }}"#
    )
    .expect("write input");

    let output = Command::new("cargo")
        .args([
            "run",
            "-p",
            "ksize-cli",
            "--",
            "--format",
            "json",
            "calculate",
            "--input",
        ])
        .arg(input.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "calculate should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be JSON");
    assert_eq!(result["environments"][0]["masters"], 5);
    assert_eq!(result["environments"][0]["dr_cost_multiplier"], 1.40);
}

/// Unknown distribution should fail with the lookup-miss message
#[test]
fn test_calculate_unknown_distribution_fails() {
    let mut input = tempfile::NamedTempFile::new().expect("tempfile");
    write!(
        input,
        r#"{{
            "distribution": "nope",
            "technology": "springboot",
            "environments": {{ "prod": {{ "medium": 1 }} }}
        }}"#
    )
    .expect("write input");

    let output = Command::new("cargo")
        .args(["run", "-p", "ksize-cli", "--", "calculate", "--input"])
        .arg(input.path())
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "unknown distribution should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope"), "error should name the id");
}

/// Catalog listing shows the built-in distributions
#[test]
fn test_catalog_distributions() {
    let output = Command::new("cargo")
        .args(["run", "-p", "ksize-cli", "--", "catalog", "distributions"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "catalog listing should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("openshift"));
    assert!(stdout.contains("eks"));
}
