//! End-to-end smoke tests for the full report pipeline.

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use attest_cli::{Args, run};

fn args_for(output: &Path) -> Args {
    Args {
        output: output.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

/// Removes the generation date so two runs can be compared byte-for-byte.
fn strip_date(html: &str) -> String {
    let start = html.find("Date: ").expect("report should contain a date");
    let end = start
        + html[start..]
            .find("</p>")
            .expect("date paragraph should be terminated");
    format!("{}{}", &html[..start], &html[end..])
}

#[test]
fn e2e_pipeline_writes_report_and_cleans_up() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("FHIR_DAK_Compliance_Report.html");

    run(&args_for(&output)).expect("pipeline should succeed");

    // The report exists and is non-empty
    let html = fs::read_to_string(&output).expect("report should exist");
    assert!(!html.is_empty());

    // All five sections are present with their literal titles
    for title in [
        "1. System Overview",
        "2. FHIR Compliance",
        "3. DAK Compliance",
        "4. Architecture and Interoperability",
        "5. Compliance Summary",
    ] {
        assert!(html.contains(title), "missing section: {title}");
    }

    // Both diagrams were inlined
    assert_eq!(html.matches("<svg").count(), 2);

    // Cleanup postcondition: the intermediate diagram files are gone
    assert!(!temp_dir.path().join("architecture_diagram.svg").exists());
    assert!(!temp_dir.path().join("data_flow_diagram.svg").exists());
}

#[test]
fn e2e_reruns_are_identical_modulo_date() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let first_output = temp_dir.path().join("first.html");
    let second_output = temp_dir.path().join("second.html");

    run(&args_for(&first_output)).expect("first run should succeed");
    run(&args_for(&second_output)).expect("second run should succeed");

    let first = fs::read_to_string(&first_output).expect("first report");
    let second = fs::read_to_string(&second_output).expect("second report");

    assert_eq!(strip_date(&first), strip_date(&second));
}

#[test]
fn e2e_unwritable_output_directory_fails_cleanly() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("no_such_dir").join("report.html");

    let result = run(&args_for(&output));
    assert!(result.is_err(), "run into a missing directory should fail");

    // No stray artifacts appear outside the (missing) target directory
    assert!(!temp_dir.path().join("architecture_diagram.svg").exists());
    assert!(!temp_dir.path().join("data_flow_diagram.svg").exists());
}

#[test]
fn e2e_missing_explicit_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("report.html");

    let args = Args {
        output: output.to_string_lossy().to_string(),
        config: Some(
            temp_dir
                .path()
                .join("missing.toml")
                .to_string_lossy()
                .to_string(),
        ),
        log_level: "off".to_string(),
    };

    assert!(run(&args).is_err());
    assert!(!output.exists(), "no partial report should be written");
}
