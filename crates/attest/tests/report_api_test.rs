//! Integration tests for the ReportGenerator API
//!
//! These tests drive the full diagram-then-document flow through the public
//! API, the way the CLI does.

use std::fs;

use tempfile::tempdir;

use attest::{ReportGenerator, config::AppConfig, content, diagram};

#[test]
fn test_generator_api_exists() {
    // Just verify the API compiles and can be constructed
    let _generator = ReportGenerator::default();
}

#[test]
fn test_render_architecture_diagram_svg() {
    let generator = ReportGenerator::default();
    let svg = generator
        .render_svg(&diagram::architecture_diagram())
        .expect("Failed to render architecture diagram");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("PostgreSQL DB"));
}

#[test]
fn test_render_data_flow_diagram_svg() {
    let generator = ReportGenerator::default();
    let svg = generator
        .render_svg(&diagram::data_flow_diagram())
        .expect("Failed to render data flow diagram");

    assert!(svg.contains("Patient Journey"));
    assert!(svg.contains("FHIR Resources (Blue)"));
}

#[test]
fn test_full_document_flow() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let arch_path = temp_dir.path().join("architecture_diagram.svg");
    let flow_path = temp_dir.path().join("data_flow_diagram.svg");

    let generator = ReportGenerator::new(AppConfig::default());

    let arch_svg = generator
        .render_svg(&diagram::architecture_diagram())
        .expect("Failed to render architecture diagram");
    fs::write(&arch_path, arch_svg).expect("Failed to write architecture diagram");

    let flow_svg = generator
        .render_svg(&diagram::data_flow_diagram())
        .expect("Failed to render data flow diagram");
    fs::write(&flow_path, flow_svg).expect("Failed to write data flow diagram");

    let document = generator.build_document(&arch_path, &flow_path);
    let html = generator
        .render_html(&document)
        .expect("Failed to render HTML");

    for title in content::SECTION_TITLES {
        assert!(html.contains(title), "missing section: {title}");
    }
    assert!(html.contains(content::SYSTEM_NAME));
    assert!(html.contains(content::AUTHOR));
    // Both diagrams are inlined rather than referenced
    assert_eq!(html.matches("<svg").count(), 2);
}

#[test]
fn test_render_html_fails_without_diagram_files() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let generator = ReportGenerator::default();

    let document = generator.build_document(
        &temp_dir.path().join("missing_a.svg"),
        &temp_dir.path().join("missing_b.svg"),
    );

    assert!(generator.render_html(&document).is_err());
}

#[test]
fn test_generator_reusability() {
    let generator = ReportGenerator::default();

    let svg1 = generator
        .render_svg(&diagram::architecture_diagram())
        .expect("Failed to render first diagram");
    let svg2 = generator
        .render_svg(&diagram::data_flow_diagram())
        .expect("Failed to render second diagram");

    assert!(svg1.contains("<svg"), "First SVG should be valid");
    assert!(svg2.contains("<svg"), "Second SVG should be valid");
}
