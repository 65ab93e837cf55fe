//! CLI logic for the Attest report generator.
//!
//! [`run`] executes the whole pipeline: render both diagrams next to the
//! output file, assemble and save the report document, remove the
//! intermediate diagram files, and print the completion summary.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::info;

use attest::{
    ARCHITECTURE_DIAGRAM_FILE, AttestError, DATA_FLOW_DIAGRAM_FILE, ReportGenerator, TempArtifact,
    diagram,
};

/// Run the Attest CLI application
///
/// # Errors
///
/// Returns `AttestError` for:
/// - Configuration loading errors
/// - Diagram rendering errors
/// - File I/O errors while writing the diagrams or the report
///
/// The intermediate diagram files are removed on every exit path.
pub fn run(args: &Args) -> Result<(), AttestError> {
    info!(output_path = args.output; "Generating compliance report");

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    let generator = ReportGenerator::new(app_config);

    // The intermediate diagrams live next to the report for the duration of
    // the run; the guards remove them even if a later step fails.
    let output_path = Path::new(&args.output);
    let artifact_dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let architecture = TempArtifact::new(artifact_dir.join(ARCHITECTURE_DIAGRAM_FILE));
    let data_flow = TempArtifact::new(artifact_dir.join(DATA_FLOW_DIAGRAM_FILE));

    let svg = generator.render_svg(&diagram::architecture_diagram())?;
    fs::write(architecture.path(), svg)?;

    let svg = generator.render_svg(&diagram::data_flow_diagram())?;
    fs::write(data_flow.path(), svg)?;

    // Build and save the report, inlining the diagram files
    let document = generator.build_document(architecture.path(), data_flow.path());
    let html = generator.render_html(&document)?;
    fs::write(output_path, html)?;

    info!(output_file = args.output; "Report exported successfully");

    // The diagrams are inlined now; remove them before reporting success
    drop(architecture);
    drop(data_flow);

    print_summary(&args.output);

    Ok(())
}

fn print_summary(output: &str) {
    println!("{output} created successfully!");
    println!("Document contains:");
    println!("   - Cover page with system information");
    println!("   - Table of contents");
    println!("   - System overview and architecture");
    println!("   - Complete FHIR compliance evidence");
    println!("   - Complete DAK compliance evidence");
    println!("   - Architecture and data flow diagrams");
    println!("   - Compliance summary with detailed tables");
    println!("   - Professional formatting and structure");
}
