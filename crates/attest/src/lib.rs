//! Attest - generates the FHIR R4 & WHO DAK compliance report for the
//! Healthy Mother maternal health information system.
//!
//! Everything the report states is constant data compiled into this crate:
//! the [`content`] module holds the compliance tables and prose, the
//! [`diagram`] module holds the two illustrative diagram definitions, and
//! [`ReportGenerator`] renders them to SVG and assembles the final HTML
//! document. Nothing is measured or validated at run time; this crate
//! renders pre-decided facts.

pub mod config;
pub mod content;
pub mod diagram;
pub mod document;
pub mod export;

mod error;

pub use error::AttestError;
pub use export::TempArtifact;

use std::path::Path;

use log::{debug, info};

use config::AppConfig;
use diagram::Diagram;
use document::ReportDocument;

/// File name of the intermediate architecture diagram.
pub const ARCHITECTURE_DIAGRAM_FILE: &str = "architecture_diagram.svg";

/// File name of the intermediate data-flow diagram.
pub const DATA_FLOW_DIAGRAM_FILE: &str = "data_flow_diagram.svg";

/// File name of the report document.
pub const REPORT_FILE: &str = "FHIR_DAK_Compliance_Report.html";

/// Renders the diagrams and assembles the report document.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use attest::{ReportGenerator, config::AppConfig};
///
/// let generator = ReportGenerator::new(AppConfig::default());
///
/// let svg = generator
///     .render_svg(&attest::diagram::architecture_diagram())
///     .expect("Failed to render");
/// std::fs::write("architecture_diagram.svg", svg).expect("Failed to write");
///
/// let document = generator.build_document(
///     Path::new("architecture_diagram.svg"),
///     Path::new("data_flow_diagram.svg"),
/// );
/// ```
#[derive(Default)]
pub struct ReportGenerator {
    config: AppConfig,
}

impl ReportGenerator {
    /// Create a new report generator with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Render a diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `AttestError` for an invalid configured background color or
    /// an invalid color in the diagram definition.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, AttestError> {
        info!(title = diagram.title; "Rendering diagram");

        let background = self
            .config
            .style()
            .background_color()
            .map_err(AttestError::Config)?;

        let document = export::svg::render_diagram(diagram, background)?;

        debug!(title = diagram.title; "Diagram rendered");
        Ok(document.to_string())
    }

    /// Assemble the report document, embedding the diagram files at the
    /// given paths. The generation date is computed here.
    pub fn build_document(
        &self,
        architecture_diagram: &Path,
        data_flow_diagram: &Path,
    ) -> ReportDocument {
        info!("Building report document");
        document::build_document(architecture_diagram, data_flow_diagram)
    }

    /// Serialize the report document to an HTML string, inlining the
    /// embedded diagram files.
    ///
    /// # Errors
    ///
    /// Returns `AttestError` if an embedded diagram file cannot be read.
    pub fn render_html(&self, document: &ReportDocument) -> Result<String, AttestError> {
        info!("Serializing report document");
        Ok(export::html::render_document(document)?)
    }
}
