//! The report document model and its assembly.
//!
//! A [`ReportDocument`] is an ordered sequence of [`Section`]s, each an
//! ordered sequence of [`Block`]s. [`build_document`] assembles the full
//! report from the constant tables in [`content`](crate::content); the
//! document is built once, serialized once, and never mutated after that.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::content;

/// A table: fixed column headers plus data rows in source order.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table from column headers and rows.
    ///
    /// Row arity must match the header count; a mismatch is a programmer
    /// error in the content tables, not a runtime condition.
    pub fn new(columns: impl Into<Vec<&'static str>>, rows: Vec<Vec<String>>) -> Self {
        let columns = columns.into();
        for row in &rows {
            debug_assert_eq!(
                row.len(),
                columns.len(),
                "table row arity does not match its header"
            );
        }
        Self { columns, rows }
    }

    /// Column headers.
    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    /// Data rows, in source order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// One block of document content.
#[derive(Debug, Clone)]
pub enum Block {
    /// A sub-heading inside a section; `level` follows HTML heading levels.
    Heading { level: u8, text: &'static str },
    Paragraph(&'static str),
    Bullets(Vec<&'static str>),
    Table(Table),
    /// An embedded image, referenced by the file path the diagram renderer
    /// wrote. The file is read when the document is serialized.
    Image { path: PathBuf },
}

/// A titled top-level section.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: &'static str,
    pub blocks: Vec<Block>,
}

/// The complete report: cover block, table of contents, and five sections.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub title: &'static str,
    pub system_name: &'static str,
    pub author: &'static str,
    /// Generation date, formatted at build time.
    pub date: String,
    pub toc: Vec<&'static str>,
    pub sections: Vec<Section>,
}

/// Assembles the report document, embedding the two diagram files at the
/// given paths. The generation date is computed here.
pub fn build_document(architecture_diagram: &Path, data_flow_diagram: &Path) -> ReportDocument {
    let date = Local::now().format("%B %d, %Y").to_string();

    let sections = vec![
        system_overview(),
        fhir_compliance(),
        dak_compliance(),
        architecture_and_interoperability(architecture_diagram, data_flow_diagram),
        compliance_summary(),
    ];

    ReportDocument {
        title: content::REPORT_TITLE,
        system_name: content::SYSTEM_NAME,
        author: content::AUTHOR,
        date,
        toc: content::SECTION_TITLES.to_vec(),
        sections,
    }
}

fn system_overview() -> Section {
    Section {
        title: content::SECTION_TITLES[0],
        blocks: vec![
            Block::Heading {
                level: 2,
                text: "Purpose of the System",
            },
            Block::Paragraph(content::PURPOSE_PARAGRAPH),
            Block::Heading {
                level: 2,
                text: "Intended Use Cases",
            },
            Block::Bullets(content::USE_CASES.to_vec()),
            Block::Heading {
                level: 2,
                text: "General Architecture Description",
            },
            Block::Paragraph(content::ARCHITECTURE_PARAGRAPH),
            Block::Bullets(content::ARCHITECTURE_LAYERS.to_vec()),
        ],
    }
}

fn fhir_compliance() -> Section {
    let resources = Table::new(
        content::FHIR_RESOURCE_COLUMNS,
        content::FHIR_RESOURCES
            .iter()
            .map(|row| {
                vec![
                    row.resource.to_string(),
                    row.table.to_string(),
                    row.endpoint.to_string(),
                    row.evidence.to_string(),
                ]
            })
            .collect(),
    );

    let endpoints = Table::new(
        content::FHIR_ENDPOINT_COLUMNS,
        content::FHIR_ENDPOINTS
            .iter()
            .map(|row| {
                vec![
                    row.endpoint.to_string(),
                    row.method.to_string(),
                    row.description.to_string(),
                ]
            })
            .collect(),
    );

    Section {
        title: content::SECTION_TITLES[1],
        blocks: vec![
            Block::Paragraph(content::FHIR_INTRO_PARAGRAPH),
            Block::Heading {
                level: 2,
                text: "FHIR Resource Implementation",
            },
            Block::Table(resources),
            Block::Heading {
                level: 2,
                text: "FHIR API Endpoints",
            },
            Block::Table(endpoints),
        ],
    }
}

fn dak_compliance() -> Section {
    let decision_points = Table::new(
        content::DECISION_POINT_COLUMNS,
        content::DECISION_POINTS
            .iter()
            .map(|row| {
                vec![
                    row.code.to_string(),
                    row.feature.to_string(),
                    row.evidence.to_string(),
                    row.description.to_string(),
                ]
            })
            .collect(),
    );

    let indicators = Table::new(
        content::INDICATOR_COLUMNS,
        content::INDICATORS
            .iter()
            .map(|row| {
                vec![
                    row.code.to_string(),
                    row.name.to_string(),
                    row.target.to_string(),
                    row.evidence.to_string(),
                ]
            })
            .collect(),
    );

    Section {
        title: content::SECTION_TITLES[2],
        blocks: vec![
            Block::Paragraph(content::DAK_INTRO_PARAGRAPH),
            Block::Heading {
                level: 2,
                text: "DAK Decision Points Implementation",
            },
            Block::Table(decision_points),
            Block::Heading {
                level: 2,
                text: "DAK Indicators Implementation",
            },
            Block::Table(indicators),
        ],
    }
}

fn architecture_and_interoperability(
    architecture_diagram: &Path,
    data_flow_diagram: &Path,
) -> Section {
    Section {
        title: content::SECTION_TITLES[3],
        blocks: vec![
            Block::Paragraph(content::INTEROP_PARAGRAPH),
            Block::Heading {
                level: 2,
                text: "Interoperability Features",
            },
            Block::Bullets(content::INTEROP_FEATURES.to_vec()),
            Block::Heading {
                level: 2,
                text: "System Architecture",
            },
            Block::Image {
                path: architecture_diagram.to_path_buf(),
            },
            Block::Heading {
                level: 2,
                text: "Data Flow Architecture",
            },
            Block::Image {
                path: data_flow_diagram.to_path_buf(),
            },
        ],
    }
}

fn compliance_summary() -> Section {
    let summary = Table::new(
        content::COMPLIANCE_COLUMNS,
        content::COMPLIANCE_SUMMARY
            .iter()
            .map(|row| {
                vec![
                    row.standard.to_string(),
                    row.level.to_string(),
                    row.achievements.to_string(),
                ]
            })
            .collect(),
    );

    let mut blocks = vec![
        Block::Paragraph(content::SUMMARY_PARAGRAPH),
        Block::Heading {
            level: 2,
            text: "Compliance Level Summary",
        },
        Block::Table(summary),
        Block::Heading {
            level: 2,
            text: "Conclusion",
        },
    ];
    blocks.extend(content::CONCLUSION_PARAGRAPHS.into_iter().map(Block::Paragraph));

    Section {
        title: content::SECTION_TITLES[4],
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn document() -> ReportDocument {
        build_document(
            Path::new("architecture_diagram.svg"),
            Path::new("data_flow_diagram.svg"),
        )
    }

    #[test]
    fn test_document_has_five_sections_in_order() {
        let doc = document();
        assert_eq!(doc.sections.len(), 5);
        for (section, title) in doc.sections.iter().zip(content::SECTION_TITLES) {
            assert_eq!(section.title, title);
        }
    }

    #[test]
    fn test_toc_matches_section_titles() {
        let doc = document();
        let titles: Vec<_> = doc.sections.iter().map(|s| s.title).collect();
        assert_eq!(doc.toc, titles);
    }

    #[test]
    fn test_fhir_section_tables() {
        let doc = document();
        let tables: Vec<&Table> = doc.sections[1]
            .blocks
            .iter()
            .filter_map(|block| match block {
                Block::Table(table) => Some(table),
                _ => None,
            })
            .collect();

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows().len(), 8);
        assert_eq!(tables[0].columns().len(), 4);
        assert_eq!(tables[0].rows()[0][0], "Patient");
        assert_eq!(tables[1].rows().len(), 9);
        assert_eq!(tables[1].columns().len(), 3);
    }

    #[test]
    fn test_dak_section_tables() {
        let doc = document();
        let tables: Vec<&Table> = doc.sections[2]
            .blocks
            .iter()
            .filter_map(|block| match block {
                Block::Table(table) => Some(table),
                _ => None,
            })
            .collect();

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows().len(), 14);
        assert_eq!(tables[0].rows()[0][0], "ANC.DT.01");
        assert_eq!(tables[0].rows()[13][0], "ANC.DT.14");
        assert_eq!(tables[1].rows().len(), 10);
        assert_eq!(tables[1].rows()[9][0], "ANC.IND.10");
    }

    #[test]
    fn test_architecture_section_embeds_both_diagrams() {
        let doc = document();
        let images: Vec<&Path> = doc.sections[3]
            .blocks
            .iter()
            .filter_map(|block| match block {
                Block::Image { path } => Some(path.as_path()),
                _ => None,
            })
            .collect();

        assert_eq!(images.len(), 2);
        assert_eq!(images[0], Path::new("architecture_diagram.svg"));
        assert_eq!(images[1], Path::new("data_flow_diagram.svg"));
    }

    #[test]
    fn test_summary_section_table_and_conclusion() {
        let doc = document();
        let section = &doc.sections[4];

        let table = section
            .blocks
            .iter()
            .find_map(|block| match block {
                Block::Table(table) => Some(table),
                _ => None,
            })
            .expect("summary table");
        assert_eq!(table.rows().len(), 10);

        let paragraphs = section
            .blocks
            .iter()
            .filter(|block| matches!(block, Block::Paragraph(_)))
            .count();
        // Intro plus the two conclusion paragraphs
        assert_eq!(paragraphs, 3);
    }
}
