//! HTML serialization for the report document.
//!
//! Produces a single self-contained page: embedded stylesheet, centered
//! cover block, table of contents, and the five sections. Diagram files are
//! read and inlined at render time, so the output has no external
//! references; a missing diagram file is a hard error.

use std::fs;

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::Error;
use crate::document::{Block, ReportDocument, Section, Table};

/// Report stylesheet, embedded into the document head.
const STYLESHEET: &str = "
    body {
        font-family: 'Times New Roman', Georgia, serif;
        font-size: 12pt;
        line-height: 1.5;
        max-width: 52em;
        margin: 0 auto;
        padding: 2em;
        color: #1a1a1a;
    }
    .cover {
        text-align: center;
        margin: 6em 0 8em 0;
    }
    .cover h1 {
        font-size: 24pt;
        margin-bottom: 3em;
    }
    .toc ul {
        list-style: none;
    }
    .toc li {
        margin: 0.4em 0;
        padding-left: 2em;
    }
    h1 {
        font-size: 16pt;
        border-bottom: 1px solid #999;
        padding-bottom: 0.2em;
        margin-top: 2.5em;
    }
    h2 {
        font-size: 13pt;
        margin-top: 1.8em;
    }
    table {
        border-collapse: collapse;
        width: 100%;
        margin: 1em 0;
        font-size: 10pt;
    }
    th, td {
        border: 1px solid #444;
        padding: 0.4em 0.6em;
        text-align: left;
        vertical-align: top;
    }
    th {
        background: #eee;
    }
    .figure {
        margin: 1.5em 0;
        text-align: center;
    }
    .figure svg {
        max-width: 100%;
        height: auto;
    }
";

/// Serializes the document to a complete HTML page.
///
/// # Errors
///
/// Returns [`Error::Io`] if an embedded diagram file cannot be read.
pub fn render_document(document: &ReportDocument) -> Result<String, Error> {
    // Blocks render ahead of the page assembly so file reads can fail early
    let sections = document
        .sections
        .iter()
        .map(render_section)
        .collect::<Result<Vec<_>, Error>>()?;

    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (document.title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                div class="cover" {
                    h1 { (document.title) }
                    p { "System Name: " (document.system_name) }
                    p { "Author: " (document.author) }
                    p class="date" { "Date: " (document.date) }
                }
                div class="toc" {
                    h1 { "Table of Contents" }
                    ul {
                        @for item in &document.toc {
                            li { (item) }
                        }
                    }
                }
                @for section in &sections {
                    (section)
                }
            }
        }
    };

    Ok(page.into_string())
}

fn render_section(section: &Section) -> Result<Markup, Error> {
    let blocks = section
        .blocks
        .iter()
        .map(render_block)
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(html! {
        section {
            h1 { (section.title) }
            @for block in &blocks {
                (block)
            }
        }
    })
}

fn render_block(block: &Block) -> Result<Markup, Error> {
    let markup = match block {
        Block::Heading { level, text } => match level {
            3 => html! { h3 { (text) } },
            _ => html! { h2 { (text) } },
        },
        Block::Paragraph(text) => html! { p { (text) } },
        Block::Bullets(items) => html! {
            ul {
                @for item in items {
                    li { (item) }
                }
            }
        },
        Block::Table(table) => render_table(table),
        Block::Image { path } => {
            let content = fs::read_to_string(path)?;
            html! {
                div class="figure" {
                    (PreEscaped(content))
                }
            }
        }
    };

    Ok(markup)
}

fn render_table(table: &Table) -> Markup {
    html! {
        table {
            thead {
                tr {
                    @for column in table.columns() {
                        th { (column) }
                    }
                }
            }
            tbody {
                @for row in table.rows() {
                    tr {
                        @for cell in row {
                            td { (cell) }
                        }
                    }
                }
            }
        }
    }
}
