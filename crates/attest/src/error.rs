//! Error types for report generation.
//!
//! This module provides the main error type [`AttestError`] which wraps the
//! error conditions that can occur while rendering diagrams and the report
//! document.

use std::io;

use thiserror::Error;

/// The main error type for report generation.
#[derive(Debug, Error)]
pub enum AttestError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for AttestError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
