//! Exporters for the report's artifacts.
//!
//! [`svg`](crate::export::svg) renders diagrams to SVG documents;
//! [`html`](crate::export::html) serializes the report document to HTML.
//! [`TempArtifact`] owns an intermediate file path for the duration of a
//! run and removes the file on every exit path.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::warn;
use thiserror::Error;

pub mod html;
pub mod svg;

/// Errors raised while exporting diagrams or the document.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid color: {0}")]
    Color(String),
}

/// Scoped ownership of an intermediate artifact file.
///
/// The diagram files exist only so the document serializer can inline them;
/// they must not survive the run. Dropping the guard removes the file,
/// whether the run succeeded or failed. A failed removal is logged and
/// otherwise ignored.
#[derive(Debug)]
pub struct TempArtifact {
    path: PathBuf,
}

impl TempArtifact {
    /// Claims `path` as a temporary artifact.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The claimed path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_file(&self.path) {
            // Nothing was written if the run failed before the first export
            if err.kind() != io::ErrorKind::NotFound {
                warn!(path = self.path.display().to_string(), err:err; "Failed to remove temporary artifact");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_artifact_removes_file_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scratch.svg");

        {
            let artifact = TempArtifact::new(&path);
            fs::write(artifact.path(), "<svg></svg>").unwrap();
            assert!(path.exists());
        }

        assert!(!path.exists());
    }

    #[test]
    fn test_temp_artifact_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never_written.svg");

        // Must not panic when nothing was written
        drop(TempArtifact::new(&path));
        assert!(!path.exists());
    }
}
