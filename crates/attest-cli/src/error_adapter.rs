//! Error adapter for converting AttestError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. Attest
//! errors carry no source-code spans, so the adapter only supplies stable
//! codes and messages.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use attest::AttestError;

/// Adapter implementing [`MietteDiagnostic`] for [`AttestError`].
pub struct ErrorAdapter<'a>(pub &'a AttestError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            AttestError::Io(_) => "attest::io",
            AttestError::Config(_) => "attest::config",
            AttestError::Export(_) => "attest::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            AttestError::Config(_) => Some(Box::new(
                "check the [style] section of the configuration file",
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn test_config_error_code_and_help() {
        let err = AttestError::Config("bad color".to_string());
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "attest::config");
        assert!(adapter.help().is_some());
        assert_eq!(adapter.to_string(), "Configuration error: bad color");
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = AttestError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "attest::io");
        assert!(adapter.source().is_some());
    }
}
