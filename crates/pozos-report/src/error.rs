//! Application-wide error types using thiserror.

use pozos_common::PozosError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// Loading, aggregation or rendering failed.
    #[error(transparent)]
    Pozos(#[from] PozosError),

    /// The tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl ReportError {
    /// True when the run stopped because the input could not be read.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Pozos(err) if err.is_input_error())
    }
}

/// Result type for the report application.
pub type ReportResult<T> = Result<T, ReportError>;
