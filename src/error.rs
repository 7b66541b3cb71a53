use std::path::PathBuf;
use thiserror::Error;

use crate::reconcile::ReconciliationReport;

/// The main error type for imgcheck operations.
#[derive(Debug, Error)]
pub enum ImgcheckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory {path} could not be found")]
    MissingDirectory { path: PathBuf },

    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("Directory {path} is empty")]
    EmptyDirectory { path: PathBuf },

    #[error("Failed to read directory {path}: {source}")]
    Traverse {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing images, extra images, or faulty image paths")]
    ValidationFailed { report: ReconciliationReport },

    #[error("Failed to write JSON report: {0}")]
    JsonWrite(#[from] serde_json::Error),

    #[error("Unsupported output format: {0}")]
    UnsupportedOutput(String),
}

impl ImgcheckError {
    /// Returns true for errors raised by a structural precondition on the
    /// documentation tree, as opposed to reference discrepancies.
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            ImgcheckError::MissingDirectory { .. }
                | ImgcheckError::NotADirectory { .. }
                | ImgcheckError::EmptyDirectory { .. }
        )
    }
}
