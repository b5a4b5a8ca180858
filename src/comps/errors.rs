/// Errors from the catalog domain layer.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a catalog or writing command output.
#[derive(Debug, Error)]
pub enum CompsError {
    /// The catalog file could not be read.
    #[error("Cannot read catalog '{}': {source}", path.display())]
    Read {
        /// Path of the catalog file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not a valid comps document.
    #[error("Cannot parse catalog '{}': {source}", path.display())]
    Parse {
        /// Path of the catalog file (`<memory>` for in-memory documents).
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: quick_xml::DeError,
    },

    /// Writing command output failed.
    #[error("Cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Exit code mapping for `CompsError` variants.
impl CompsError {
    /// Return the CLI exit code for this error.
    ///
    /// Every failure is fatal with status 1, the same status a usage error uses.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Read { .. } | Self::Parse { .. } | Self::Output(_) => 1,
        }
    }

    /// Machine-readable error code (snake_case) for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "catalog_unreadable",
            Self::Parse { .. } => "catalog_invalid",
            Self::Output(_) => "output_failed",
        }
    }
}
