/*
MIT License

Copyright (c) 2026 crysgen developers
*/

//! Error types for report scanning

use thiserror::Error;

/// Errors that can occur while reading a CRYSTAL output report.
///
/// Malformed report content is never an error: the scanner skips anything it
/// does not recognize. Only the surrounding file I/O can fail.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to read report '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
