/*
MIT License

Copyright (c) 2026 crysgen developers
*/

//! Error types for input generation

use std::io;
use thiserror::Error;

/// Errors that can occur during d12 input generation
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("unsupported calculation kind: '{0}' (expected SHG, CHI2 or OPT)")]
    UnsupportedKind(String),

    #[error("basis set '{name}' not found in library: {source}")]
    BasisNotFound {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Result type for input-generation operations
pub type Result<T> = std::result::Result<T, GenerateError>;
