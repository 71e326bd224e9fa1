//! CLI support for ofilter
//!
//! Provides programmatic access to the CLI functionality for embedding
//! in other tools.

mod compile;

pub use compile::{execute_compile, CompileOptions, CompileResult};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Predicate JSON could not be decoded
    Json(serde_json::Error),
    /// Compilation error
    Compile(crate::CompileError),
    /// IO error
    Io(io::Error),
    /// No predicate provided
    NoInput,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e) => write!(f, "Invalid predicate JSON: {}", e),
            CliError::Compile(e) => write!(f, "Compile error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => {
                write!(f, "No predicate provided. Pass it as an argument or pipe JSON to stdin.")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Json(e) => Some(e),
            CliError::Compile(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::NoInput => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<crate::CompileError> for CliError {
    fn from(e: crate::CompileError) -> Self {
        CliError::Compile(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
