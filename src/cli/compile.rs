//! Compile JSON-encoded predicates into filter expressions

use super::CliError;
use crate::{Compiler, Predicate};

/// Options for the compile command
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// The predicate tree, JSON-encoded
    pub predicate: String,
    /// Only validate that the predicate decodes, don't compile
    pub parse_only: bool,
}

/// Result of a compile operation
#[derive(Debug)]
pub enum CompileResult {
    /// The predicate JSON decoded into a valid tree
    ParseValid,
    /// Compilation succeeded with the filter expression
    Success(String),
}

/// Execute a compile operation
pub fn execute_compile(options: &CompileOptions) -> Result<CompileResult, CliError> {
    let predicate: Predicate = serde_json::from_str(&options.predicate).map_err(CliError::Json)?;

    if options.parse_only {
        return Ok(CompileResult::ParseValid);
    }

    let mut compiler = Compiler::new();
    let filter = compiler.compile(&predicate).map_err(CliError::Compile)?;

    Ok(CompileResult::Success(filter))
}
