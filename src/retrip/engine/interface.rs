//! Shared error interface for engine collaborators

use std::fmt;

/// Errors raised when the external parser rejects source text
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The source text violates the grammar; carries the collaborator's diagnostics
    Syntax(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors raised when the external generator cannot render an AST
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// The generator produced no output for a non-empty program
    EmptyOutput,
    /// The AST could not be serialized for summarization
    Serialize(String),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::EmptyOutput => {
                write!(f, "Generate error: no output for a non-empty program")
            }
            GenerateError::Serialize(msg) => write!(f, "Generate error: {}", msg),
        }
    }
}

impl std::error::Error for GenerateError {}
