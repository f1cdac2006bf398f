//! File processing API for round-trip runs
//!
//! This module provides the entry points the binary drives: parse a
//! processing specification like `generate-text` or `check-json`, read a
//! source file, and produce formatted output.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::retrip::report::Report;
use crate::retrip::runner::{RunError, Runner};

/// Represents the processing stage (what to do with each round trip)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    /// Emit the regenerated blocks
    Generate,
    /// Validate every round trip and report verdicts
    Check,
    /// Stop after parsing and emit AST summaries
    Ast,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "generate-text" or "check-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let parts: Vec<&str> = format_str.split('-').collect();
        if parts.len() != 2 {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        }

        let stage = match parts[0] {
            "generate" => ProcessingStage::Generate,
            "check" => ProcessingStage::Check,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(parts[0].to_string())),
        };

        let format = match parts[1] {
            "text" => OutputFormat::Text,
            "json" => OutputFormat::Json,
            _ => return Err(ProcessingError::InvalidFormatType(parts[1].to_string())),
        };

        // AST summaries only exist in serialized form
        if stage == ProcessingStage::Ast && format == OutputFormat::Text {
            return Err(ProcessingError::InvalidFormatType(
                "Format 'text' not supported for the ast stage (use 'ast-json')".to_string(),
            ));
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all valid processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Generate,
                format: OutputFormat::Text,
            },
            ProcessingSpec {
                stage: ProcessingStage::Generate,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Check,
                format: OutputFormat::Text,
            },
            ProcessingSpec {
                stage: ProcessingStage::Check,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Json,
            },
        ]
    }
}

/// Errors that can occur during processing
#[derive(Debug)]
pub enum ProcessingError {
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    IoError(String),
    Run(RunError),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::Run(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProcessingError {}

impl From<RunError> for ProcessingError {
    fn from(e: RunError) -> Self {
        ProcessingError::Run(e)
    }
}

/// Output of a processing run
#[derive(Debug, Clone, PartialEq)]
pub struct Processed {
    /// Formatted output, ready for the sink
    pub output: String,
    /// False when a check stage found a failing verdict
    pub ok: bool,
}

/// Process a source file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    runner: &Runner,
    configs: &[String],
) -> Result<Processed, ProcessingError> {
    let source = fs::read_to_string(file_path.as_ref())
        .map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_source(&source, spec, runner, configs)
}

/// Process source text according to the given specification
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    runner: &Runner,
    configs: &[String],
) -> Result<Processed, ProcessingError> {
    match (spec.stage, spec.format) {
        (ProcessingStage::Generate, OutputFormat::Text) => {
            let mut out = Vec::new();
            runner.run_suite(source, configs, &mut out)?;
            let output =
                String::from_utf8(out).map_err(|e| ProcessingError::IoError(e.to_string()))?;
            Ok(Processed { output, ok: true })
        }
        (ProcessingStage::Generate, OutputFormat::Json) => {
            let blocks = runner.generate_suite(source, configs)?;
            let entries: Vec<serde_json::Value> = blocks
                .into_iter()
                .map(|(config, regenerated)| {
                    serde_json::json!({ "config": config, "regenerated": regenerated })
                })
                .collect();
            Ok(Processed {
                output: to_json_pretty(&entries)?,
                ok: true,
            })
        }
        (ProcessingStage::Check, format) => {
            let reports = runner.check_suite(source, configs)?;
            let ok = reports.iter().all(Report::passed);
            let output = match format {
                OutputFormat::Text => {
                    let rendered: Vec<String> = reports.iter().map(Report::render_text).collect();
                    rendered.join("\n")
                }
                OutputFormat::Json => to_json_pretty(&reports)?,
            };
            Ok(Processed { output, ok })
        }
        (ProcessingStage::Ast, _) => {
            let summaries = runner.summarize_suite(source, configs)?;
            let entries: Vec<serde_json::Value> = summaries
                .into_iter()
                .map(|(config, summary)| {
                    serde_json::json!({ "config": config, "summary": summary })
                })
                .collect();
            Ok(Processed {
                output: to_json_pretty(&entries)?,
                ok: true,
            })
        }
    }
}

fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String, ProcessingError> {
    serde_json::to_string_pretty(value).map_err(|e| ProcessingError::IoError(e.to_string()))
}
