//! The round-trip checker
//!
//! One round trip is: parse source text into an AST, regenerate source
//! text from that AST. [`Checker::round_trip`] does exactly that and hands
//! back the regenerated text with its summary. [`Checker::check`] is the
//! validating form: the regenerated text must re-parse, its node-kind
//! sequence must match the original's, and under `raw` the literal token
//! texts must survive the trip.
//!
//! Everything here is sequential and synchronous; an AST lives for one
//! round trip and is discarded.

use std::fmt;

use crate::retrip::engine::{Engine, GenerateError, ParseError};
use crate::retrip::options::ParseOptions;
use crate::retrip::report::{loose_text_eq, Report, Verdict};
use crate::retrip::summary::AstSummary;

/// Errors that abort a round trip
#[derive(Debug, Clone, PartialEq)]
pub enum RoundTripError {
    /// The input source text did not parse
    Parse(ParseError),
    /// The generator could not render the AST
    Generate(GenerateError),
}

impl fmt::Display for RoundTripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundTripError::Parse(e) => write!(f, "{}", e),
            RoundTripError::Generate(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RoundTripError {}

impl From<ParseError> for RoundTripError {
    fn from(e: ParseError) -> Self {
        RoundTripError::Parse(e)
    }
}

impl From<GenerateError> for RoundTripError {
    fn from(e: GenerateError) -> Self {
        RoundTripError::Generate(e)
    }
}

/// Result of one parse/regenerate pass
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTrip {
    /// The regenerated source text
    pub regenerated: String,
    /// Summary of the AST the text was regenerated from
    pub summary: AstSummary,
}

/// Runs round trips against the engine collaborators
pub struct Checker {
    engine: Engine,
}

impl Checker {
    /// Create a checker with a fresh engine
    pub fn new() -> Self {
        Checker {
            engine: Engine::new(),
        }
    }

    /// Parse source text and regenerate it once
    pub fn round_trip(
        &self,
        source: &str,
        options: &ParseOptions,
    ) -> Result<RoundTrip, RoundTripError> {
        let parsed = self.engine.parse(source, options)?;
        let summary = self.engine.summarize(&parsed, options)?;
        let regenerated = self.engine.generate(&parsed)?;
        Ok(RoundTrip {
            regenerated,
            summary,
        })
    }

    /// Parse source text and summarize it without regenerating
    pub fn summarize(
        &self,
        source: &str,
        options: &ParseOptions,
    ) -> Result<AstSummary, RoundTripError> {
        let parsed = self.engine.parse(source, options)?;
        Ok(self.engine.summarize(&parsed, options)?)
    }

    /// Round-trip source text and validate the result
    ///
    /// A failure to re-parse the regenerated text is a finding in the
    /// report, not an abort: the input was valid, the output was not.
    pub fn check(
        &self,
        config_name: &str,
        source: &str,
        options: &ParseOptions,
    ) -> Result<Report, RoundTripError> {
        let trip = self.round_trip(source, options)?;

        let (reparse, kinds, literals) = match self.summarize(&trip.regenerated, options) {
            Err(RoundTripError::Parse(e)) => (
                Verdict::Fail(format!("regenerated text did not parse: {}", e)),
                Verdict::Skipped,
                Verdict::Skipped,
            ),
            Err(e) => return Err(e),
            Ok(regenerated_summary) => {
                let kinds = compare_kinds(&trip.summary, &regenerated_summary);
                let literals = if options.raw {
                    compare_literals(&trip.summary, &regenerated_summary)
                } else {
                    Verdict::Skipped
                };
                (Verdict::Pass, kinds, literals)
            }
        };

        Ok(Report {
            config: config_name.to_string(),
            text_match: loose_text_eq(source, &trip.regenerated),
            regenerated: trip.regenerated,
            summary: trip.summary,
            reparse,
            kinds,
            literals,
        })
    }
}

/// Compare node-kind sequences of the two sides of a round trip
fn compare_kinds(original: &AstSummary, regenerated: &AstSummary) -> Verdict {
    if original.kinds == regenerated.kinds {
        return Verdict::Pass;
    }
    let diverged = original
        .kinds
        .iter()
        .zip(regenerated.kinds.iter())
        .position(|(a, b)| a != b);
    match diverged {
        Some(i) => Verdict::Fail(format!(
            "node kinds diverge at index {}: {} vs {}",
            i, original.kinds[i], regenerated.kinds[i]
        )),
        None => Verdict::Fail(format!(
            "node counts differ: {} vs {}",
            original.node_count(),
            regenerated.node_count()
        )),
    }
}

/// Compare retained literal token texts of the two sides
fn compare_literals(original: &AstSummary, regenerated: &AstSummary) -> Verdict {
    let (Some(before), Some(after)) = (&original.raw_literals, &regenerated.raw_literals) else {
        return Verdict::Skipped;
    };
    if before == after {
        return Verdict::Pass;
    }
    let diverged = before.iter().zip(after.iter()).find(|(a, b)| a != b);
    match diverged {
        Some((a, b)) => Verdict::Fail(format!(
            "literal text changed: {:?} regenerated as {:?}",
            a.raw, b.raw
        )),
        None => Verdict::Fail(format!(
            "literal counts differ: {} vs {}",
            before.len(),
            after.len()
        )),
    }
}
