//! ECMAScript engine backed by the oxc parser and code generator
//!
//! The engine owns the arena allocator the parser allocates into, so a
//! [`Parsed`] value borrows the engine that produced it. Arena memory is
//! released when the engine is dropped; a checker run creates ASTs, uses
//! them once, and lets them go out of scope.

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_codegen::{CodeGenerator, CodegenOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::retrip::engine::interface::{GenerateError, ParseError};
use crate::retrip::options::ParseOptions;
use crate::retrip::summary::AstSummary;

/// A parsed program, opaque outside the engine module
pub struct Parsed<'a> {
    program: Program<'a>,
}

/// Parser and generator collaborators behind one arena
pub struct Engine {
    allocator: Allocator,
}

impl Engine {
    /// Create an engine with a fresh arena
    pub fn new() -> Self {
        Engine {
            allocator: Allocator::default(),
        }
    }

    /// Parse source text under the given options
    ///
    /// Any diagnostic from the collaborator is treated as a failure: a
    /// checker has no use for a partially recovered AST.
    pub fn parse<'a>(
        &'a self,
        source: &'a str,
        options: &ParseOptions,
    ) -> Result<Parsed<'a>, ParseError> {
        let source_type = SourceType::default().with_module(options.module);
        let ret = Parser::new(&self.allocator, source, source_type).parse();

        if ret.panicked || !ret.errors.is_empty() {
            let messages: Vec<String> = ret.errors.iter().map(|e| e.to_string()).collect();
            let joined = if messages.is_empty() {
                "parser panicked without diagnostics".to_string()
            } else {
                messages.join("; ")
            };
            return Err(ParseError::Syntax(joined));
        }

        Ok(Parsed {
            program: ret.program,
        })
    }

    /// Regenerate source text from a parsed program
    pub fn generate(&self, parsed: &Parsed<'_>) -> Result<String, GenerateError> {
        let regenerated = CodeGenerator::new()
            .with_options(CodegenOptions {
                single_quote: false,
                ..CodegenOptions::default()
            })
            .build(&parsed.program)
            .source_text;

        // A non-empty program rendering to nothing means the AST handed to
        // the generator was malformed; surface it instead of printing air.
        if regenerated.trim().is_empty() && !parsed.program.body.is_empty() {
            return Err(GenerateError::EmptyOutput);
        }

        Ok(regenerated)
    }

    /// Project a parsed program into an owned summary
    ///
    /// Goes through the collaborator's serialized AST form, so the rest of
    /// the crate never depends on its concrete node types.
    pub fn summarize(
        &self,
        parsed: &Parsed<'_>,
        options: &ParseOptions,
    ) -> Result<AstSummary, GenerateError> {
        let value = serde_json::to_value(&parsed.program)
            .map_err(|e| GenerateError::Serialize(e.to_string()))?;
        Ok(AstSummary::from_value(&value, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_script() {
        let engine = Engine::new();
        let parsed = engine.parse("var answer = 42;", &ParseOptions::new());
        assert!(parsed.is_ok());
    }

    #[test]
    fn test_parse_invalid_script_is_a_syntax_error() {
        let engine = Engine::new();
        let result = engine.parse("var = ;", &ParseOptions::new());
        assert!(matches!(result, Err(ParseError::Syntax(_))));
    }

    #[test]
    fn test_generate_round_trips_a_statement() {
        let engine = Engine::new();
        let options = ParseOptions::new();
        let parsed = engine.parse("f(1);", &options).unwrap();
        let regenerated = engine.generate(&parsed).unwrap();
        assert!(regenerated.contains("f(1)"));
    }

    #[test]
    fn test_generate_empty_program_is_empty_not_an_error() {
        let engine = Engine::new();
        let parsed = engine.parse("", &ParseOptions::new()).unwrap();
        let regenerated = engine.generate(&parsed).unwrap();
        assert_eq!(regenerated.trim(), "");
    }

    #[test]
    fn test_summarize_records_node_kinds() {
        let engine = Engine::new();
        let options = ParseOptions::new();
        let parsed = engine.parse("var answer = 42;", &options).unwrap();
        let summary = engine.summarize(&parsed, &options).unwrap();
        assert!(!summary.kinds.is_empty());
        assert!(summary.positions.is_none());
        assert!(summary.raw_literals.is_none());
    }

    #[test]
    fn test_summarize_with_loc_records_positions() {
        let engine = Engine::new();
        let options = ParseOptions::new().with_loc(true);
        let parsed = engine.parse("var answer = 42;", &options).unwrap();
        let summary = engine.summarize(&parsed, &options).unwrap();
        let positions = summary.positions.expect("loc should retain positions");
        assert_eq!(positions.len(), summary.kinds.len());
    }
}
