//! # retrip
//!
//! A round-trip checker for ECMAScript source: parse source text into an
//! AST, regenerate source text from that AST, and compare the two sides.
//!
//! Parsing and code generation are delegated to external collaborators;
//! this crate owns the round-trip contract, the named run configurations,
//! and the reporting around them.

pub mod retrip;
