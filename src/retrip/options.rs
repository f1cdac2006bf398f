//! Parse options for round-trip runs
//!
//! The two observable toggles mirror the metadata switches of the external
//! parser: `loc` retains source position ranges on the AST summary, `raw`
//! retains the original literal token text alongside interpreted values.
//! The toggles are independent and never influence the regenerated text,
//! only which metadata the checker keeps and validates.

use serde::{Deserialize, Serialize};

/// Metadata toggles applied to a single parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Retain source position ranges for each node
    pub loc: bool,
    /// Retain original literal token text alongside interpreted values
    pub raw: bool,
    /// Parse with the module goal instead of the script goal
    pub module: bool,
}

impl ParseOptions {
    /// Options with every toggle off
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `loc` toggle
    pub fn with_loc(mut self, yes: bool) -> Self {
        self.loc = yes;
        self
    }

    /// Set the `raw` toggle
    pub fn with_raw(mut self, yes: bool) -> Self {
        self.raw = yes;
        self
    }

    /// Set the parse goal to module
    pub fn with_module(mut self, yes: bool) -> Self {
        self.module = yes;
        self
    }
}
