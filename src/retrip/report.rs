//! Round-trip reports and verdicts
//!
//! A [`Report`] holds one configuration's regenerated text, the AST
//! summary it was produced from, and the verdicts of the validation
//! passes. Reports render as plain text for humans or as JSON for
//! tooling.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::retrip::summary::AstSummary;

/// Outcome of one validation pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail(String),
    Skipped,
}

impl Verdict {
    /// A verdict counts as passed unless it failed outright
    pub fn passed(&self) -> bool {
        !matches!(self, Verdict::Fail(_))
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "pass"),
            Verdict::Fail(msg) => write!(f, "fail: {}", msg),
            Verdict::Skipped => write!(f, "skipped"),
        }
    }
}

/// Validated result of one round trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Name of the run configuration that produced this report
    pub config: String,
    /// The regenerated source text
    pub regenerated: String,
    /// Summary of the original parse
    pub summary: AstSummary,
    /// Whether the original and regenerated text match up to whitespace
    pub text_match: bool,
    /// The regenerated text parses under the same options
    pub reparse: Verdict,
    /// Node-kind sequences of both sides match
    pub kinds: Verdict,
    /// Literal token texts survived the trip
    pub literals: Verdict,
}

impl Report {
    /// True when no validation pass failed
    pub fn passed(&self) -> bool {
        self.reparse.passed() && self.kinds.passed() && self.literals.passed()
    }

    /// Render the report as plain text
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("config: {}\n", self.config));
        out.push_str(&format!(
            "verdicts: reparse={}, kinds={}, literals={}\n",
            self.reparse, self.kinds, self.literals
        ));
        out.push_str(&format!(
            "nodes: {}, text: {}\n",
            self.summary.node_count(),
            if self.text_match {
                "whitespace-equivalent"
            } else {
                "reformatted"
            }
        ));
        out.push_str("regenerated:\n");
        for line in self.regenerated.lines() {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Textual equivalence up to whitespace
///
/// Token differences in spacing are expected between a hand-written
/// snippet and generator output; this comparison ignores them and nothing
/// else.
pub fn loose_text_eq(a: &str, b: &str) -> bool {
    WHITESPACE.replace_all(a, "") == WHITESPACE.replace_all(b, "")
}
