//! Suite execution over named configurations
//!
//! The runner resolves configuration names against a registry and executes
//! the round trips in order. In print mode each regenerated block goes to
//! the output sink with a line containing only `---` between consecutive
//! blocks, and nothing else is ever written. In check mode every variant
//! is validated and the reports come back for rendering.

use std::fmt;
use std::io::Write;

use crate::retrip::checker::{Checker, RoundTripError};
use crate::retrip::config::{ConfigRegistry, RunConfig};
use crate::retrip::report::Report;
use crate::retrip::summary::AstSummary;

/// Errors during suite execution
#[derive(Debug)]
pub enum RunError {
    ConfigNotFound(String),
    RoundTrip(RoundTripError),
    Io(String),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::ConfigNotFound(name) => write!(f, "Config '{}' not found", name),
            RunError::RoundTrip(e) => write!(f, "{}", e),
            RunError::Io(msg) => write!(f, "Output error: {}", msg),
        }
    }
}

impl std::error::Error for RunError {}

impl From<RoundTripError> for RunError {
    fn from(e: RoundTripError) -> Self {
        RunError::RoundTrip(e)
    }
}

/// Executes round-trip suites
pub struct Runner {
    checker: Checker,
    registry: ConfigRegistry,
}

impl Runner {
    /// Create a runner with the standard configurations
    pub fn new() -> Self {
        Self::with_registry(ConfigRegistry::with_defaults())
    }

    /// Create a runner with a custom registry
    pub fn with_registry(registry: ConfigRegistry) -> Self {
        Runner {
            checker: Checker::new(),
            registry,
        }
    }

    /// Access the underlying registry
    pub fn registry(&self) -> &ConfigRegistry {
        &self.registry
    }

    /// Access the underlying checker
    pub fn checker(&self) -> &Checker {
        &self.checker
    }

    /// Resolve configuration names in order
    fn resolve(&self, names: &[String]) -> Result<Vec<&RunConfig>, RunError> {
        names
            .iter()
            .map(|name| {
                self.registry
                    .get(name)
                    .ok_or_else(|| RunError::ConfigNotFound(name.clone()))
            })
            .collect()
    }

    /// Round-trip the source under each configuration and emit the
    /// regenerated blocks to the sink, delimited by `---` lines
    pub fn run_suite<W: Write>(
        &self,
        source: &str,
        names: &[String],
        out: &mut W,
    ) -> Result<(), RunError> {
        let configs = self.resolve(names)?;
        for (i, config) in configs.iter().enumerate() {
            if i > 0 {
                writeln!(out, "---").map_err(|e| RunError::Io(e.to_string()))?;
            }
            let trip = self.checker.round_trip(source, &config.options)?;
            let mut block = trip.regenerated;
            if !block.ends_with('\n') {
                block.push('\n');
            }
            out.write_all(block.as_bytes())
                .map_err(|e| RunError::Io(e.to_string()))?;
        }
        Ok(())
    }

    /// Round-trip the source under each configuration, collecting the
    /// regenerated blocks instead of writing them
    pub fn generate_suite(
        &self,
        source: &str,
        names: &[String],
    ) -> Result<Vec<(String, String)>, RunError> {
        let configs = self.resolve(names)?;
        let mut blocks = Vec::with_capacity(configs.len());
        for config in configs {
            let trip = self.checker.round_trip(source, &config.options)?;
            blocks.push((config.name.clone(), trip.regenerated));
        }
        Ok(blocks)
    }

    /// Validate the source under each configuration
    pub fn check_suite(&self, source: &str, names: &[String]) -> Result<Vec<Report>, RunError> {
        let configs = self.resolve(names)?;
        let mut reports = Vec::with_capacity(configs.len());
        for config in configs {
            reports.push(self.checker.check(&config.name, source, &config.options)?);
        }
        Ok(reports)
    }

    /// Summarize the source under each configuration without regenerating
    pub fn summarize_suite(
        &self,
        source: &str,
        names: &[String],
    ) -> Result<Vec<(String, AstSummary)>, RunError> {
        let configs = self.resolve(names)?;
        let mut summaries = Vec::with_capacity(configs.len());
        for config in configs {
            let summary = self.checker.summarize(source, &config.options)?;
            summaries.push((config.name.clone(), summary));
        }
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unknown_config_is_reported_by_name() {
        let runner = Runner::new();
        let mut out = Vec::new();
        let err = runner
            .run_suite("f(1);", &names(&["nope"]), &mut out)
            .unwrap_err();
        assert_eq!(err.to_string(), "Config 'nope' not found");
        assert!(out.is_empty());
    }

    #[test]
    fn test_suite_output_is_blocks_and_delimiters_only() {
        let runner = Runner::new();
        let mut out = Vec::new();
        runner
            .run_suite("f(1);", &names(&["loc", "raw"]), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        let delimiters = text.lines().filter(|line| *line == "---").count();
        assert_eq!(delimiters, 1);
        assert!(!text.starts_with("---"));
        assert!(text.ends_with('\n'));

        let blocks: Vec<&str> = text.split("---\n").collect();
        assert_eq!(blocks.len(), 2);
        for block in &blocks {
            assert!(block.contains("f(1)"));
        }
    }

    #[test]
    fn test_single_config_suite_has_no_delimiter() {
        let runner = Runner::new();
        let mut out = Vec::new();
        runner
            .run_suite("f(1);", &names(&["plain"]), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("---"));
    }

    #[test]
    fn test_check_suite_reports_in_request_order() {
        let runner = Runner::new();
        let reports = runner
            .check_suite("var x = 1;", &names(&["raw", "loc"]))
            .unwrap();
        let order: Vec<_> = reports.iter().map(|r| r.config.as_str()).collect();
        assert_eq!(order, vec!["raw", "loc"]);
        assert!(reports.iter().all(|r| r.passed()));
    }
}
