//! Named run configurations
//!
//! A run configuration binds a name to a set of parse options. The
//! registry ships the standard variants and accepts additional ones from a
//! YAML file, so a fixture suite can define its own set.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::retrip::options::ParseOptions;

/// A named set of parse options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub options: ParseOptions,
}

/// Errors while building a registry from a file
#[derive(Debug, Clone)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Config file error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// File shape for user-supplied registries
#[derive(Debug, Deserialize)]
struct RegistryFile {
    configs: Vec<RunConfig>,
}

/// Registry of run configurations
pub struct ConfigRegistry {
    configs: HashMap<String, RunConfig>,
}

impl ConfigRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ConfigRegistry {
            configs: HashMap::new(),
        }
    }

    /// Register a configuration, replacing any existing one with the same name
    pub fn register(&mut self, config: RunConfig) {
        self.configs.insert(config.name.clone(), config);
    }

    /// Get a configuration by name
    pub fn get(&self, name: &str) -> Option<&RunConfig> {
        self.configs.get(name)
    }

    /// Check if a configuration exists
    pub fn has(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    /// List all configurations (sorted by name)
    pub fn list_all(&self) -> Vec<&RunConfig> {
        let mut configs: Vec<_> = self.configs.values().collect();
        configs.sort_by(|a, b| a.name.cmp(&b.name));
        configs
    }

    /// Create registry with the standard variants
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(RunConfig {
            name: "loc".into(),
            description: "Retain source position ranges on the AST summary".into(),
            options: ParseOptions::new().with_loc(true),
        });

        registry.register(RunConfig {
            name: "raw".into(),
            description: "Retain original literal token text on the AST summary".into(),
            options: ParseOptions::new().with_raw(true),
        });

        registry.register(RunConfig {
            name: "plain".into(),
            description: "No metadata retained; regeneration only".into(),
            options: ParseOptions::new(),
        });

        registry
    }

    /// Merge configurations from a YAML document into this registry
    pub fn merge_yaml_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let file: RegistryFile =
            serde_yaml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        for config in file.configs {
            self.register(config);
        }
        Ok(())
    }

    /// Merge configurations from a YAML file into this registry
    pub fn merge_yaml_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        self.merge_yaml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_the_two_standard_variants() {
        let registry = ConfigRegistry::with_defaults();
        assert!(registry.has("loc"));
        assert!(registry.has("raw"));
        assert!(registry.has("plain"));
        assert!(registry.get("loc").unwrap().options.loc);
        assert!(registry.get("raw").unwrap().options.raw);
        assert!(!registry.get("plain").unwrap().options.loc);
    }

    #[test]
    fn test_list_all_is_sorted_by_name() {
        let registry = ConfigRegistry::with_defaults();
        let names: Vec<_> = registry.list_all().iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["loc", "plain", "raw"]);
    }

    #[test]
    fn test_merge_yaml_adds_and_overrides() {
        let mut registry = ConfigRegistry::with_defaults();
        let yaml = r#"
configs:
  - name: module-loc
    description: Module goal with positions
    options:
      loc: true
      module: true
  - name: plain
    description: Replaced
"#;
        registry.merge_yaml_str(yaml).unwrap();

        let added = registry.get("module-loc").unwrap();
        assert!(added.options.loc);
        assert!(added.options.module);
        assert!(!added.options.raw);
        assert_eq!(registry.get("plain").unwrap().description, "Replaced");
    }

    #[test]
    fn test_merge_invalid_yaml_is_a_parse_error() {
        let mut registry = ConfigRegistry::new();
        let result = registry.merge_yaml_str("configs: {not: a list}");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
