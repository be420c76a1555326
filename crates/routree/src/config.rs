// File: src/config.rs
// Purpose: Routing table options, loadable from routree.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Routing table options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP methods to register, in emission order.
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,

    /// Force a trailing `/` on paths whose action contributes no final
    /// segment of its own.
    #[serde(default = "default_false")]
    pub end_slash: bool,

    /// Name of the action treated as a route's default entry point. It
    /// contributes no path segment and is what bare parent references
    /// resolve to.
    #[serde(default = "default_index_action")]
    pub index_action: String,

    /// Which source attribute a tree loader reads parameter lists from.
    /// The core itself always consumes the normalized `params` field.
    #[serde(default = "default_params_attribute")]
    pub params_attribute: String,

    #[serde(default)]
    pub load: LoadConfig,
}

/// Contract settings for tree loaders. The core never reads these; they
/// ride along so one file configures both halves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Pattern a file name must match to become an action.
    #[serde(default = "default_filter")]
    pub filter_files: String,

    /// Pattern a folder name must match to become a route.
    #[serde(default = "default_filter")]
    pub filter_folders: String,

    /// File name that defines a route's own attributes.
    #[serde(default = "default_index_file")]
    pub index_file: String,

    #[serde(default = "default_true")]
    pub recurse: bool,
}

// Default values
fn default_methods() -> Vec<String> {
    vec!["get".to_string(), "post".to_string()]
}

fn default_index_action() -> String {
    "index".to_string()
}

fn default_params_attribute() -> String {
    "params".to_string()
}

fn default_filter() -> String {
    "^[^._].*$".to_string()
}

fn default_index_file() -> String {
    "_index".to_string()
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Self {
            methods: default_methods(),
            end_slash: false,
            index_action: default_index_action(),
            params_attribute: default_params_attribute(),
            load: LoadConfig::default(),
        }
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            filter_files: default_filter(),
            filter_folders: default_filter(),
            index_file: default_index_file(),
            recurse: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file. A missing or empty file
    /// yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./routree.toml).
    pub fn load_default() -> Result<Self> {
        Self::load("routree.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.methods, vec!["get", "post"]);
        assert!(!config.end_slash);
        assert_eq!(config.index_action, "index");
        assert_eq!(config.params_attribute, "params");
        assert_eq!(config.load.index_file, "_index");
        assert!(config.load.recurse);
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.methods, vec!["get", "post"]);
        assert_eq!(config.index_action, "index");
    }

    #[test]
    fn test_custom_config() {
        let toml = r#"
            methods = ["get", "post", "put"]
            end_slash = true
            index_action = "view"

            [load]
            recurse = false
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.methods, vec!["get", "post", "put"]);
        assert!(config.end_slash);
        assert_eq!(config.index_action, "view");
        assert!(!config.load.recurse);
        // untouched sections keep their defaults
        assert_eq!(config.load.index_file, "_index");
    }
}
