//! Project-level configuration support
//!
//! Loads configuration from an `apisig.toml` next to the parsed sources, or
//! from an explicit path.
//!
//! # Configuration Format
//!
//! ```toml
//! # apisig.toml
//!
//! [resolver]
//! type_variables = "erase"   # or "keep"
//! placeholder = "java.lang.Object"
//!
//! [output]
//! format = "api"
//! ```

use crate::resolver::{TypeResolver, TypeVariableMode, DEFAULT_PLACEHOLDER};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "apisig.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// How type references are rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub type_variables: TypeVariableMode,

    /// Rendered for an erased type variable without a bound
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            type_variables: TypeVariableMode::default(),
            placeholder: default_placeholder(),
        }
    }
}

impl ResolverConfig {
    pub fn to_resolver(&self) -> TypeResolver {
        TypeResolver::new(self.type_variables, self.placeholder.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format (text, json, api)
    #[serde(default)]
    pub format: Option<String>,
}

/// Load `apisig.toml` from a directory.
///
/// Returns default configuration if the file is missing or unreadable.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() {
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded project config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Load configuration from an explicit TOML file
pub fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: ProjectConfig = toml::from_str(&content)
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    Ok(config)
}
