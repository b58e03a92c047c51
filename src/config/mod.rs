//! Configuration module for apisig
//!
//! This module handles:
//! - Project-level configuration (apisig.toml)
//! - Type variable rendering
//! - CLI output defaults

mod project_config;

pub use project_config::{
    load_config_file, load_project_config, OutputConfig, ProjectConfig, ResolverConfig,
    CONFIG_FILE_NAME,
};
