//! Output reporters for parse results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - The raw parse results as JSON
//! - `api` - The API model consumed by code generators, as JSON

mod api;
mod json;
mod text;

pub use api::{camel_case_to_dash, ApiMethodModel, ApiModel, ApiOptionModel};

use crate::session::ParseResult;
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Api,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "api" => Ok(OutputFormat::Api),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, api",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Api => write!(f, "api"),
        }
    }
}

/// Result of parsing one source file
#[derive(Debug, Clone, Serialize)]
pub struct ParsedSource {
    pub path: String,
    pub result: ParseResult,
}

/// Render results in the specified format
pub fn report(sources: &[ParsedSource], format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(sources, fmt)
}

/// Render results using an OutputFormat enum
pub fn report_with_format(sources: &[ParsedSource], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(sources),
        OutputFormat::Json => json::render(sources),
        OutputFormat::Api => api::render(sources),
    }
}
