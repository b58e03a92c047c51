//! Text (terminal) reporter with colors and formatting

use super::api::method_name_of;
use super::ParsedSource;
use crate::session::ParseResult;
use anyhow::Result;
use console::style;
use std::fmt::Write;

/// Render results as formatted terminal output
pub fn render(sources: &[ParsedSource]) -> Result<String> {
    let mut out = String::new();
    for source in sources {
        render_one(&mut out, source)?;
    }
    Ok(out)
}

fn render_one(out: &mut String, source: &ParsedSource) -> Result<()> {
    let result = &source.result;

    writeln!(out, "\n{}", style(&source.path).bold())?;
    writeln!(out, "{}", style("──────────────────────────────────────").dim())?;

    if let Some(error) = &result.error_message {
        writeln!(out, "{} {}", style("error:").red().bold(), error)?;
        return Ok(());
    }

    if let Some(class_name) = &result.class_name {
        writeln!(out, "Class: {}", style(class_name).cyan())?;
    }
    if !result.api_description.is_empty() {
        writeln!(out, "{}", style(&result.api_description).italic())?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "{} ({} total)",
        style("METHODS").bold(),
        result.methods.len()
    )?;
    for signature in &result.methods {
        render_signature(out, result, signature)?;
    }

    Ok(())
}

fn render_signature(out: &mut String, result: &ParseResult, signature: &str) -> Result<()> {
    writeln!(out, "  {}", style(signature).green())?;

    let Some(args) = result.signature_arguments.get(signature) else {
        return Ok(());
    };
    let docs = result.parameters.get(method_name_of(signature));

    for (name, ty) in args {
        match docs.and_then(|d| d.get(name)).filter(|d| !d.is_empty()) {
            Some(doc) => writeln!(out, "      {} {}  {}", ty, name, style(doc).dim())?,
            None => writeln!(out, "      {} {}", ty, name)?,
        }
    }
    Ok(())
}
