//! Parse command - extract signatures from Java source files

use anyhow::{Context, Result};
use apisig::config::{load_config_file, load_project_config, ProjectConfig};
use apisig::reporters::{self, OutputFormat, ParsedSource};
use apisig::resolver::TypeVariableMode;
use apisig::ParserSession;
use console::style;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

pub struct ParseOptions {
    pub files: Vec<PathBuf>,
    pub inner: Option<String>,
    pub format: Option<String>,
    pub keep_type_variables: bool,
    pub config: Option<PathBuf>,
}

/// Run the parse command
pub fn run(options: ParseOptions) -> Result<()> {
    let explicit_config = options
        .config
        .as_deref()
        .map(load_config_file)
        .transpose()?;

    let format = resolve_format(&options, explicit_config.as_ref())?;
    debug!("Rendering as {}", format);

    let mut sources = Vec::with_capacity(options.files.len());
    let mut failed = 0usize;

    for path in &options.files {
        let config = match &explicit_config {
            Some(config) => config.clone(),
            None => load_project_config(config_dir(path)),
        };

        match parse_file(path, options.inner.as_deref(), &config, options.keep_type_variables) {
            Ok(source) => {
                if source.result.error_message.is_some() {
                    failed += 1;
                }
                sources.push(source);
            }
            Err(e) => {
                failed += 1;
                eprintln!("{} {:#}", style("error:").red().bold(), e);
            }
        }
    }

    let output = reporters::report_with_format(&sources, format)?;
    println!("{}", output);

    if failed > 0 {
        anyhow::bail!("{} of {} files failed", failed, options.files.len());
    }
    Ok(())
}

/// --format wins, then the config, then text
fn resolve_format(options: &ParseOptions, explicit: Option<&ProjectConfig>) -> Result<OutputFormat> {
    if let Some(format) = &options.format {
        return OutputFormat::from_str(format);
    }

    let configured = match explicit {
        Some(config) => config.output.format.clone(),
        None => options
            .files
            .first()
            .and_then(|path| load_project_config(config_dir(path)).output.format),
    };

    match configured {
        Some(format) => OutputFormat::from_str(&format).context("Invalid [output] format in config"),
        None => Ok(OutputFormat::default()),
    }
}

fn config_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

fn parse_file(
    path: &Path,
    inner: Option<&str>,
    config: &ProjectConfig,
    keep_type_variables: bool,
) -> Result<ParsedSource> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let mut config = config.clone();
    if keep_type_variables {
        config.resolver.type_variables = TypeVariableMode::Keep;
    }

    let mut session = ParserSession::from_config(&config);
    session
        .parse(&source, inner)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let result = session.into_result();
    info!(
        "{}: {} signatures",
        path.display(),
        result.methods.len()
    );

    Ok(ParsedSource {
        path: path.display().to_string(),
        result,
    })
}
