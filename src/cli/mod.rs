//! CLI command definitions and handlers

mod init;
mod parse;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// apisig - Java API signature extraction
#[derive(Parser, Debug)]
#[command(name = "apisig")]
#[command(
    version,
    about = "Extract canonical, type-resolved method signatures and Javadoc from Java sources",
    after_help = "\
Examples:
  apisig parse DisputeGateway.java                 List public signatures
  apisig parse Proxy.java --inner Proxy$Nested     Only a nested declaration
  apisig parse src/*.java --format api             API model as JSON
  apisig init                                      Write an example apisig.toml"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file (default: apisig.toml next to each source file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write an example apisig.toml
    Init {
        /// Directory to write the config into
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Parse Java sources and print their API signatures
    #[command(after_help = "\
Exit code is 1 when any file fails to parse or the --inner path is missing.")]
    Parse {
        /// Java source files, one session each
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        /// `$`-delimited path of a nested declaration, e.g. Outer$Inner
        #[arg(long)]
        inner: Option<String>,

        /// Output format: text, json, api (default: config or text)
        #[arg(long, short = 'f', value_parser = ["text", "json", "api"])]
        format: Option<String>,

        /// Render type variables as written instead of erasing them to their bound
        #[arg(long)]
        keep_type_variables: bool,
    },
}

/// Run the CLI command
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => init::run(&path),
        Commands::Parse {
            files,
            inner,
            format,
            keep_type_variables,
        } => parse::run(parse::ParseOptions {
            files,
            inner,
            format,
            keep_type_variables,
            config: cli.config,
        }),
    }
}
