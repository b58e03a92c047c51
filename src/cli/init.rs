//! Init command - write an example apisig.toml

use anyhow::{Context, Result};
use apisig::config::CONFIG_FILE_NAME;
use console::style;
use std::path::Path;

const EXAMPLE_CONFIG: &str = r#"# apisig configuration

[resolver]
# How type variables render in signatures:
#   "erase" - replaced by their first bound (T extends Foo -> Foo)
#   "keep"  - left as written (T)
type_variables = "erase"

# Rendered for an erased type variable that has no bound
placeholder = "java.lang.Object"

[output]
# Default output format (text, json, api)
format = "text"
"#;

/// Run the init command
pub fn run(path: &Path) -> Result<()> {
    let dir = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;

    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        println!(
            "{} Already initialized at {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    Ok(())
}
