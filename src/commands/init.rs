use crate::config::CONFIG_FILE_NAME;
use anyhow::{Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# accessormap configuration

[scan]
# Glob patterns of files to skip
exclude = [
    "**/build/**",
    "**/target/**",
    "**/generated/**",
]
# Worker threads (0 = one per CPU)
jobs = 0

[output]
# "terminal" or "json"
format = "terminal"
# List every method, not only accessors
show_all = false
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
