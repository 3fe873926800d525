use crate::config::{load_config, load_config_from, AccessormapConfig};
use crate::io::output::{create_writer, OutputFormat};
use crate::scan::scan_paths;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct ScanCommand {
    pub path: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub jobs: Option<usize>,
    pub all: bool,
}

impl ScanCommand {
    /// Command-line flags take precedence over the config file
    fn resolve_config(&self) -> Result<AccessormapConfig> {
        let mut config = match &self.config {
            Some(path) => load_config_from(path)?,
            None => load_config(),
        };
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(jobs) = self.jobs {
            config.scan.jobs = jobs;
        }
        config.output.show_all |= self.all;
        Ok(config)
    }
}

pub fn handle_scan(command: ScanCommand) -> Result<()> {
    let config = command.resolve_config()?;
    let report = scan_paths(&command.path, &config.scan)
        .with_context(|| format!("Failed to scan {}", command.path.display()))?;

    let sink: Box<dyn Write> = match &command.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let mut writer = create_writer(config.output.format, config.output.show_all, sink);
    writer.write_report(&report)
}
