use crate::core::errors::{Error, Result};
use crate::io::output::OutputFormat;
use serde::{Deserialize, Serialize};

/// Root configuration structure for accessormap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AccessormapConfig {
    /// File discovery and parallelism
    #[serde(default)]
    pub scan: ScanConfig,

    /// Report formatting
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScanConfig {
    /// Glob patterns of files to skip, matched against the full path
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Worker threads (0 = one per CPU)
    #[serde(default)]
    pub jobs: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// List every method, not only accessors (default: false)
    #[serde(default)]
    pub show_all: bool,
}

impl AccessormapConfig {
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.scan.exclude {
            glob::Pattern::new(pattern).map_err(|e| {
                Error::Configuration(format!("invalid exclude pattern '{}': {}", pattern, e))
            })?;
        }
        Ok(())
    }
}
