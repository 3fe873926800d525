use crate::analyzers::JavaAnalyzer;
use crate::scan::{find_verdict, scan_source};
use anyhow::{Context, Result};
use std::path::Path;

/// Verdict for a single `Class.method` in `file`
pub fn check_method(file: &Path, method: &str) -> Result<bool> {
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let report = scan_source(&JavaAnalyzer::new(), &source, file)?;
    let verdict = find_verdict(&report.methods, method)
        .with_context(|| format!("No method {} in {}", method, file.display()))?;

    log::debug!("{} -> {:?}", verdict.qualified_name(), verdict.accessor);
    Ok(verdict.is_accessor())
}
