use crate::scan::{FileReport, ScanReport};
use clap::ValueEnum;
use colored::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ScanReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ScanReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    show_all: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, show_all: bool) -> Self {
        Self { writer, show_all }
    }

    fn write_header(&mut self, report: &ScanReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Accessor Report".bold().blue())?;
        writeln!(self.writer, "{}", "===============".blue())?;
        writeln!(self.writer, "Root: {}", report.root.display())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_file(&mut self, file: &FileReport) -> anyhow::Result<()> {
        if let Some(error) = &file.error {
            writeln!(
                self.writer,
                "{} {}: {}",
                "!".red().bold(),
                file.path.display(),
                error.red()
            )?;
            return Ok(());
        }

        let shown: Vec<_> = file
            .methods
            .iter()
            .filter(|m| self.show_all || m.is_accessor())
            .collect();
        if shown.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "{}", file.path.display().to_string().bold())?;
        for method in shown {
            let label = match &method.accessor {
                Some(kind) => format!("{} ({})", kind.label(), kind.property())
                    .green()
                    .to_string(),
                None if method.constructor => "constructor".dimmed().to_string(),
                None => "-".dimmed().to_string(),
            };
            writeln!(
                self.writer,
                "  {:>5}  {}  {}",
                method.line,
                method.qualified_name(),
                label
            )?;
        }
        Ok(())
    }

    fn write_summary(&mut self, report: &ScanReport) -> anyhow::Result<()> {
        let summary = &report.summary;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", "Summary:".bold())?;
        writeln!(self.writer, "  Files scanned: {}", summary.files)?;
        if summary.failed_files > 0 {
            writeln!(
                self.writer,
                "  Files skipped: {}",
                summary.failed_files.to_string().red()
            )?;
        }
        writeln!(self.writer, "  Methods: {}", summary.methods)?;
        writeln!(
            self.writer,
            "  Accessors: {} ({} getters, {} setters)",
            summary.accessors().to_string().green(),
            summary.getters,
            summary.setters
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ScanReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        for file in &report.files {
            self.write_file(file)?;
        }
        self.write_summary(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    show_all: bool,
    writer: Box<dyn Write>,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, show_all)),
    }
}
