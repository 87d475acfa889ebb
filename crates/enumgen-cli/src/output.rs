//! Output formatting and writing utilities
//!
//! Formats results as human-readable text, JSON, or YAML, and writes
//! status messages with optional color.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use enumgen_core::GenerationRecord;
use serde::Serialize;
use std::io::{self, Write};

/// Trait for formatting output values
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a generation record, with a human-oriented summary form
    fn format_record(&self, record: &GenerationRecord) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            // For human format, pretty JSON is the fallback
            OutputFormat::Human => Ok(serde_json::to_string_pretty(value)?),
        }
    }

    fn format_record(&self, record: &GenerationRecord) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_record_human(record)),
            _ => self.format(record),
        }
    }
}

/// Human-readable rendering of a generation record
fn format_record_human(record: &GenerationRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({}, returns {})\n",
        record.class_name, record.kind, record.return_type
    ));
    out.push_str(&format!("  package: {}\n", record.package_name));
    if !record.imports.is_empty() {
        let imports: Vec<&str> = record.imports.iter().map(String::as_str).collect();
        out.push_str(&format!("  imports: {}\n", imports.join(", ")));
    }
    if let Some(since) = &record.since {
        out.push_str(&format!("  since: {since}\n"));
    }
    if record.deprecated == Some(true) {
        out.push_str("  deprecated\n");
    }
    out.push_str(&format!("  members ({}):\n", record.params.len()));
    for param in &record.params {
        let mut line = format!("    {} <- {}", param.name, param.origin);
        if let Some(value) = param.value {
            line.push_str(&format!(" = {value}"));
        }
        if let Some(internal) = &param.internal {
            line.push_str(&format!(" [{internal}]"));
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Output writer that handles formats, colors, and quiet mode
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer targeting stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// The selected output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write an informational message (suppressed in quiet mode)
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.writer, "{message}")?;
        Ok(())
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.use_color {
            writeln!(self.writer, "{}", message.green())?;
        } else {
            writeln!(self.writer, "{message}")?;
        }
        Ok(())
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.use_color {
            writeln!(self.writer, "{}", message.yellow())?;
        } else {
            writeln!(self.writer, "{message}")?;
        }
        Ok(())
    }

    /// Write an error message
    pub fn error(&mut self, message: &str) -> Result<()> {
        if self.use_color {
            writeln!(self.writer, "{}", message.red())?;
        } else {
            writeln!(self.writer, "{message}")?;
        }
        Ok(())
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.use_color {
            writeln!(self.writer, "\n{}", title.bold())?;
        } else {
            writeln!(self.writer, "\n{title}")?;
        }
        Ok(())
    }

    /// Write a serializable value in the selected format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        writeln!(self.writer, "{formatted}")?;
        Ok(())
    }

    /// Write a generation record in the selected format
    pub fn record(&mut self, record: &GenerationRecord) -> Result<()> {
        let formatted = self.format.format_record(record)?;
        write!(self.writer, "{formatted}")?;
        if !formatted.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    /// Write raw text (generated source) untouched
    pub fn raw(&mut self, text: &str) -> Result<()> {
        write!(self.writer, "{text}")?;
        Ok(())
    }
}
