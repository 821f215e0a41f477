pub mod output;

pub use output::{create_writer, OutputFormat, OutputWriter};

use crate::core::MetricReport;
use crate::formatting::FormattingConfig;
use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Render a report to stdout or to a file, in the requested format.
pub fn output_report(
    report: &MetricReport,
    format: OutputFormat,
    output: Option<&Path>,
    config: FormattingConfig,
) -> Result<()> {
    match output {
        Some(path) => {
            let mut buffer = Vec::new();
            output::write_to(&mut buffer, report, format, config)?;
            write_file(path, &String::from_utf8(buffer)?)
        }
        None => {
            let mut writer = create_writer(format, config);
            writer.write_report(report)
        }
    }
}
