use crate::advice;
use crate::core::{MetricKind, MetricReport, MetricResult, Tier};
use crate::formatting::FormattingConfig;
use comfy_table::{presets::UTF8_FULL, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &MetricReport) -> anyhow::Result<()>;
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
    fn write_report(&mut self, report: &MetricReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &MetricReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_details(report)?;
        self.write_failures(report)?;
        self.write_tips(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &MetricReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Practice Metrics Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &MetricReport) -> anyhow::Result<()> {
        if report.results.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value | Assessment |")?;
        writeln!(self.writer, "|--------|-------|------------|")?;
        for result in &report.results {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                result.kind.name(),
                result.display_value(),
                result.interpretation.label
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_details(&mut self, report: &MetricReport) -> anyhow::Result<()> {
        for result in &report.results {
            writeln!(self.writer, "### {}", result.kind.name())?;
            writeln!(self.writer)?;
            writeln!(self.writer, "- Value: {}", result.display_value())?;
            if let Some(secondary) = result.display_secondary() {
                writeln!(self.writer, "- Projected over relationship: {}", secondary)?;
            }
            writeln!(
                self.writer,
                "- Assessment: {}",
                result.interpretation.label
            )?;
            writeln!(self.writer, "- Formula: `{}`", result.kind.formula())?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_failures(&mut self, report: &MetricReport) -> anyhow::Result<()> {
        if report.failures.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Failed Panels")?;
        writeln!(self.writer)?;
        for failure in &report.failures {
            writeln!(self.writer, "- **{}**: {}", failure.kind.name(), failure.error)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_tips(&mut self, report: &MetricReport) -> anyhow::Result<()> {
        let kinds = report_kinds(report);
        if kinds.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Tips")?;
        writeln!(self.writer)?;
        for kind in kinds {
            writeln!(self.writer, "- **{}**: {}", kind.name(), advice::tip(kind))?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    config: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        // Set colored control based on configuration
        if config.color.should_use_color() {
            colored::control::set_override(true);
        }

        Self { writer, config }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &MetricReport) -> anyhow::Result<()> {
        if report.results.len() > 1 {
            self.write_summary_table(report)?;
        }
        for result in &report.results {
            self.write_result(result)?;
        }
        self.write_failures(report)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_summary_table(&mut self, report: &MetricReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            self.config.header("Practice Metrics Report")
        )?;
        writeln!(
            self.writer,
            "{}",
            self.config.header("=======================")
        )?;
        writeln!(self.writer)?;

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Metric", "Value", "Assessment"]);
        for result in &report.results {
            table.add_row(vec![
                result.kind.name().to_string(),
                result.display_value(),
                result.interpretation.label.clone(),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_result(&mut self, result: &MetricResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.config.header(result.kind.name()))?;
        writeln!(
            self.writer,
            "  Value: {}",
            self.config
                .paint_tier(result.interpretation.tier, &result.display_value())
        )?;
        if let Some(secondary) = result.display_secondary() {
            writeln!(
                self.writer,
                "  Projected over relationship: {}",
                self.config.paint_tier(result.interpretation.tier, &secondary)
            )?;
        }
        writeln!(self.writer, "  Assessment: {}", result.interpretation.label)?;
        writeln!(
            self.writer,
            "  {}",
            self.config
                .dim(&format!("Formula: {}", result.kind.formula()))
        )?;
        if result.interpretation.tier == Some(Tier::Warning) {
            writeln!(self.writer, "  Tip: {}", advice::tip(result.kind))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_failures(&mut self, report: &MetricReport) -> anyhow::Result<()> {
        if report.failures.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "{}", self.config.error("Failed panels:"))?;
        for failure in &report.failures {
            writeln!(
                self.writer,
                "  - {}: {}",
                failure.kind.name(),
                self.config.error(&failure.error)
            )?;
        }
        Ok(())
    }
}

/// Metric kinds touched by the report, results and failures alike, in
/// first-seen order without duplicates.
fn report_kinds(report: &MetricReport) -> Vec<MetricKind> {
    let mut kinds: Vec<MetricKind> = Vec::new();
    for kind in report
        .results
        .iter()
        .map(|r| r.kind)
        .chain(report.failures.iter().map(|f| f.kind))
    {
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    kinds
}

pub fn create_writer(format: OutputFormat, config: FormattingConfig) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(std::io::stdout(), config)),
    }
}

/// Render a report into any writer, used for file output and tests.
pub fn write_to<W: Write>(
    writer: W,
    report: &MetricReport,
    format: OutputFormat,
    config: FormattingConfig,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => JsonWriter::new(writer).write_report(report),
        OutputFormat::Markdown => MarkdownWriter::new(writer).write_report(report),
        OutputFormat::Terminal => TerminalWriter::new(writer, config).write_report(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ChurnInput, NpsInput};
    use crate::engine::{compute_churn_rate, compute_nps};
    use crate::errors::MetricError;

    fn sample_report() -> MetricReport {
        let mut report = MetricReport::new();
        report.push_result(
            compute_nps(&NpsInput {
                promoters: 60.0,
                passives: 30.0,
                detractors: 10.0,
            })
            .unwrap(),
        );
        report.push_result(
            compute_churn_rate(&ChurnInput {
                starting_clients: 100.0,
                lost_clients: 25.0,
            })
            .unwrap(),
        );
        report.push_failure(
            MetricKind::ReturnRate,
            MetricError::division_by_zero("total_visits"),
        );
        report
    }

    fn render(format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        write_to(
            &mut buffer,
            &sample_report(),
            format,
            FormattingConfig::plain(),
        )
        .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_json_writer_round_trips() {
        let text = render(OutputFormat::Json);
        let parsed: MetricReport = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.failures.len(), 1);
        assert_eq!(parsed.results[0].kind, MetricKind::Nps);
    }

    #[test]
    fn test_json_omits_absent_secondary_value() {
        let text = render(OutputFormat::Json);
        assert!(!text.contains("secondary_value"));
    }

    #[test]
    fn test_markdown_writer_sections() {
        let text = render(OutputFormat::Markdown);
        assert!(text.contains("# Practice Metrics Report"));
        assert!(text.contains("| Net Promoter Score (NPS) | 50.0 | Good - room to improve |"));
        assert!(text.contains("## Failed Panels"));
        assert!(text.contains("total_visits is zero"));
        assert!(text.contains("## Tips"));
        assert!(text.contains("Formula: `(lost clients / starting clients) x 100`"));
    }

    #[test]
    fn test_terminal_writer_plain() {
        let text = render(OutputFormat::Terminal);
        assert!(text.contains("Churn Rate"));
        assert!(text.contains("Value: 25.00%"));
        assert!(text.contains("Needs attention - high churn"));
        // warning tier surfaces the improvement tip
        assert!(text.contains("Tip: Introduce a post-visit follow-up program"));
        assert!(text.contains("Failed panels:"));
    }

    #[test]
    fn test_terminal_single_result_skips_summary_table() {
        let mut report = MetricReport::new();
        report.push_result(
            compute_nps(&NpsInput {
                promoters: 60.0,
                passives: 30.0,
                detractors: 10.0,
            })
            .unwrap(),
        );
        let mut buffer = Vec::new();
        write_to(
            &mut buffer,
            &report,
            OutputFormat::Terminal,
            FormattingConfig::plain(),
        )
        .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(!text.contains("Practice Metrics Report"));
        assert!(text.contains("Value: 50.0"));
    }

    #[test]
    fn test_report_kinds_deduplicates() {
        let kinds = report_kinds(&sample_report());
        assert_eq!(
            kinds,
            vec![MetricKind::Nps, MetricKind::ChurnRate, MetricKind::ReturnRate]
        );
    }
}
