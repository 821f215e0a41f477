//! Full-report command: a TOML file with one table per metric in, a
//! rendered report out.
//!
//! Panels are independent: a failing section is recorded in the report and
//! the remaining sections still compute. Only an unreadable or malformed
//! file fails the command itself.

use crate::core::{ChurnInput, ClvInput, MetricKind, MetricReport, NpsInput, ReturnInput};
use crate::engine;
use crate::formatting::FormattingConfig;
use crate::io::{self, OutputFormat};
use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub struct ReportConfig {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

/// The report input file: every table optional, unknown keys rejected so
/// typos fail loudly instead of silently skipping a metric.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportInputs {
    pub clv: Option<ClvSection>,
    pub churn: Option<ChurnSection>,
    pub nps: Option<NpsSection>,
    #[serde(rename = "return-rate")]
    pub return_rate: Option<ReturnSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClvSection {
    pub average_visit_price: f64,
    pub average_visit_count: f64,
    pub relationship_months: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChurnSection {
    pub starting_clients: f64,
    pub lost_clients: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NpsSection {
    pub promoters: f64,
    pub passives: f64,
    pub detractors: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReturnSection {
    pub total_visits: f64,
    pub returning_visits: f64,
}

pub fn run_report(file: &Path, config: &ReportConfig) -> Result<()> {
    let content = io::read_file(file)
        .with_context(|| format!("failed to read input file {}", file.display()))?;
    let inputs: ReportInputs = toml::from_str(&content)
        .with_context(|| format!("invalid input file {}", file.display()))?;

    let report = build_report(&inputs);
    if report.is_empty() {
        anyhow::bail!("no metric sections found in {}", file.display());
    }

    io::output_report(
        &report,
        config.format,
        config.output.as_deref(),
        config.formatting,
    )
}

/// Compute every metric present in the inputs, collecting failures instead
/// of aborting on the first one.
pub fn build_report(inputs: &ReportInputs) -> MetricReport {
    let mut report = MetricReport::new();

    if let Some(section) = &inputs.clv {
        debug!("computing clv panel");
        let input = ClvInput {
            average_visit_price: section.average_visit_price,
            average_visit_count: section.average_visit_count,
            relationship_months: section.relationship_months,
        };
        match engine::compute_clv(&input) {
            Ok(result) => report.push_result(result),
            Err(err) => report.push_failure(MetricKind::Clv, err),
        }
    }

    if let Some(section) = &inputs.churn {
        debug!("computing churn panel");
        let input = ChurnInput {
            starting_clients: section.starting_clients,
            lost_clients: section.lost_clients,
        };
        match engine::compute_churn_rate(&input) {
            Ok(result) => report.push_result(result),
            Err(err) => report.push_failure(MetricKind::ChurnRate, err),
        }
    }

    if let Some(section) = &inputs.nps {
        debug!("computing nps panel");
        let input = NpsInput {
            promoters: section.promoters,
            passives: section.passives,
            detractors: section.detractors,
        };
        match engine::compute_nps(&input) {
            Ok(result) => report.push_result(result),
            Err(err) => report.push_failure(MetricKind::Nps, err),
        }
    }

    if let Some(section) = &inputs.return_rate {
        debug!("computing return-rate panel");
        let input = ReturnInput {
            total_visits: section.total_visits,
            returning_visits: section.returning_visits,
        };
        match engine::compute_return_rate(&input) {
            Ok(result) => report.push_result(result),
            Err(err) => report.push_failure(MetricKind::ReturnRate, err),
        }
    }

    report
}
