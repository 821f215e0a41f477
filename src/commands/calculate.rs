//! Single-metric commands: raw text fields in, one rendered result out.

use crate::core::{ChurnInput, ClvInput, MetricReport, MetricResult, NpsInput, ReturnInput};
use crate::engine;
use crate::formatting::FormattingConfig;
use crate::io::{self, OutputFormat};
use anyhow::Result;
use log::debug;
use std::path::PathBuf;

pub struct CalculateConfig {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

pub fn run_clv(
    price: &str,
    visits: &str,
    months: Option<&str>,
    config: &CalculateConfig,
) -> Result<()> {
    let input = ClvInput::from_raw(Some(price), Some(visits), months)?;
    debug!("clv input: {input:?}");
    emit(engine::compute_clv(&input)?, config)
}

pub fn run_churn(starting: &str, lost: &str, config: &CalculateConfig) -> Result<()> {
    let input = ChurnInput::from_raw(Some(starting), Some(lost))?;
    debug!("churn input: {input:?}");
    emit(engine::compute_churn_rate(&input)?, config)
}

pub fn run_nps(
    promoters: &str,
    passives: &str,
    detractors: &str,
    config: &CalculateConfig,
) -> Result<()> {
    let input = NpsInput::from_raw(Some(promoters), Some(passives), Some(detractors))?;
    debug!("nps input: {input:?}");
    emit(engine::compute_nps(&input)?, config)
}

pub fn run_return_rate(total: &str, returning: &str, config: &CalculateConfig) -> Result<()> {
    let input = ReturnInput::from_raw(Some(total), Some(returning))?;
    debug!("return-rate input: {input:?}");
    emit(engine::compute_return_rate(&input)?, config)
}

fn emit(result: MetricResult, config: &CalculateConfig) -> Result<()> {
    let mut report = MetricReport::new();
    report.push_result(result);
    io::output_report(
        &report,
        config.format,
        config.output.as_deref(),
        config.formatting,
    )
}
