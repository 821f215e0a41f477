//! Domain value records shared across the crate.
//!
//! Everything here is a plain value type: input records built by the shell,
//! the per-metric result produced on an explicit calculate trigger, and the
//! session-local report that collects independent panel outcomes. Nothing is
//! long-lived and nothing is shared between invocations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four supported business metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Clv,
    ChurnRate,
    Nps,
    ReturnRate,
}

impl MetricKind {
    /// Full display name.
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Clv => "Customer Lifetime Value (CLV)",
            MetricKind::ChurnRate => "Churn Rate",
            MetricKind::Nps => "Net Promoter Score (NPS)",
            MetricKind::ReturnRate => "Return Rate",
        }
    }

    /// Decimal places used for display and final rounding.
    pub fn precision(&self) -> usize {
        match self {
            MetricKind::Nps => 1,
            _ => 2,
        }
    }

    /// Unit suffix appended to the displayed value.
    pub fn unit(&self) -> &'static str {
        match self {
            MetricKind::ChurnRate | MetricKind::ReturnRate => "%",
            MetricKind::Clv | MetricKind::Nps => "",
        }
    }

    /// The formula behind the metric, printed under each result.
    pub fn formula(&self) -> &'static str {
        match self {
            MetricKind::Clv => "average visit price x average visit count (x relationship months)",
            MetricKind::ChurnRate => "(lost clients / starting clients) x 100",
            MetricKind::Nps => "% promoters - % detractors",
            MetricKind::ReturnRate => "(returning visits / total visits) x 100",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Qualitative severity band for a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Excellent,
    Good,
    Warning,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Warning => "Warning",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative reading of a computed value.
///
/// `tier` is `None` for metrics with no banding (CLV); the label then falls
/// back to a neutral "Computed value".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    pub label: String,
}

/// CLV inputs: price and count are required, the projection months optional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClvInput {
    pub average_visit_price: f64,
    pub average_visit_count: f64,
    pub relationship_months: Option<f64>,
}

/// Churn inputs over a single period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChurnInput {
    pub starting_clients: f64,
    pub lost_clients: f64,
}

/// NPS survey buckets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NpsInput {
    pub promoters: f64,
    pub passives: f64,
    pub detractors: f64,
}

/// Return-rate visit counts over a single period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnInput {
    pub total_visits: f64,
    pub returning_visits: f64,
}

/// One computed metric with its interpretation.
///
/// Created only on an explicit calculate trigger and replaced wholesale on
/// the next one. `secondary_value` is the CLV projection across the
/// relationship duration; absent for every other metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    pub kind: MetricKind,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_value: Option<f64>,
    pub interpretation: Interpretation,
}

impl MetricResult {
    /// The value formatted at the metric's display precision, with unit.
    pub fn display_value(&self) -> String {
        format!(
            "{:.*}{}",
            self.kind.precision(),
            self.value,
            self.kind.unit()
        )
    }

    /// The secondary value formatted like the primary one, if present.
    pub fn display_secondary(&self) -> Option<String> {
        self.secondary_value
            .map(|v| format!("{:.*}{}", self.kind.precision(), v, self.kind.unit()))
    }
}

/// A metric panel that failed to compute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelFailure {
    pub kind: MetricKind,
    pub error: String,
}

/// Session-local view model assembled by the shell.
///
/// Panels are independent: a failure in one metric is recorded here and
/// never suppresses the others.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricReport {
    pub generated_at: DateTime<Utc>,
    pub results: Vec<MetricResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<PanelFailure>,
}

impl MetricReport {
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now(),
            results: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn push_result(&mut self, result: MetricResult) {
        self.results.push(result);
    }

    pub fn push_failure(&mut self, kind: MetricKind, error: impl ToString) {
        self.failures.push(PanelFailure {
            kind,
            error: error.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && self.failures.is_empty()
    }
}

impl Default for MetricReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to a fixed number of decimal places, half away from zero.
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
