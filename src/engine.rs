//! The formula engine: one pure function per metric.
//!
//! Each function maps an input record to a complete [`MetricResult`],
//! interpretation included. Intermediate arithmetic runs at full f64
//! precision; the final value is rounded to the metric's display precision
//! before banding, so the number a user sees and the tier attached to it can
//! never disagree.
//!
//! All four functions are deterministic, side-effect-free, and independent
//! of each other and of call order.

use crate::core::{round_to, ChurnInput, ClvInput, MetricKind, MetricResult, NpsInput, ReturnInput};
use crate::errors::MetricError;
use crate::interpret::interpret;

/// Customer lifetime value: price x visit count, optionally projected
/// across the relationship duration in months.
///
/// Cannot fail once the input record exists (the presence gate lives in
/// [`crate::input`]), but keeps the `Result` signature for uniformity with
/// its siblings.
pub fn compute_clv(input: &ClvInput) -> Result<MetricResult, MetricError> {
    let base = input.average_visit_price * input.average_visit_count;
    let extended = input.relationship_months.map(|months| base * months);

    let value = round_to(base, MetricKind::Clv.precision());
    Ok(MetricResult {
        kind: MetricKind::Clv,
        value,
        secondary_value: extended.map(|e| round_to(e, MetricKind::Clv.precision())),
        interpretation: interpret(MetricKind::Clv, value),
    })
}

/// Churn rate: lost clients as a percentage of the starting count.
pub fn compute_churn_rate(input: &ChurnInput) -> Result<MetricResult, MetricError> {
    if input.starting_clients == 0.0 {
        return Err(MetricError::division_by_zero("starting_clients"));
    }

    let percent = (input.lost_clients / input.starting_clients) * 100.0;
    let value = round_to(percent, MetricKind::ChurnRate.precision());
    Ok(MetricResult {
        kind: MetricKind::ChurnRate,
        value,
        secondary_value: None,
        interpretation: interpret(MetricKind::ChurnRate, value),
    })
}

/// Net promoter score: percentage of promoters minus percentage of
/// detractors across all survey responses.
pub fn compute_nps(input: &NpsInput) -> Result<MetricResult, MetricError> {
    let total = input.promoters + input.passives + input.detractors;
    if total == 0.0 {
        return Err(MetricError::division_by_zero("total survey responses"));
    }

    let promoter_pct = (input.promoters / total) * 100.0;
    let detractor_pct = (input.detractors / total) * 100.0;
    let value = round_to(promoter_pct - detractor_pct, MetricKind::Nps.precision());
    Ok(MetricResult {
        kind: MetricKind::Nps,
        value,
        secondary_value: None,
        interpretation: interpret(MetricKind::Nps, value),
    })
}

/// Return rate: repeat visits as a percentage of all visits.
pub fn compute_return_rate(input: &ReturnInput) -> Result<MetricResult, MetricError> {
    if input.total_visits == 0.0 {
        return Err(MetricError::division_by_zero("total_visits"));
    }

    let percent = (input.returning_visits / input.total_visits) * 100.0;
    let value = round_to(percent, MetricKind::ReturnRate.precision());
    Ok(MetricResult {
        kind: MetricKind::ReturnRate,
        value,
        secondary_value: None,
        interpretation: interpret(MetricKind::ReturnRate, value),
    })
}
