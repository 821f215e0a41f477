//! Fixed improvement tips per metric.

use crate::core::MetricKind;

/// One practical suggestion for improving the metric.
pub fn tip(kind: MetricKind) -> &'static str {
    match kind {
        MetricKind::Clv => "Offer long-term treatment packages with incentives to raise per-client value.",
        MetricKind::ChurnRate => {
            "Introduce a post-visit follow-up program to understand and resolve client concerns."
        }
        MetricKind::Nps => "Reach out to detractors and address their concerns to improve the service.",
        MetricKind::ReturnRate => {
            "Offer promotions for follow-up visits and invest in the client relationship."
        }
    }
}
