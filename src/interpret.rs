//! Threshold banding for computed metric values.
//!
//! Thresholds are fixed constants, evaluated as ordered range checks: the
//! first matching band wins and the extreme bands are open-ended. Boundary
//! handling is exact: churn of 5.0 is Good, not Excellent; NPS of 50.0 is
//! Good; a return rate of 40.0 is already Warning.

use crate::core::{Interpretation, MetricKind, Tier};

/// Churn below this is Excellent.
pub const CHURN_EXCELLENT_BELOW: f64 = 5.0;
/// Churn below this (and at or above the Excellent bound) is Good.
pub const CHURN_GOOD_BELOW: f64 = 10.0;

/// NPS above this is Excellent.
pub const NPS_EXCELLENT_ABOVE: f64 = 50.0;
/// NPS above this (and at or below the Excellent bound) is Good.
pub const NPS_GOOD_ABOVE: f64 = 0.0;

/// Return rate above this is Excellent.
pub const RETURN_EXCELLENT_ABOVE: f64 = 70.0;
/// Return rate above this (and at or below the Excellent bound) is Good.
pub const RETURN_GOOD_ABOVE: f64 = 40.0;

/// Map a computed metric value to its qualitative tier and label.
///
/// Metrics with no banding (CLV) get the neutral default: no tier, a
/// plain "Computed value" label.
pub fn interpret(kind: MetricKind, value: f64) -> Interpretation {
    match kind {
        MetricKind::ChurnRate => {
            if value < CHURN_EXCELLENT_BELOW {
                banded(Tier::Excellent, "Excellent - low churn")
            } else if value < CHURN_GOOD_BELOW {
                banded(Tier::Good, "Good - around average")
            } else {
                banded(Tier::Warning, "Needs attention - high churn")
            }
        }
        MetricKind::Nps => {
            if value > NPS_EXCELLENT_ABOVE {
                banded(Tier::Excellent, "Excellent - clients highly satisfied")
            } else if value > NPS_GOOD_ABOVE {
                banded(Tier::Good, "Good - room to improve")
            } else {
                banded(Tier::Warning, "Critical - immediate action needed")
            }
        }
        MetricKind::ReturnRate => {
            if value > RETURN_EXCELLENT_ABOVE {
                banded(Tier::Excellent, "Excellent - strong retention")
            } else if value > RETURN_GOOD_ABOVE {
                banded(Tier::Good, "Good - margin to improve")
            } else {
                banded(Tier::Warning, "Needs attention - weak retention")
            }
        }
        MetricKind::Clv => Interpretation {
            tier: None,
            label: "Computed value".to_string(),
        },
    }
}

fn banded(tier: Tier, label: &str) -> Interpretation {
    Interpretation {
        tier: Some(tier),
        label: label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier_of(kind: MetricKind, value: f64) -> Option<Tier> {
        interpret(kind, value).tier
    }

    #[test]
    fn test_churn_bands() {
        assert_eq!(tier_of(MetricKind::ChurnRate, 0.0), Some(Tier::Excellent));
        assert_eq!(tier_of(MetricKind::ChurnRate, 4.9), Some(Tier::Excellent));
        assert_eq!(tier_of(MetricKind::ChurnRate, 9.99), Some(Tier::Good));
        assert_eq!(tier_of(MetricKind::ChurnRate, 25.0), Some(Tier::Warning));
    }

    #[test]
    fn test_churn_boundaries_are_exact() {
        // 5.0 falls in the Good band, not Excellent
        assert_eq!(tier_of(MetricKind::ChurnRate, 5.0), Some(Tier::Good));
        // 10.0 falls in the Warning band, not Good
        assert_eq!(tier_of(MetricKind::ChurnRate, 10.0), Some(Tier::Warning));
    }

    #[test]
    fn test_nps_bands() {
        assert_eq!(tier_of(MetricKind::Nps, 60.0), Some(Tier::Excellent));
        assert_eq!(tier_of(MetricKind::Nps, 50.1), Some(Tier::Excellent));
        assert_eq!(tier_of(MetricKind::Nps, 25.0), Some(Tier::Good));
        assert_eq!(tier_of(MetricKind::Nps, -30.0), Some(Tier::Warning));
    }

    #[test]
    fn test_nps_boundaries_are_exact() {
        // exactly 50 is Good; Excellent requires strictly more
        assert_eq!(tier_of(MetricKind::Nps, 50.0), Some(Tier::Good));
        // exactly 0 is Warning; Good requires strictly positive
        assert_eq!(tier_of(MetricKind::Nps, 0.0), Some(Tier::Warning));
    }

    #[test]
    fn test_return_rate_bands() {
        assert_eq!(tier_of(MetricKind::ReturnRate, 75.0), Some(Tier::Excellent));
        assert_eq!(tier_of(MetricKind::ReturnRate, 55.0), Some(Tier::Good));
        assert_eq!(tier_of(MetricKind::ReturnRate, 25.0), Some(Tier::Warning));
    }

    #[test]
    fn test_return_rate_boundaries_are_exact() {
        assert_eq!(tier_of(MetricKind::ReturnRate, 70.0), Some(Tier::Good));
        assert_eq!(tier_of(MetricKind::ReturnRate, 40.0), Some(Tier::Warning));
    }

    #[test]
    fn test_clv_is_neutral() {
        let interpretation = interpret(MetricKind::Clv, 250.0);
        assert_eq!(interpretation.tier, None);
        assert_eq!(interpretation.label, "Computed value");
    }
}
