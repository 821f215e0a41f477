//! End-to-end library flow: raw text fields through the input gate, the
//! formula engine, and the interpretation rules.

use praximeter::core::{ChurnInput, ClvInput, NpsInput, ReturnInput, Tier};
use praximeter::engine::{compute_churn_rate, compute_clv, compute_nps, compute_return_rate};
use praximeter::errors::MetricError;
use pretty_assertions::assert_eq;

#[test]
fn clv_from_raw_fields() {
    let input = ClvInput::from_raw(Some("50"), Some("5"), None).unwrap();
    let result = compute_clv(&input).unwrap();
    assert_eq!(result.display_value(), "250.00");
    assert_eq!(result.secondary_value, None);

    let input = ClvInput::from_raw(Some("50"), Some("5"), Some("12")).unwrap();
    let result = compute_clv(&input).unwrap();
    assert_eq!(result.display_value(), "250.00");
    assert_eq!(result.display_secondary().as_deref(), Some("3000.00"));
}

#[test]
fn clv_without_required_field_produces_no_result() {
    let err = ClvInput::from_raw(None, Some("5"), None).unwrap_err();
    assert_eq!(err, MetricError::missing("average_visit_price"));
}

#[test]
fn churn_boundary_five_percent_is_good() {
    let input = ChurnInput::from_raw(Some("100"), Some("5")).unwrap();
    let result = compute_churn_rate(&input).unwrap();
    assert_eq!(result.display_value(), "5.00%");
    assert_eq!(result.interpretation.tier, Some(Tier::Good));
}

#[test]
fn churn_just_below_boundary_is_excellent() {
    let input = ChurnInput::from_raw(Some("100"), Some("4.9")).unwrap();
    let result = compute_churn_rate(&input).unwrap();
    assert_eq!(result.display_value(), "4.90%");
    assert_eq!(result.interpretation.tier, Some(Tier::Excellent));
}

#[test]
fn nps_score_of_exactly_fifty_is_good() {
    let input = NpsInput::from_raw(Some("60"), Some("30"), Some("10")).unwrap();
    let result = compute_nps(&input).unwrap();
    assert_eq!(result.display_value(), "50.0");
    assert_eq!(result.interpretation.tier, Some(Tier::Good));
}

#[test]
fn nps_score_above_fifty_is_excellent() {
    let input = NpsInput::from_raw(Some("70"), Some("20"), Some("10")).unwrap();
    let result = compute_nps(&input).unwrap();
    assert_eq!(result.display_value(), "60.0");
    assert_eq!(result.interpretation.tier, Some(Tier::Excellent));
}

#[test]
fn return_rate_bands() {
    let input = ReturnInput::from_raw(Some("200"), Some("50")).unwrap();
    let result = compute_return_rate(&input).unwrap();
    assert_eq!(result.display_value(), "25.00%");
    assert_eq!(result.interpretation.tier, Some(Tier::Warning));

    let input = ReturnInput::from_raw(Some("200"), Some("150")).unwrap();
    let result = compute_return_rate(&input).unwrap();
    assert_eq!(result.display_value(), "75.00%");
    assert_eq!(result.interpretation.tier, Some(Tier::Excellent));
}

#[test]
fn division_by_zero_is_a_typed_error_everywhere() {
    let churn = ChurnInput::from_raw(Some("0"), Some("5")).unwrap();
    assert_eq!(
        compute_churn_rate(&churn).unwrap_err(),
        MetricError::division_by_zero("starting_clients")
    );

    let nps = NpsInput::from_raw(Some("0"), Some("0"), Some("0")).unwrap();
    assert_eq!(
        compute_nps(&nps).unwrap_err(),
        MetricError::division_by_zero("total survey responses")
    );

    let ret = ReturnInput::from_raw(Some("0"), Some("10")).unwrap();
    assert_eq!(
        compute_return_rate(&ret).unwrap_err(),
        MetricError::division_by_zero("total_visits")
    );
}

#[test]
fn unparseable_text_is_rejected_at_the_gate() {
    let err = ChurnInput::from_raw(Some("one hundred"), Some("5")).unwrap_err();
    assert_eq!(err, MetricError::invalid("starting_clients", "one hundred"));
}
