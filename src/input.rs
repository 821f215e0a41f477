//! The input gate: explicit parse-and-validate from raw text fields.
//!
//! Shells collect values as text. This module turns those raw fields into
//! well-formed input records or structured failures, replacing the implicit
//! numeric coercion of a form UI. Presence and parseability are the only
//! checks; negative or absurd magnitudes pass through untouched.

use crate::core::{ChurnInput, ClvInput, NpsInput, ReturnInput};
use crate::errors::MetricError;

/// Parse a required field. Absent or blank text is [`MetricError::MissingInput`];
/// text that does not parse as a finite number is [`MetricError::InvalidNumber`].
pub fn parse_required(field: &'static str, raw: Option<&str>) -> Result<f64, MetricError> {
    let text = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(MetricError::MissingInput { field })?;
    parse_number(field, text)
}

/// Parse an optional field. Absent or blank text is simply `None`;
/// present-but-unparseable text is still an error.
pub fn parse_optional(field: &'static str, raw: Option<&str>) -> Result<Option<f64>, MetricError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(text) => parse_number(field, text).map(Some),
        None => Ok(None),
    }
}

fn parse_number(field: &'static str, text: &str) -> Result<f64, MetricError> {
    let value: f64 = text
        .parse()
        .map_err(|_| MetricError::invalid(field, text))?;
    // "NaN" and "inf" parse as f64 but make no sense as counts
    if !value.is_finite() {
        return Err(MetricError::invalid(field, text));
    }
    Ok(value)
}

impl ClvInput {
    /// Build a CLV input record from raw text fields.
    pub fn from_raw(
        average_visit_price: Option<&str>,
        average_visit_count: Option<&str>,
        relationship_months: Option<&str>,
    ) -> Result<Self, MetricError> {
        Ok(Self {
            average_visit_price: parse_required("average_visit_price", average_visit_price)?,
            average_visit_count: parse_required("average_visit_count", average_visit_count)?,
            relationship_months: parse_optional("relationship_months", relationship_months)?,
        })
    }
}

impl ChurnInput {
    /// Build a churn input record from raw text fields.
    pub fn from_raw(
        starting_clients: Option<&str>,
        lost_clients: Option<&str>,
    ) -> Result<Self, MetricError> {
        Ok(Self {
            starting_clients: parse_required("starting_clients", starting_clients)?,
            lost_clients: parse_required("lost_clients", lost_clients)?,
        })
    }
}

impl NpsInput {
    /// Build an NPS input record from raw text fields.
    pub fn from_raw(
        promoters: Option<&str>,
        passives: Option<&str>,
        detractors: Option<&str>,
    ) -> Result<Self, MetricError> {
        Ok(Self {
            promoters: parse_required("promoters", promoters)?,
            passives: parse_required("passives", passives)?,
            detractors: parse_required("detractors", detractors)?,
        })
    }
}

impl ReturnInput {
    /// Build a return-rate input record from raw text fields.
    pub fn from_raw(
        total_visits: Option<&str>,
        returning_visits: Option<&str>,
    ) -> Result<Self, MetricError> {
        Ok(Self {
            total_visits: parse_required("total_visits", total_visits)?,
            returning_visits: parse_required("returning_visits", returning_visits)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_required_accepts_numbers() {
        assert_eq!(parse_required("field", Some("50")), Ok(50.0));
        assert_eq!(parse_required("field", Some(" 4.9 ")), Ok(4.9));
        assert_eq!(parse_required("field", Some("-3")), Ok(-3.0));
        assert_eq!(parse_required("field", Some("0")), Ok(0.0));
    }

    #[test]
    fn test_parse_required_missing() {
        assert_eq!(
            parse_required("field", None),
            Err(MetricError::missing("field"))
        );
        // blank behaves as absent
        assert_eq!(
            parse_required("field", Some("   ")),
            Err(MetricError::missing("field"))
        );
    }

    #[test]
    fn test_parse_required_rejects_text() {
        assert_eq!(
            parse_required("field", Some("abc")),
            Err(MetricError::invalid("field", "abc"))
        );
    }

    #[test]
    fn test_parse_required_rejects_non_finite() {
        assert_eq!(
            parse_required("field", Some("NaN")),
            Err(MetricError::invalid("field", "NaN"))
        );
        assert_eq!(
            parse_required("field", Some("inf")),
            Err(MetricError::invalid("field", "inf"))
        );
    }

    #[test]
    fn test_parse_optional() {
        assert_eq!(parse_optional("field", None), Ok(None));
        assert_eq!(parse_optional("field", Some("")), Ok(None));
        assert_eq!(parse_optional("field", Some("12")), Ok(Some(12.0)));
        assert_eq!(
            parse_optional("field", Some("twelve")),
            Err(MetricError::invalid("field", "twelve"))
        );
    }

    #[test]
    fn test_clv_from_raw_gate() {
        // missing required field produces no record
        let err = ClvInput::from_raw(None, Some("5"), None).unwrap_err();
        assert_eq!(err, MetricError::missing("average_visit_price"));

        let input = ClvInput::from_raw(Some("50"), Some("5"), Some("12")).unwrap();
        assert_eq!(input.average_visit_price, 50.0);
        assert_eq!(input.relationship_months, Some(12.0));

        let input = ClvInput::from_raw(Some("50"), Some("5"), None).unwrap();
        assert_eq!(input.relationship_months, None);
    }

    #[test]
    fn test_churn_from_raw_accepts_zero_lost() {
        let input = ChurnInput::from_raw(Some("100"), Some("0")).unwrap();
        assert_eq!(input.lost_clients, 0.0);
    }

    #[test]
    fn test_nps_from_raw_reports_first_bad_field() {
        let err = NpsInput::from_raw(Some("60"), Some("many"), Some("10")).unwrap_err();
        assert_eq!(err, MetricError::invalid("passives", "many"));
    }
}
