use thiserror::Error;

use super::types::{RiskInput, RiskRequest};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field is absent, null, zero, NaN, or an empty list.
    #[error("Missing required fields")]
    MissingFields,

    /// Fields are present but cannot be scored (negative, fractional, ...).
    #[error("Invalid field values: {}", .0.join(", "))]
    InvalidFields(Vec<&'static str>),
}

/// Truthiness of a JSON number: present, non-zero, not NaN.
fn is_truthy(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v != 0.0 && !v.is_nan())
}

fn whole_u32(value: f64) -> Option<u32> {
    if value.is_finite() && value > 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}

fn positive_finite(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Turn a raw request into a scoreable input.
///
/// First applies the truthiness rule to all six fields (an empty
/// `familyHistory` counts as missing), then checks that the present values
/// are usable. All unusable fields are reported at once.
pub fn validate(request: RiskRequest) -> Result<RiskInput, ValidationError> {
    let numbers = [
        request.age,
        request.height,
        request.weight,
        request.systolic,
        request.diastolic,
    ];
    let history_present = request
        .family_history
        .as_ref()
        .is_some_and(|history| !history.is_empty());

    if !numbers.into_iter().all(is_truthy) || !history_present {
        return Err(ValidationError::MissingFields);
    }

    let mut invalid = Vec::new();

    // Truthiness guarantees every field is Some below
    let age = request.age.and_then(whole_u32);
    if age.is_none() {
        invalid.push("age");
    }
    let height_cm = request.height.and_then(positive_finite);
    if height_cm.is_none() {
        invalid.push("height");
    }
    let weight_kg = request.weight.and_then(positive_finite);
    if weight_kg.is_none() {
        invalid.push("weight");
    }
    let systolic = request.systolic.and_then(whole_u32);
    if systolic.is_none() {
        invalid.push("systolic");
    }
    let diastolic = request.diastolic.and_then(whole_u32);
    if diastolic.is_none() {
        invalid.push("diastolic");
    }

    match (age, height_cm, weight_kg, systolic, diastolic) {
        (Some(age), Some(height_cm), Some(weight_kg), Some(systolic), Some(diastolic)) => {
            Ok(RiskInput {
                age,
                height_cm,
                weight_kg,
                systolic,
                diastolic,
                family_history: request.family_history.unwrap_or_default().into_iter().collect(),
            })
        }
        _ => Err(ValidationError::InvalidFields(invalid)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RiskRequest {
        RiskRequest {
            age: Some(35.0),
            height: Some(170.0),
            weight: Some(70.0),
            systolic: Some(118.0),
            diastolic: Some(75.0),
            family_history: Some(vec!["diabetes".to_string()]),
        }
    }

    #[test]
    fn test_valid_request() {
        let input = validate(valid_request()).unwrap();
        assert_eq!(input.age, 35);
        assert_eq!(input.height_cm, 170.0);
        assert_eq!(input.weight_kg, 70.0);
        assert_eq!(input.systolic, 118);
        assert_eq!(input.diastolic, 75);
        assert!(input.family_history.contains("diabetes"));
    }

    #[test]
    fn test_missing_diastolic() {
        let request = RiskRequest {
            diastolic: None,
            ..valid_request()
        };
        assert_eq!(validate(request), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_zero_counts_as_missing() {
        let request = RiskRequest {
            age: Some(0.0),
            ..valid_request()
        };
        assert_eq!(validate(request), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_nan_counts_as_missing() {
        let request = RiskRequest {
            weight: Some(f64::NAN),
            ..valid_request()
        };
        assert_eq!(validate(request), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_empty_family_history_counts_as_missing() {
        let request = RiskRequest {
            family_history: Some(vec![]),
            ..valid_request()
        };
        assert_eq!(validate(request), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_absent_family_history_counts_as_missing() {
        let request = RiskRequest {
            family_history: None,
            ..valid_request()
        };
        assert_eq!(validate(request), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_unrecognized_history_is_accepted() {
        let request = RiskRequest {
            family_history: Some(vec!["none".to_string()]),
            ..valid_request()
        };
        let input = validate(request).unwrap();
        assert_eq!(input.family_history.len(), 1);
    }

    #[test]
    fn test_duplicate_history_collapses() {
        let request = RiskRequest {
            family_history: Some(vec!["cancer".to_string(), "cancer".to_string()]),
            ..valid_request()
        };
        let input = validate(request).unwrap();
        assert_eq!(input.family_history.len(), 1);
    }

    #[test]
    fn test_collects_all_invalid_fields() {
        let request = RiskRequest {
            age: Some(-4.0),
            height: Some(f64::INFINITY),
            systolic: Some(120.5),
            ..valid_request()
        };
        let result = validate(request);
        assert_eq!(
            result,
            Err(ValidationError::InvalidFields(vec!["age", "height", "systolic"]))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::MissingFields.to_string(), "Missing required fields");
        assert_eq!(
            ValidationError::InvalidFields(vec!["age", "weight"]).to_string(),
            "Invalid field values: age, weight"
        );
    }
}
