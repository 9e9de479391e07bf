use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Raw request body as sent by the frontend.
///
/// Every field is optional so that missing and `null` values reach
/// validation instead of failing JSON extraction. Unknown fields are ignored.
///
/// Example JSON:
/// ```json
/// {
///   "age": 35,
///   "height": 170,
///   "weight": 70,
///   "systolic": 118,
///   "diastolic": 75,
///   "familyHistory": ["diabetes"]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskRequest {
    /// Age in years
    #[serde(default)]
    pub age: Option<f64>,

    /// Height in centimeters
    #[serde(default)]
    pub height: Option<f64>,

    /// Weight in kilograms
    #[serde(default)]
    pub weight: Option<f64>,

    /// Systolic blood pressure (mmHg)
    #[serde(default)]
    pub systolic: Option<f64>,

    /// Diastolic blood pressure (mmHg)
    #[serde(default)]
    pub diastolic: Option<f64>,

    /// Conditions present in the family, e.g. "diabetes"
    #[serde(default)]
    pub family_history: Option<Vec<String>>,
}

/// Validated biometric input, normally built by [`super::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct RiskInput {
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub systolic: u32,
    pub diastolic: u32,
    pub family_history: BTreeSet<String>,
}

/// Four-level classification of a total risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum RiskCategory {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Moderate Risk")]
    Moderate,
    #[serde(rename = "High Risk")]
    High,
    #[serde(rename = "Uninsurable")]
    Uninsurable,
}

impl RiskCategory {
    /// Classify a total score: <=20 low, <=50 moderate, <=75 high.
    pub fn from_score(total_score: u32) -> Self {
        match total_score {
            0..=20 => RiskCategory::Low,
            21..=50 => RiskCategory::Moderate,
            51..=75 => RiskCategory::High,
            _ => RiskCategory::Uninsurable,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low Risk",
            RiskCategory::Moderate => "Moderate Risk",
            RiskCategory::High => "High Risk",
            RiskCategory::Uninsurable => "Uninsurable",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Response body of `POST /calculate-risk`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskOutput {
    /// Body mass index, rounded to 2 decimals
    pub bmi: f64,
    pub total_score: u32,
    pub risk_category: RiskCategory,
}
