use super::factors::{
    age_points, blood_pressure_points, bmi_points, calculate_bmi, family_history_points,
    matched_conditions,
};
use super::types::{RiskCategory, RiskInput, RiskOutput};

#[derive(Debug, Clone, PartialEq)]
pub struct FactorContribution {
    pub label: String,       // e.g. "Age", "BMI", "Blood Pressure"
    pub description: String, // e.g. "35 years", "118/75 mmHg"
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorContribution>,
}

impl ScoreBreakdown {
    /// Points contributed by the factor with the given label, 0 if absent.
    pub fn points_for(&self, label: &str) -> u32 {
        self.factors
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.points)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub output: RiskOutput,
    pub breakdown: ScoreBreakdown,
}

/// Score a validated input and keep the per-factor breakdown.
pub fn assess(input: &RiskInput) -> RiskAssessment {
    let bmi = calculate_bmi(input.height_cm, input.weight_kg);

    let conditions = matched_conditions(&input.family_history);
    let family_description = if conditions.is_empty() {
        "no recognized conditions".to_string()
    } else {
        conditions.join(", ")
    };

    let factors = vec![
        FactorContribution {
            label: "Age".to_string(),
            description: format!("{} years", input.age),
            points: age_points(input.age),
        },
        FactorContribution {
            label: "BMI".to_string(),
            description: format!("{:.2}", bmi),
            points: bmi_points(bmi),
        },
        FactorContribution {
            label: "Blood Pressure".to_string(),
            description: format!("{}/{} mmHg", input.systolic, input.diastolic),
            points: blood_pressure_points(input.systolic, input.diastolic),
        },
        FactorContribution {
            label: "Family History".to_string(),
            description: family_description,
            points: family_history_points(&input.family_history),
        },
    ];

    let total_score = factors.iter().map(|f| f.points).sum();

    RiskAssessment {
        output: RiskOutput {
            bmi,
            total_score,
            risk_category: RiskCategory::from_score(total_score),
        },
        breakdown: ScoreBreakdown { factors },
    }
}

/// Score a validated input. Pure; callers must validate first.
pub fn compute(input: &RiskInput) -> RiskOutput {
    assess(input).output
}
