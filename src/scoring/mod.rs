pub mod engine;
pub mod factors;
pub mod types;
pub mod validation;

pub use engine::{assess, compute, FactorContribution, RiskAssessment, ScoreBreakdown};
pub use factors::{
    age_points, blood_pressure_points, bmi_points, calculate_bmi, family_history_points,
    CONDITION_POINTS,
};
pub use types::{RiskCategory, RiskInput, RiskOutput, RiskRequest};
pub use validation::{validate, ValidationError};
