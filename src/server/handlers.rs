use axum::extract::rejection::JsonRejection;
use axum::Json;
use tracing::{debug, info};

use super::error::ApiError;
use crate::scoring::{self, RiskOutput, RiskRequest};

pub const WELCOME_MESSAGE: &str = "Welcome to the Risk Calculator Backend!";

/// GET / — liveness check, no computation.
pub async fn root() -> &'static str {
    WELCOME_MESSAGE
}

/// POST /calculate-risk — validate, score, respond.
pub async fn calculate_risk(
    payload: Result<Json<RiskRequest>, JsonRejection>,
) -> Result<Json<RiskOutput>, ApiError> {
    let Json(request) = payload?;
    debug!(?request, "calculate-risk request");

    let input = scoring::validate(request)?;
    let assessment = scoring::assess(&input);
    let output = assessment.output;

    if !output.bmi.is_finite() {
        return Err(ApiError::Internal(format!(
            "non-finite BMI for height {} cm, weight {} kg",
            input.height_cm, input.weight_kg
        )));
    }

    info!(
        bmi = output.bmi,
        total_score = output.total_score,
        risk_category = %output.risk_category,
        "risk calculated"
    );
    for factor in &assessment.breakdown.factors {
        debug!(factor = %factor.label, points = factor.points, "{}", factor.description);
    }

    Ok(Json(output))
}
