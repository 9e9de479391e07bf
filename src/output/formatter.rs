use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::scoring::{RiskAssessment, RiskCategory};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Category label, colored by severity when colors are enabled.
pub fn format_category(category: RiskCategory, use_colors: bool) -> String {
    if !use_colors {
        return category.label().to_string();
    }
    match category {
        RiskCategory::Low => category.label().green().to_string(),
        RiskCategory::Moderate => category.label().yellow().to_string(),
        RiskCategory::High => category.label().red().to_string(),
        RiskCategory::Uninsurable => category.label().red().bold().to_string(),
    }
}

/// Format an assessment as a multi-line breakdown
///
/// ```text
/// BMI: 24.22
///   Age             35 years                   +10
///   BMI             24.22                       +0
///   Blood Pressure  118/75 mmHg                 +0
///   Family History  diabetes                   +10
/// Total: 20 (Low Risk)
/// ```
pub fn format_assessment(assessment: &RiskAssessment, use_colors: bool) -> String {
    let output = &assessment.output;
    let mut lines = Vec::with_capacity(assessment.breakdown.factors.len() + 2);

    lines.push(format!("BMI: {:.2}", output.bmi));

    for factor in &assessment.breakdown.factors {
        let points = format!("+{}", factor.points);
        let line = format!("  {:<16}{:<26}{:>4}", factor.label, factor.description, points);
        if use_colors && factor.points == 0 {
            lines.push(line.dimmed().to_string());
        } else {
            lines.push(line);
        }
    }

    let total = if use_colors {
        output.total_score.bold().to_string()
    } else {
        output.total_score.to_string()
    };
    lines.push(format!(
        "Total: {} ({})",
        total,
        format_category(output.risk_category, use_colors)
    ));

    lines.join("\n")
}

/// Same JSON the HTTP endpoint returns.
pub fn format_json(assessment: &RiskAssessment) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&assessment.output)
}
