use std::collections::BTreeSet;

/// Recognized family-history conditions and the points each one adds.
pub const CONDITION_POINTS: &[(&str, u32)] = &[("diabetes", 10), ("cancer", 10), ("alzheimer", 10)];

/// Round to 2 decimal places using the exact decimal value of `value`.
///
/// `7.675_f64` is stored as 7.67499.. and rounds down. An exact binary tie
/// (e.g. 0.125) rounds up to the larger neighbour.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.fract().abs() == 0.5 && value.mul_add(100.0, -scaled) == 0.0 {
        return scaled.ceil() / 100.0;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// BMI = weight / height(m)^2, rounded to 2 decimals.
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round2(weight_kg / (height_m * height_m))
}

pub fn age_points(age: u32) -> u32 {
    match age {
        0..=29 => 0,
        30..=44 => 10,
        45..=59 => 20,
        _ => 30,
    }
}

/// Points for an already rounded BMI.
///
/// Anything outside the normal and overweight bands scores as obese,
/// including underweight values.
pub fn bmi_points(bmi: f64) -> u32 {
    if (18.5..=24.9).contains(&bmi) {
        0
    } else if (25.0..=29.9).contains(&bmi) {
        30
    } else {
        75
    }
}

/// Blood pressure rules, first match wins. The OR rules overlap on purpose
/// and must not be rewritten as disjoint ranges.
pub fn blood_pressure_points(systolic: u32, diastolic: u32) -> u32 {
    if systolic < 120 && diastolic < 80 {
        0
    } else if systolic < 130 && diastolic < 80 {
        15
    } else if systolic < 140 || diastolic < 90 {
        30
    } else if systolic < 180 || diastolic < 120 {
        75
    } else {
        100
    }
}

/// Recognized conditions present in the history, in table order.
pub fn matched_conditions(history: &BTreeSet<String>) -> Vec<&'static str> {
    CONDITION_POINTS
        .iter()
        .filter(|(condition, _)| history.contains(*condition))
        .map(|(condition, _)| *condition)
        .collect()
}

pub fn family_history_points(history: &BTreeSet<String>) -> u32 {
    CONDITION_POINTS
        .iter()
        .filter(|(condition, _)| history.contains(*condition))
        .map(|(_, points)| points)
        .sum()
}
