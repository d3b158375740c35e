use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// One food item as broken out by the model. We never build these ourselves,
// only validate and round what the provider returns.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct MealItem {
    pub name: String,
    pub quantity: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

// Full nutrition estimate for a meal. The totals are the model's own numbers,
// they are not reconciled against the per-item sums.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct MealEstimate {
    pub description: String,
    pub items: Vec<MealItem>,
    pub total_calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub confidence: Confidence,
    pub assumptions: Vec<String>,
}

// Shape-validate the completion text. serde does the field and type checks and
// its message names the first offending field, so a bad payload surfaces as a
// descriptive upstream error instead of a panic or a partial result.
pub fn parse_estimate(content: &str) -> Result<MealEstimate, ApiError> {
    serde_json::from_str(content)
        .map_err(|e| ApiError::Upstream(format!("invalid response format from AI service: {e}")))
}

// Round every numeric field before the estimate leaves the service:
// calories to the nearest integer, macros to one decimal place.
pub fn normalize(mut estimate: MealEstimate) -> MealEstimate {
    for item in &mut estimate.items {
        item.calories = round_calories(item.calories);
        item.protein = round_macro(item.protein);
        item.carbs = round_macro(item.carbs);
        item.fat = round_macro(item.fat);
    }
    estimate.total_calories = round_calories(estimate.total_calories);
    estimate.protein = round_macro(estimate.protein);
    estimate.carbs = round_macro(estimate.carbs);
    estimate.fat = round_macro(estimate.fat);
    estimate
}

fn round_calories(v: f64) -> f64 {
    v.round()
}

fn round_macro(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
