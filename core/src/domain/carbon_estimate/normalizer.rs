//! Turns free-form model output into an [`EstimateResult`].
//!
//! Models do not always honour "return STRICT JSON": replies come wrapped in
//! prose or markdown fences, totals go missing, numbers arrive as strings. The
//! functions here recover what they can and only fail when an ingredient
//! carries a `carbon_kg` that is present but not a number.

use serde_json::{Map, Value};

use crate::domain::{
    carbon_estimate::entities::{EstimateResult, Ingredient},
    common::entities::app_errors::CoreError,
};

const UNKNOWN_INGREDIENT: &str = "Unknown";

/// Recovers a JSON object from raw model text.
///
/// The whole text is tried first, then the slice between the first `{` and
/// the last `}`. Returns `None` when neither yields an object. Text that is
/// valid JSON but not an object is never scanned.
pub fn recover_json_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(object)) => return Some(object),
        Ok(_) => return None,
        Err(_) => {}
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }

    match serde_json::from_str::<Value>(&text[start..=end]) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}

/// Normalizes raw model text into the canonical result shape.
///
/// `fallback_dish` is used when the text holds no object or the object has no
/// `dish`.
pub fn normalize_estimate(raw: &str, fallback_dish: &str) -> Result<EstimateResult, CoreError> {
    let Some(object) = recover_json_object(raw) else {
        tracing::warn!("LLM response contained no JSON object, falling back to an empty estimate");
        return Ok(EstimateResult::empty(fallback_dish));
    };

    coerce_estimate(&object, fallback_dish)
}

fn coerce_estimate(
    object: &Map<String, Value>,
    fallback_dish: &str,
) -> Result<EstimateResult, CoreError> {
    let entries: &[Value] = match object.get("ingredients") {
        Some(Value::Array(entries)) => entries.as_slice(),
        _ => &[],
    };

    let ingredients = entries
        .iter()
        .filter_map(Value::as_object)
        .map(coerce_ingredient)
        .collect::<Result<Vec<_>, _>>()?;

    let dropped = entries.len() - ingredients.len();
    if dropped > 0 {
        tracing::debug!(dropped, "ignored non-object ingredient entries");
    }

    let total = match object.get("estimated_carbon_kg") {
        None | Some(Value::Null) => ingredients.iter().map(|i| i.carbon_kg).sum(),
        Some(value) => coerce_to_f64(value).unwrap_or(0.0),
    };

    let dish = match object.get("dish") {
        None | Some(Value::Null) => fallback_dish.to_string(),
        Some(value) => coerce_to_string(value),
    };

    Ok(EstimateResult {
        dish,
        estimated_carbon_kg: round_to_cents(if is_falsy(total) { 0.0 } else { total }),
        ingredients,
    })
}

fn coerce_ingredient(entry: &Map<String, Value>) -> Result<Ingredient, CoreError> {
    let name = match entry.get("name") {
        None | Some(Value::Null) => UNKNOWN_INGREDIENT.to_string(),
        Some(value) => coerce_to_string(value),
    };

    let carbon_kg = match entry.get("carbon_kg") {
        None => 0.0,
        Some(value) => coerce_to_f64(value)
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                tracing::error!("Invalid carbon_kg for ingredient {}: {}", name, value);
                CoreError::ExternalServiceError(format!(
                    "could not convert carbon_kg value {} to a number",
                    value
                ))
            })?,
    };

    Ok(Ingredient { name, carbon_kg })
}

fn coerce_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_falsy(value: f64) -> bool {
    value == 0.0 || !value.is_finite()
}

fn round_to_cents(value: f64) -> f64 {
    let rounded = (value * 100.0).round_ties_even() / 100.0;
    if rounded.is_finite() { rounded } else { value }
}
