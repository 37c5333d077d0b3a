use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_IMAGE_MEDIA_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    #[schema(example = "Rice")]
    pub name: String,
    /// Estimated emissions in kg CO2e.
    #[schema(example = 1.1)]
    pub carbon_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EstimateResult {
    #[schema(example = "Chicken Biryani")]
    pub dish: String,
    /// Total estimate in kg CO2e, rounded to 2 decimal places.
    #[schema(example = 4.2)]
    pub estimated_carbon_kg: f64,
    pub ingredients: Vec<Ingredient>,
}

impl EstimateResult {
    pub fn empty(dish: impl Into<String>) -> Self {
        Self {
            dish: dish.into(),
            estimated_carbon_kg: 0.0,
            ingredients: Vec::new(),
        }
    }
}

/// An uploaded image, sent to the model as a single inline part.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePayload {
    pub media_type: String,
    pub data: Bytes,
}

impl ImagePayload {
    pub fn new(data: impl Into<Bytes>, media_type: Option<String>) -> Self {
        let media_type = media_type
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_MEDIA_TYPE.to_string());

        Self {
            media_type,
            data: data.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
