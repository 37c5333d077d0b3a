use crate::domain::carbon_estimate::entities::ImagePayload;

/// Dish name used when the model gives no usable name for an uploaded image.
pub const UPLOADED_DISH_PLACEHOLDER: &str = "Uploaded Dish";

#[derive(Debug, Clone)]
pub struct EstimateDishInput {
    pub dish: String,
}

#[derive(Debug, Clone)]
pub struct EstimateImageInput {
    pub image: ImagePayload,
}
