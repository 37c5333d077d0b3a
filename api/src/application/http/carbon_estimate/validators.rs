use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct EstimateDishRequest {
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Chicken Biryani")]
    pub dish: String,
}

/// Multipart body of `POST /estimate/image`, documentation only.
#[derive(ToSchema)]
pub struct EstimateImageForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::from("'dish' must be a non-empty string"));
        return Err(error);
    }

    Ok(())
}
