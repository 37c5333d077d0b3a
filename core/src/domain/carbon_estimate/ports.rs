use std::future::Future;

use crate::domain::{
    carbon_estimate::{
        entities::{EstimateResult, ImagePayload},
        value_objects::{EstimateDishInput, EstimateImageInput},
    },
    common::entities::app_errors::CoreError,
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Sends the prompt followed by the image as one multi-part request.
    fn generate_with_image(
        &self,
        prompt: String,
        image: ImagePayload,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for carbon estimate business logic
#[cfg_attr(test, mockall::automock)]
pub trait CarbonEstimateService: Send + Sync {
    fn estimate_dish(
        &self,
        input: EstimateDishInput,
    ) -> impl Future<Output = Result<EstimateResult, CoreError>> + Send;

    fn estimate_image(
        &self,
        input: EstimateImageInput,
    ) -> impl Future<Output = Result<EstimateResult, CoreError>> + Send;
}
