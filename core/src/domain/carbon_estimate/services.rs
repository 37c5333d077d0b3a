use crate::domain::{
    carbon_estimate::{
        entities::EstimateResult,
        normalizer::normalize_estimate,
        ports::{CarbonEstimateService, LLMClient},
        prompts::{build_image_instruction, build_text_instruction},
        value_objects::{EstimateDishInput, EstimateImageInput, UPLOADED_DISH_PLACEHOLDER},
    },
    common::{entities::app_errors::CoreError, services::Service},
};

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    fn require_llm_client(&self) -> Result<&LLM, CoreError> {
        self.llm_client.as_deref().ok_or_else(|| {
            tracing::error!("Estimate requested but no LLM client is configured");
            CoreError::LLMNotConfigured
        })
    }
}

impl<LLM> CarbonEstimateService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn estimate_dish(&self, input: EstimateDishInput) -> Result<EstimateResult, CoreError> {
        // 1. Validate input
        let dish = input.dish.trim();
        if dish.is_empty() {
            return Err(CoreError::InvalidInput(
                "'dish' must be a non-empty string".to_string(),
            ));
        }

        // 2. Check LLM availability
        let llm_client = self.require_llm_client()?;

        // 3. Build prompt and call LLM
        let prompt = build_text_instruction(dish);
        let raw_response = llm_client.generate_with_text(prompt).await?;
        tracing::debug!(dish, response_len = raw_response.len(), "LLM answered text estimate");

        // 4. Normalize
        normalize_estimate(&raw_response, dish)
    }

    async fn estimate_image(
        &self,
        input: EstimateImageInput,
    ) -> Result<EstimateResult, CoreError> {
        if input.image.is_empty() {
            return Err(CoreError::InvalidInput("Empty image upload".to_string()));
        }

        let llm_client = self.require_llm_client()?;

        let media_type = input.image.media_type.clone();
        let raw_response = llm_client
            .generate_with_image(build_image_instruction(), input.image)
            .await?;
        tracing::debug!(
            %media_type,
            response_len = raw_response.len(),
            "LLM answered image estimate"
        );

        normalize_estimate(&raw_response, UPLOADED_DISH_PLACEHOLDER)
    }
}
