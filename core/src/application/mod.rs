use crate::{
    domain::{
        carbon_estimate::schema::get_carbon_estimate_schema,
        common::{FoodprintConfig, services::Service},
    },
    infrastructure::llm::GeminiLLMClient,
};

pub type FoodprintService = Service<GeminiLLMClient>;

/// Builds the process-wide service. A missing API key is not fatal: the
/// service starts without an LLM client and estimates fail until the process
/// is restarted with credentials.
pub fn create_service(config: FoodprintConfig) -> FoodprintService {
    let Some(api_key) = config.llm.api_key().map(str::to_string) else {
        tracing::warn!("GEMINI_API_KEY is not set, estimate endpoints will be unavailable");
        return Service::new(None);
    };

    let mut llm_client = GeminiLLMClient::new(api_key, config.llm.gemini_model)
        .with_base_url(config.llm.gemini_base_url);

    if config.llm.json_mode {
        llm_client = llm_client.with_response_schema(get_carbon_estimate_schema());
    }

    tracing::info!(
        model = llm_client.model_name(),
        json_mode = config.llm.json_mode,
        "Gemini client configured"
    );

    Service::new(Some(llm_client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::LLMConfig;

    #[test]
    fn test_create_service_without_key_has_no_llm() {
        let service = create_service(FoodprintConfig {
            llm: LLMConfig::default(),
        });
        assert!(!service.is_llm_configured());
    }

    #[test]
    fn test_create_service_with_key_has_llm() {
        let service = create_service(FoodprintConfig {
            llm: LLMConfig {
                gemini_api_key: Some("key".to_string()),
                json_mode: true,
                ..Default::default()
            },
        });
        assert!(service.is_llm_configured());
    }
}
