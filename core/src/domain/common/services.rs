use std::sync::Arc;

use crate::domain::carbon_estimate::ports::LLMClient;

/// Application service. The LLM client is optional: when the process starts
/// without credentials the service still serves requests, but every estimate
/// fails with `CoreError::LLMNotConfigured`.
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: Option<Arc<LLM>>,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: Option<LLM>) -> Self {
        Self {
            llm_client: llm_client.map(Arc::new),
        }
    }

    pub fn is_llm_configured(&self) -> bool {
        self.llm_client.is_some()
    }
}

impl<LLM> Clone for Service<LLM>
where
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: self.llm_client.clone(),
        }
    }
}
