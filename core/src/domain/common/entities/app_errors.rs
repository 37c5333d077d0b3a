use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("LLM client not configured")]
    LLMNotConfigured,

    #[error("{0}")]
    ExternalServiceError(String),
}
