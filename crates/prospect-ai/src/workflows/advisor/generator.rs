use super::domain::Topic;

/// Prompt bundle handed to the external generation backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub topic: Topic,
}

/// Generation dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation backend unavailable: {0}")]
    Unavailable(String),
}

/// Seam for the external recommendation generator (in production an LLM
/// gateway; in tests and demos a canned implementation).
pub trait RecommendationGenerator: Send + Sync {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}
