use async_trait::async_trait;

/// Image-generation capability: one prompt in, one hosted image URL out.
/// Fixed generation parameters (dimensions, negative prompt, sample count,
/// safety checker) are adapter configuration.
#[async_trait]
pub trait ImageModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ImageModelError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ImageModelError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
