use std::sync::Arc;

use serde::Deserialize;

use crate::application::ports::{
    ChatModel, ChatModelError, ChatTurn, CompletionRequest, ImageModel, ImageModelError,
};

use super::completion_text::normalize_completion;

const CAPTION_TEMPERATURE: f32 = 0.7;
const CAPTION_MAX_TOKENS: u32 = 250;

const CAPTION_SYSTEM_PROMPT: &str =
    "You are an art curator who provides titles and short descriptions for paintings.";

const DEFAULT_TITLE: &str = "Generated Title";
const DEFAULT_DESCRIPTION: &str = "Generated Description";

/// One successfully generated artifact, ready to be persisted once its
/// owning conversation exists.
#[derive(Debug, Clone)]
pub struct ArtifactDraft {
    pub prompt: String,
    pub image_url: String,
    pub title: String,
    pub description: String,
}

/// A variant whose image step failed, tagged with its index so the
/// orchestrator can tell which task of the batch went down.
#[derive(Debug, thiserror::Error)]
#[error("variant {index}: {source}")]
pub struct VariantFailure {
    pub index: usize,
    #[source]
    pub source: ImageModelError,
}

#[derive(Debug, Deserialize)]
struct Caption {
    title: String,
    description: String,
}

/// Produces one artifact per call: image first, then a curator caption.
/// The image is essential and its failure fails the variant; the caption
/// is cosmetic and every failure on that path falls back to fixed
/// defaults.
pub struct ArtifactGenerator<C, I>
where
    C: ChatModel,
    I: ImageModel,
{
    chat_model: Arc<C>,
    image_model: Arc<I>,
}

impl<C, I> ArtifactGenerator<C, I>
where
    C: ChatModel,
    I: ImageModel,
{
    pub fn new(chat_model: Arc<C>, image_model: Arc<I>) -> Self {
        Self {
            chat_model,
            image_model,
        }
    }

    /// Each upstream call is attempted exactly once; there are no retries
    /// at this layer.
    pub async fn generate(
        &self,
        base_prompt: &str,
        variant_index: usize,
    ) -> Result<ArtifactDraft, VariantFailure> {
        let variant_prompt = format!("{} (Variation {})", base_prompt, variant_index + 1);

        let image_url = self
            .image_model
            .generate(&variant_prompt)
            .await
            .map_err(|source| VariantFailure {
                index: variant_index,
                source,
            })?;

        let caption = match self.caption(&variant_prompt).await {
            Ok(caption) => caption,
            Err(e) => {
                tracing::warn!(
                    variant = variant_index,
                    error = %e,
                    "Caption generation failed, substituting defaults"
                );
                Caption {
                    title: DEFAULT_TITLE.to_string(),
                    description: DEFAULT_DESCRIPTION.to_string(),
                }
            }
        };

        Ok(ArtifactDraft {
            prompt: variant_prompt,
            image_url,
            title: caption.title,
            description: caption.description,
        })
    }

    async fn caption(&self, variant_prompt: &str) -> Result<Caption, CaptionError> {
        let request = format!(
            "Create a title and a short description (max 100 words) for a painting based on \
this prompt: '{}'. Respond in JSON format with 'title' and 'description' fields.",
            variant_prompt
        );

        let completion = self
            .chat_model
            .complete(CompletionRequest {
                messages: vec![
                    ChatTurn::system(CAPTION_SYSTEM_PROMPT),
                    ChatTurn::user(request),
                ],
                temperature: CAPTION_TEMPERATURE,
                max_tokens: CAPTION_MAX_TOKENS,
                json_object: true,
            })
            .await
            .map_err(CaptionError::Completion)?;

        let normalized = normalize_completion(&completion);
        serde_json::from_str(&normalized).map_err(|e| CaptionError::Unparsable(e.to_string()))
    }
}

/// Absorbed inside [`ArtifactGenerator::generate`]; never escapes to
/// callers.
#[derive(Debug, thiserror::Error)]
enum CaptionError {
    #[error("completion: {0}")]
    Completion(ChatModelError),
    #[error("unparsable caption: {0}")]
    Unparsable(String),
}
