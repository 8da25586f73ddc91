use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use crate::application::ports::{
    ChatModel, ConversationRepository, ImageModel, PaintingRepository, RepositoryError,
};
use crate::domain::{Message, NewConversation, NewPainting, Painting};

use super::artifact_generator::{ArtifactDraft, ArtifactGenerator, VariantFailure};
use super::prompt_synthesizer::{PromptSynthesizer, SynthesisError};

/// How a batch with failed variants is settled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FanoutPolicy {
    /// One failed variant aborts the whole batch; nothing is persisted.
    #[default]
    AllOrNothing,
    /// Keep whatever succeeded; fail only when every variant failed.
    AtLeastOne,
}

/// What a successful generation hands back to the HTTP boundary.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub prompt: String,
    pub paintings: Vec<Painting>,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("prompt synthesis: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("{0}")]
    Variant(VariantFailure),
    #[error("all {0} variants failed")]
    NoVariants(usize),
    #[error("persistence: {0}")]
    Persistence(#[from] RepositoryError),
}

/// Drives one generation request end to end: synthesize the base prompt,
/// fan out the variant tasks, settle the batch, then persist the
/// conversation followed by its paintings. Persistence runs strictly
/// after generation, so a failed batch leaves the store untouched and a
/// painting is only ever written once its conversation exists.
pub struct GenerationOrchestrator<C, I>
where
    C: ChatModel,
    I: ImageModel,
{
    prompt_synthesizer: Arc<PromptSynthesizer<C>>,
    artifact_generator: Arc<ArtifactGenerator<C, I>>,
    conversation_repository: Arc<dyn ConversationRepository>,
    painting_repository: Arc<dyn PaintingRepository>,
    variant_count: usize,
    fanout_policy: FanoutPolicy,
}

impl<C, I> GenerationOrchestrator<C, I>
where
    C: ChatModel,
    I: ImageModel,
{
    pub fn new(
        prompt_synthesizer: Arc<PromptSynthesizer<C>>,
        artifact_generator: Arc<ArtifactGenerator<C, I>>,
        conversation_repository: Arc<dyn ConversationRepository>,
        painting_repository: Arc<dyn PaintingRepository>,
        variant_count: usize,
        fanout_policy: FanoutPolicy,
    ) -> Self {
        Self {
            prompt_synthesizer,
            artifact_generator,
            conversation_repository,
            painting_repository,
            variant_count,
            fanout_policy,
        }
    }

    /// A failed run retains no state; the caller retries from scratch.
    pub async fn run(
        &self,
        transcript: Vec<Message>,
    ) -> Result<GenerationOutcome, GenerationError> {
        let base_prompt = self.prompt_synthesizer.synthesize(&transcript).await?;

        tracing::debug!(variants = self.variant_count, "Base prompt synthesized");

        // All variant futures are in flight together; join_all returns
        // them in variant order no matter how completion interleaves.
        let tasks = (0..self.variant_count)
            .map(|index| self.artifact_generator.generate(&base_prompt, index));
        let results = futures::future::join_all(tasks).await;

        let drafts = self.settle(results)?;

        tracing::info!(variants = drafts.len(), "Artifacts generated, persisting");

        let conversation = self
            .conversation_repository
            .create(NewConversation {
                title: conversation_title(),
                messages: transcript,
            })
            .await?;

        let mut paintings = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let painting = self
                .painting_repository
                .create(NewPainting {
                    conversation_id: conversation.id,
                    prompt: draft.prompt,
                    image_url: draft.image_url,
                    title: draft.title,
                    description: draft.description,
                })
                .await?;
            paintings.push(painting);
        }

        Ok(GenerationOutcome {
            prompt: base_prompt,
            paintings,
        })
    }

    fn settle(
        &self,
        results: Vec<Result<ArtifactDraft, VariantFailure>>,
    ) -> Result<Vec<ArtifactDraft>, GenerationError> {
        match self.fanout_policy {
            FanoutPolicy::AllOrNothing => {
                let mut drafts = Vec::with_capacity(results.len());
                for result in results {
                    drafts.push(result.map_err(GenerationError::Variant)?);
                }
                Ok(drafts)
            }
            FanoutPolicy::AtLeastOne => {
                let total = results.len();
                let mut drafts = Vec::with_capacity(total);
                let mut failed = 0usize;
                for result in results {
                    match result {
                        Ok(draft) => drafts.push(draft),
                        Err(e) => {
                            failed += 1;
                            tracing::warn!(
                                variant = e.index,
                                error = %e,
                                "Variant failed, continuing with the rest"
                            );
                        }
                    }
                }
                if drafts.is_empty() {
                    return Err(GenerationError::NoVariants(total));
                }
                if failed > 0 {
                    tracing::warn!(
                        failed,
                        succeeded = drafts.len(),
                        "Batch settled with partial success"
                    );
                }
                Ok(drafts)
            }
        }
    }
}

fn conversation_title() -> String {
    format!("Conversation {}", Utc::now().format("%-m/%-d/%Y"))
}
