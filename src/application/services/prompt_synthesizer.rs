use std::sync::Arc;

use crate::application::ports::{ChatModel, ChatModelError, ChatTurn, CompletionRequest};
use crate::domain::Message;

use super::completion_text::normalize_completion;

const SYNTHESIS_TEMPERATURE: f32 = 0.7;
const SYNTHESIS_MAX_TOKENS: u32 = 500;

const SYNTHESIS_SYSTEM_PROMPT: &str = "You are an expert at creating detailed image prompts \
for AI art generation. Analyze the conversation and create a single, richly detailed prompt \
that captures the emotional essence and key themes. The prompt should be descriptive, \
evocative, and specific enough to generate a meaningful painting. Focus on style, mood, \
colors, and visual elements that represent the emotional context of the conversation.";

const SYNTHESIS_REQUEST: &str = "Based on our conversation, create a detailed image prompt \
for an AI to generate a painting that captures the emotions and themes we discussed.";

/// Derives a single image-generation prompt from a conversation
/// transcript with one text-completion call.
pub struct PromptSynthesizer<C>
where
    C: ChatModel,
{
    chat_model: Arc<C>,
}

impl<C> PromptSynthesizer<C>
where
    C: ChatModel,
{
    pub fn new(chat_model: Arc<C>) -> Self {
        Self { chat_model }
    }

    /// Sends the transcript framed by the synthesis instructions and
    /// normalizes the response. Callers are expected to wait until the
    /// conversation has at least a couple of exchanges; nothing here
    /// enforces a minimum length. No retry: upstream failures propagate.
    pub async fn synthesize(&self, transcript: &[Message]) -> Result<String, SynthesisError> {
        let mut turns = Vec::with_capacity(transcript.len() + 2);
        turns.push(ChatTurn::system(SYNTHESIS_SYSTEM_PROMPT));
        turns.extend(transcript.iter().map(ChatTurn::from));
        turns.push(ChatTurn::user(SYNTHESIS_REQUEST));

        let completion = self
            .chat_model
            .complete(CompletionRequest {
                messages: turns,
                temperature: SYNTHESIS_TEMPERATURE,
                max_tokens: SYNTHESIS_MAX_TOKENS,
                json_object: false,
            })
            .await
            .map_err(SynthesisError::Completion)?;

        Ok(normalize_completion(&completion))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("completion: {0}")]
    Completion(ChatModelError),
}
