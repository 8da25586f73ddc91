use std::sync::Arc;

use crate::application::ports::{ChatModel, ChatModelError, ChatTurn, CompletionRequest};
use crate::domain::Message;

const REPLY_TEMPERATURE: f32 = 0.7;
const REPLY_MAX_TOKENS: u32 = 800;

/// Produces the assistant's next turn for an ongoing conversation.
pub struct ReplyService<C>
where
    C: ChatModel,
{
    chat_model: Arc<C>,
}

impl<C> ReplyService<C>
where
    C: ChatModel,
{
    pub fn new(chat_model: Arc<C>) -> Self {
        Self { chat_model }
    }

    pub async fn reply(&self, message: &str, history: &[Message]) -> Result<String, ReplyError> {
        let mut turns: Vec<ChatTurn> = history.iter().map(ChatTurn::from).collect();
        turns.push(ChatTurn::user(message));

        let completion = self
            .chat_model
            .complete(CompletionRequest {
                messages: turns,
                temperature: REPLY_TEMPERATURE,
                max_tokens: REPLY_MAX_TOKENS,
                json_object: false,
            })
            .await
            .map_err(ReplyError::Completion)?;

        Ok(completion)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    #[error("completion: {0}")]
    Completion(ChatModelError),
}
