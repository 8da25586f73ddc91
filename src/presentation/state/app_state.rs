use std::sync::Arc;

use crate::application::ports::{
    ChatModel, ConversationRepository, ImageModel, PaintingRepository,
};
use crate::application::services::{GenerationOrchestrator, ReplyService};

pub struct AppState<C, I>
where
    C: ChatModel,
    I: ImageModel,
{
    pub reply_service: Arc<ReplyService<C>>,
    pub generation_orchestrator: Arc<GenerationOrchestrator<C, I>>,
    pub conversation_repository: Arc<dyn ConversationRepository>,
    pub painting_repository: Arc<dyn PaintingRepository>,
}

impl<C, I> Clone for AppState<C, I>
where
    C: ChatModel,
    I: ImageModel,
{
    fn clone(&self) -> Self {
        Self {
            reply_service: Arc::clone(&self.reply_service),
            generation_orchestrator: Arc::clone(&self.generation_orchestrator),
            conversation_repository: Arc::clone(&self.conversation_repository),
            painting_repository: Arc::clone(&self.painting_repository),
        }
    }
}
