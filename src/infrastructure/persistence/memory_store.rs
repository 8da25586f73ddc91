use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::application::ports::{ConversationRepository, PaintingRepository, RepositoryError};
use crate::domain::{
    Conversation, ConversationId, NewConversation, NewPainting, Painting, PaintingId,
};

/// Process-lifetime storage for conversations and paintings, registered
/// as both repository capabilities. One lock guards both maps and the id
/// counters, so id assignment stays serialized across concurrently
/// handled requests and the painting→conversation check is race-free.
pub struct MemoryStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    conversations: HashMap<ConversationId, Conversation>,
    paintings: HashMap<PaintingId, Painting>,
    next_conversation_id: i64,
    next_painting_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                conversations: HashMap::new(),
                paintings: HashMap::new(),
                next_conversation_id: 1,
                next_painting_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationRepository for MemoryStore {
    #[instrument(skip(self, conversation))]
    async fn create(
        &self,
        conversation: NewConversation,
    ) -> Result<Conversation, RepositoryError> {
        let mut inner = self.inner.write().await;
        let id = ConversationId::new(inner.next_conversation_id);
        inner.next_conversation_id += 1;

        let conversation = Conversation {
            id,
            title: conversation.title,
            messages: conversation.messages,
            created_at: Utc::now(),
        };
        inner.conversations.insert(id, conversation.clone());

        tracing::debug!(conversation_id = %id, "Conversation stored");
        Ok(conversation)
    }

    async fn get(&self, id: ConversationId) -> Result<Option<Conversation>, RepositoryError> {
        let inner = self.inner.read().await;
        Ok(inner.conversations.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Conversation>, RepositoryError> {
        let inner = self.inner.read().await;
        let mut conversations: Vec<Conversation> =
            inner.conversations.values().cloned().collect();
        conversations.sort_by_key(|c| c.id);
        Ok(conversations)
    }
}

#[async_trait]
impl PaintingRepository for MemoryStore {
    #[instrument(skip(self, painting), fields(conversation_id = %painting.conversation_id))]
    async fn create(&self, painting: NewPainting) -> Result<Painting, RepositoryError> {
        let mut inner = self.inner.write().await;

        if !inner.conversations.contains_key(&painting.conversation_id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "painting references unknown conversation {}",
                painting.conversation_id
            )));
        }

        let id = PaintingId::new(inner.next_painting_id);
        inner.next_painting_id += 1;

        let painting = Painting {
            id,
            conversation_id: painting.conversation_id,
            prompt: painting.prompt,
            image_url: painting.image_url,
            title: painting.title,
            description: painting.description,
            created_at: Utc::now(),
        };
        inner.paintings.insert(id, painting.clone());

        tracing::debug!(painting_id = %id, "Painting stored");
        Ok(painting)
    }

    async fn get(&self, id: PaintingId) -> Result<Option<Painting>, RepositoryError> {
        let inner = self.inner.read().await;
        Ok(inner.paintings.get(&id).cloned())
    }

    async fn list_by_conversation(
        &self,
        conversation_id: ConversationId,
    ) -> Result<Vec<Painting>, RepositoryError> {
        let inner = self.inner.read().await;
        let mut paintings: Vec<Painting> = inner
            .paintings
            .values()
            .filter(|p| p.conversation_id == conversation_id)
            .cloned()
            .collect();
        paintings.sort_by_key(|p| p.id);
        Ok(paintings)
    }
}
