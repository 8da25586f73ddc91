use async_trait::async_trait;

use crate::domain::{Conversation, ConversationId, NewConversation};

use super::RepositoryError;

#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Stores a new conversation and returns it with its assigned id.
    async fn create(&self, conversation: NewConversation)
    -> Result<Conversation, RepositoryError>;

    /// Absent ids are `Ok(None)`, never an error.
    async fn get(&self, id: ConversationId) -> Result<Option<Conversation>, RepositoryError>;

    async fn list(&self) -> Result<Vec<Conversation>, RepositoryError>;
}
