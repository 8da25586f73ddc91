use async_trait::async_trait;

use crate::domain::{ConversationId, NewPainting, Painting, PaintingId};

use super::RepositoryError;

#[async_trait]
pub trait PaintingRepository: Send + Sync {
    /// Stores a new painting and returns it with its assigned id. Fails
    /// with [`RepositoryError::ConstraintViolation`] when the referenced
    /// conversation does not exist.
    async fn create(&self, painting: NewPainting) -> Result<Painting, RepositoryError>;

    /// Absent ids are `Ok(None)`, never an error.
    async fn get(&self, id: PaintingId) -> Result<Option<Painting>, RepositoryError>;

    /// Paintings owned by one conversation, in creation order.
    async fn list_by_conversation(
        &self,
        conversation_id: ConversationId,
    ) -> Result<Vec<Painting>, RepositoryError>;
}
