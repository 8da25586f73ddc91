mod chat_model;
mod conversation_repository;
mod image_model;
mod painting_repository;
mod repository_error;

pub use chat_model::{ChatModel, ChatModelError, ChatRole, ChatTurn, CompletionRequest};
pub use conversation_repository::ConversationRepository;
pub use image_model::{ImageModel, ImageModelError};
pub use painting_repository::PaintingRepository;
pub use repository_error::RepositoryError;
