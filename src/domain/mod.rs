mod conversation;
mod conversation_id;
mod message;
mod message_role;
mod painting;
mod painting_id;

pub use conversation::{Conversation, NewConversation};
pub use conversation_id::ConversationId;
pub use message::Message;
pub use message_role::MessageRole;
pub use painting::{NewPainting, Painting};
pub use painting_id::PaintingId;
