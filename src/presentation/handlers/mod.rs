mod gallery;
mod generate;
mod health;
mod message;

pub use gallery::{conversation_paintings_handler, list_conversations_handler};
pub use generate::generate_handler;
pub use health::health_handler;
pub use message::message_handler;
