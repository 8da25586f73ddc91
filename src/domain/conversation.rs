use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ConversationId, Message};

/// A stored conversation. Created exactly once per generation request and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: ConversationId,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for a conversation; the repository assigns id and
/// created_at.
#[derive(Debug, Clone)]
pub struct NewConversation {
    pub title: String,
    pub messages: Vec<Message>,
}
