use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::MessageRole;

/// One turn of a conversation transcript. Timestamps are epoch
/// milliseconds, matching the client wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: i64,
}

impl Message {
    pub fn new(role: MessageRole, content: String) -> Self {
        Self {
            role,
            content,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}
