use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ConversationId, PaintingId};

/// A generated artifact. `prompt` is the variant prompt (base prompt plus
/// variation marker), and `conversation_id` always references a
/// conversation that was stored before the painting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Painting {
    pub id: PaintingId,
    pub conversation_id: ConversationId,
    pub prompt: String,
    pub image_url: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for a painting; the repository assigns id and created_at.
#[derive(Debug, Clone)]
pub struct NewPainting {
    pub conversation_id: ConversationId,
    pub prompt: String,
    pub image_url: String,
    pub title: String,
    pub description: String,
}
