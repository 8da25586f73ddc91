use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{ChatModel, ImageModel};
use crate::domain::ConversationId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct NotFoundResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn list_conversations_handler<C, I>(
    State(state): State<AppState<C, I>>,
) -> impl IntoResponse
where
    C: ChatModel + 'static,
    I: ImageModel + 'static,
{
    match state.conversation_repository.list().await {
        Ok(conversations) => {
            tracing::debug!(count = conversations.len(), "Listed conversations");
            (StatusCode::OK, Json(conversations)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Listing conversations failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Failed to list conversations".to_string(),
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn conversation_paintings_handler<C, I>(
    State(state): State<AppState<C, I>>,
    Path(id): Path<i64>,
) -> impl IntoResponse
where
    C: ChatModel + 'static,
    I: ImageModel + 'static,
{
    let conversation_id = ConversationId::new(id);

    let conversation = match state.conversation_repository.get(conversation_id).await {
        Ok(conversation) => conversation,
        Err(e) => {
            tracing::error!(error = %e, "Conversation lookup failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Failed to list paintings".to_string(),
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    if conversation.is_none() {
        return (
            StatusCode::NOT_FOUND,
            Json(NotFoundResponse {
                message: "Conversation not found".to_string(),
            }),
        )
            .into_response();
    }

    match state
        .painting_repository
        .list_by_conversation(conversation_id)
        .await
    {
        Ok(paintings) => {
            tracing::debug!(count = paintings.len(), "Listed paintings");
            (StatusCode::OK, Json(paintings)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Listing paintings failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Failed to list paintings".to_string(),
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
