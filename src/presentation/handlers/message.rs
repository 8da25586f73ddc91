use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatModel, ImageModel};
use crate::domain::Message;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct MessageRequest {
    pub message: String,
    pub messages: Vec<Message>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct ValidationErrorResponse {
    pub message: String,
    pub errors: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub error: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn message_handler<C, I>(
    State(state): State<AppState<C, I>>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> impl IntoResponse
where
    C: ChatModel + 'static,
    I: ImageModel + 'static,
{
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Rejected message request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse {
                    message: "Invalid request data".to_string(),
                    errors: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    if request.message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorResponse {
                message: "Invalid request data".to_string(),
                errors: "message must not be empty".to_string(),
            }),
        )
            .into_response();
    }

    tracing::debug!(
        message = %sanitize_prompt(&request.message),
        history_len = request.messages.len(),
        "Processing chat message"
    );

    match state
        .reply_service
        .reply(&request.message, &request.messages)
        .await
    {
        Ok(reply) => {
            tracing::info!("Chat reply produced");
            (StatusCode::OK, Json(MessageResponse { message: reply })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Chat reply failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Failed to get AI response".to_string(),
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
