use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatModel, ImageModel};
use crate::domain::{Message, Painting};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub messages: Vec<Message>,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub prompt: String,
    pub paintings: Vec<Painting>,
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
pub async fn generate_handler<C, I>(
    State(state): State<AppState<C, I>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> impl IntoResponse
where
    C: ChatModel + 'static,
    I: ImageModel + 'static,
{
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Rejected generate request");
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

    tracing::debug!(history_len = request.messages.len(), "Generating paintings");

    match state
        .generation_orchestrator
        .run(request.messages)
        .await
    {
        Ok(outcome) => {
            tracing::info!(
                paintings = outcome.paintings.len(),
                prompt = %sanitize_prompt(&outcome.prompt),
                "Paintings generated"
            );
            (
                StatusCode::OK,
                Json(GenerateResponse {
                    prompt: outcome.prompt,
                    paintings: outcome.paintings,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Painting generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Failed to generate paintings".to_string(),
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
