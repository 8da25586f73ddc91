use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{ChatModel, ImageModel};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    conversation_paintings_handler, generate_handler, health_handler,
    list_conversations_handler, message_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<C, I>(state: AppState<C, I>) -> Router
where
    C: ChatModel + 'static,
    I: ImageModel + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/health", get(health_handler))
        .route("/api/conversation/message", post(message_handler::<C, I>))
        .route("/api/conversation/generate", post(generate_handler::<C, I>))
        .route("/api/conversations", get(list_conversations_handler::<C, I>))
        .route(
            "/api/conversations/{id}/paintings",
            get(conversation_paintings_handler::<C, I>),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
