use axum::Router;
use axum::body::Body;
use axum::extract::Extension;
use axum::http::Request;
use axum::middleware;
use axum::routing::get;
use tower::ServiceExt;
use uuid::Uuid;

use atelier::infrastructure::observability::{
    REQUEST_ID_HEADER, RequestId, request_id_middleware,
};

async fn echo_extension(Extension(request_id): Extension<RequestId>) -> String {
    request_id.0
}

fn app() -> Router {
    Router::new()
        .route("/probe", get(echo_extension))
        .layer(middleware::from_fn(request_id_middleware))
}

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[tokio::test]
async fn given_no_header_when_handled_then_mints_uuid_and_exposes_extension() {
    let response = app()
        .oneshot(Request::builder().uri("/probe").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let header = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap();
    assert!(Uuid::parse_str(&header).is_ok());

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&body), header);
}

#[tokio::test]
async fn given_caller_supplied_id_when_handled_then_propagates_it() {
    let request = Request::builder()
        .uri("/probe")
        .header(REQUEST_ID_HEADER, "trace-me-42")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get(REQUEST_ID_HEADER).unwrap(),
        "trace-me-42"
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&body), "trace-me-42");
}
