use axum::{body::Body, http::StatusCode, middleware, routing::post, Router};
use tower::ServiceExt;

use crate::server::{
    error::{AppError, X_STATUS_CODE},
    middleware::debug::expose_error_detail,
};

fn app() -> Router {
    Router::new()
        .route(
            "/fail",
            post(|| async { Err::<(), _>(AppError::InternalError("broken row".to_string())) }),
        )
        .route(
            "/feedback",
            post(|| async { Err::<(), _>(AppError::Feedback("Not invited".to_string())) }),
        )
        .layer(middleware::from_fn(expose_error_detail))
}

async fn call(uri: &str) -> (StatusCode, Option<String>, String) {
    let request = axum::http::Request::post(uri).body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();

    let status = response.status();
    let header = response
        .headers()
        .get(X_STATUS_CODE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, header, String::from_utf8(body.to_vec()).unwrap())
}

/// Tests that a 500 response carries the error detail as plain text.
///
/// Expected: 500 with the detail body and the status header
#[tokio::test]
async fn exposes_detail_of_server_errors() {
    let (status, header, body) = call("/fail").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some("500"));
    assert_eq!(body, "broken row");
}

/// Tests that client error envelopes pass through untouched.
///
/// Expected: 200 with the JSON feedback envelope
#[tokio::test]
async fn keeps_client_errors() {
    let (status, _, body) = call("/feedback").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"status\":\"feedback\""));
}
