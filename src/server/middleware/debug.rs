use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::server::error::{ErrorDetail, X_STATUS_CODE};

/// Replaces the body of 500 responses with the plain-text error detail.
///
/// Only installed in debug mode. Responses without an attached `ErrorDetail` pass through.
pub async fn expose_error_detail(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    match response.extensions().get::<ErrorDetail>() {
        Some(ErrorDetail(detail)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(X_STATUS_CODE, StatusCode::INTERNAL_SERVER_ERROR.as_str())],
            detail.clone(),
        )
            .into_response(),
        None => response,
    }
}
