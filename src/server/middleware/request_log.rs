use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};

/// Logs the URI and client address of every request.
///
/// The address is only known when the server runs with connect info, so requests
/// dispatched in-process are logged with an unknown address.
pub async fn log_request(request: Request, next: Next) -> Response {
    let ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    tracing::info!("New request: {} from ip {}.", request.uri(), ip);

    next.run(request).await
}
