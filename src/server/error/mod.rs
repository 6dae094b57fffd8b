//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the single table that maps
//! each error category to a response. Controllers never catch errors: everything is
//! propagated with `?` as an `AppError` and rendered here.
//!
//! | Category | HTTP | Body |
//! |---|---|---|
//! | invalid request | 200 | `{status: "error", message}` |
//! | feedback | 200 | `{status: "feedback", message}` |
//! | unknown route | 200 | `{status: "error", message: "Invalid URI."}` |
//! | control logic | 500 | `{status: "error", message: "An internal server error occurred."}` |
//! | anything else | 500 | `{status: "error", message: "An internal error occurred."}` |
//!
//! Every error response carries an `X-Status-Code` header repeating the HTTP status.

pub mod config;
pub mod control;
pub mod validation;


use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ResponseStatus},
    server::error::{config::ConfigError, control::ControlError, validation::UserValidationError},
};

/// Header repeating the HTTP status of an error response.
pub const X_STATUS_CODE: &str = "X-Status-Code";

pub const INVALID_URI_MESSAGE: &str = "Invalid URI.";
pub const CONTROL_LOGIC_MESSAGE: &str = "An internal server error occurred.";
pub const UNEXPECTED_MESSAGE: &str = "An internal error occurred.";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Session identity could not be resolved.
    ///
    /// `NotAuthenticated` is a client error, `SessionNotStarted` a control logic error.
    #[error(transparent)]
    ControlErr(#[from] ControlError),

    /// A user field failed validation, treated as an invalid argument.
    #[error(transparent)]
    UserErr(#[from] UserValidationError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error, raised by the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Socket binding or serving error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Missing or malformed request parameter.
    #[error("{0}")]
    InvalidArgument(String),

    /// Referenced resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Business rule violation whose message is meant for the end user.
    #[error("{0}")]
    Feedback(String),

    /// No route matches the requested URI and method.
    ///
    /// # Fields
    /// - The requested URI, logged but never returned
    #[error("No route for {0}")]
    RouteNotFound(String),

    /// Broken internal invariant, such as an invalid record read from storage.
    #[error("{0}")]
    InternalError(String),
}

/// Error detail attached to 500 responses so the debug middleware can expose it.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

/// Converts application errors into HTTP responses.
///
/// Client errors are logged at warn level and answered with status 200 so the mobile
/// client always gets a parsable envelope. Control logic and unexpected errors are
/// logged at error level and answered with a generic 500 that leaks no detail.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidArgument(_)
            | Self::UserErr(_)
            | Self::NotFound(_)
            | Self::ControlErr(ControlError::NotAuthenticated) => {
                tracing::warn!("Invalid request: {}", self);
                envelope(StatusCode::OK, ResponseStatus::Error, self.to_string())
            }
            Self::Feedback(message) => {
                tracing::warn!("Invalid request with feedback: {}", message);
                envelope(StatusCode::OK, ResponseStatus::Feedback, message)
            }
            Self::RouteNotFound(uri) => {
                tracing::warn!("Request for invalid route: {}", uri);
                envelope(
                    StatusCode::OK,
                    ResponseStatus::Error,
                    INVALID_URI_MESSAGE.to_string(),
                )
            }
            Self::ControlErr(_) | Self::InternalError(_) => {
                tracing::error!("{}", self);
                with_detail(
                    envelope(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ResponseStatus::Error,
                        CONTROL_LOGIC_MESSAGE.to_string(),
                    ),
                    self.to_string(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error message and returns a generic message to the client to avoid
/// leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("Unexpected exception: {}", self.0);

        with_detail(
            envelope(
                StatusCode::INTERNAL_SERVER_ERROR,
                ResponseStatus::Error,
                UNEXPECTED_MESSAGE.to_string(),
            ),
            self.0.to_string(),
        )
    }
}

fn envelope(code: StatusCode, status: ResponseStatus, message: String) -> Response {
    (
        code,
        [(X_STATUS_CODE, code.as_str())],
        Json(ErrorDto { status, message }),
    )
        .into_response()
}

fn with_detail(mut response: Response, detail: String) -> Response {
    response.extensions_mut().insert(ErrorDetail(detail));
    response
}
