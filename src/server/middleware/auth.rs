//! Caller identity extraction.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::server::{
    error::{control::ControlError, AppError},
    middleware::session::AuthSession,
};

/// The authenticated caller, resolved from the session.
///
/// Handlers that take a `CurrentUser` argument only run for authenticated requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(ControlError::SessionNotStarted)?;

        let Some(id) = AuthSession::new(&session).get_user_id().await? else {
            return Err(ControlError::NotAuthenticated.into());
        };

        Ok(Self { id })
    }
}
