use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ResponseDto},
        user::PublicUserDto,
    },
    server::{
        controller::param::{PostParams, UserIdParam},
        error::AppError,
        middleware::session::AuthSession,
        service::user::UserService,
        state::AppState,
        util::parse::require_param,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Logs the session in as an existing user without going through the identity provider.
///
/// Only routed in debug mode.
#[utoipa::path(
    post,
    path = "/fakeAuth",
    tag = AUTH_TAG,
    request_body(content = UserIdParam, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Session now belongs to the user, or an error envelope", body = PublicUserDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn fake_auth(
    State(state): State<AppState>,
    session: Session,
    PostParams(params): PostParams<UserIdParam>,
) -> Result<impl IntoResponse, AppError> {
    let user_id: i64 = require_param(params.user_id, "user_id")?;

    let user = UserService::new(state.user_repo.as_ref())
        .get_user_info(user_id)
        .await?;

    session.cycle_id().await?;
    AuthSession::new(&session).set_user_id(user.id()).await?;

    tracing::info!("Session authenticated as user {} without provider", user.id());

    Ok(Json(ResponseDto::ok(
        format!("Authenticated as user {} !", user.id()),
        user.to_public_dto(),
    )))
}
