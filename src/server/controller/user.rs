use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::{EmptyDto, ErrorDto, ResponseDto},
        user::{PublicUserDto, UserListDto},
    },
    server::{
        controller::param::{PositionParam, PostParams, SearchParam, UserIdParam},
        error::AppError,
        middleware::auth::CurrentUser,
        service::user::UserService,
        state::AppState,
        util::parse::require_param,
    },
};

pub static USER_TAG: &str = "user";

/// Public information of any user. Does not require authentication.
#[utoipa::path(
    post,
    path = "/getUserInfo",
    tag = USER_TAG,
    request_body(content = UserIdParam, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "`id` and `name` of the user, or an error envelope", body = PublicUserDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_info(
    State(state): State<AppState>,
    PostParams(params): PostParams<UserIdParam>,
) -> Result<impl IntoResponse, AppError> {
    let user_id: i64 = require_param(params.user_id, "user_id")?;

    let user = UserService::new(state.user_repo.as_ref())
        .get_user_info(user_id)
        .await?;

    Ok(Json(ResponseDto::ok(
        "Fetched user info !",
        user.to_public_dto(),
    )))
}

#[utoipa::path(
    post,
    path = "/updatePos",
    tag = USER_TAG,
    request_body(content = PositionParam, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Position stored, or an error envelope", body = EmptyDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pos(
    State(state): State<AppState>,
    user: CurrentUser,
    PostParams(params): PostParams<PositionParam>,
) -> Result<impl IntoResponse, AppError> {
    let longitude: f64 = require_param(params.longitude, "longitude")?;
    let latitude: f64 = require_param(params.latitude, "latitude")?;

    UserService::new(state.user_repo.as_ref())
        .update_position(user.id, longitude, latitude)
        .await?;

    Ok(Json(ResponseDto::ok("Updated position !", EmptyDto {})))
}

/// Users other than the caller whose name starts with `search_text`.
#[utoipa::path(
    post,
    path = "/findUsers",
    tag = USER_TAG,
    request_body(content = SearchParam, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Matching users as `list`, or an error envelope", body = UserListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_users(
    State(state): State<AppState>,
    user: CurrentUser,
    PostParams(params): PostParams<SearchParam>,
) -> Result<impl IntoResponse, AppError> {
    let search_text: String = require_param(params.search_text, "search_text")?;

    let users = UserService::new(state.user_repo.as_ref())
        .find_users(user.id, &search_text)
        .await?;

    let list = users.iter().map(|u| u.to_public_dto()).collect();

    Ok(Json(ResponseDto::ok("Fetched users !", UserListDto { list })))
}
