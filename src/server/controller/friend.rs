use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::{EmptyDto, ErrorDto, ResponseDto},
        user::{FriendsIdsDto, PositionsDto},
    },
    server::{
        controller::param::{FriendIdParam, PostParams},
        error::AppError,
        middleware::auth::CurrentUser,
        service::friend::FriendService,
        state::AppState,
        util::parse::require_param,
    },
};

pub static FRIEND_TAG: &str = "friend";

#[utoipa::path(
    post,
    path = "/getFriendsIds",
    tag = FRIEND_TAG,
    responses(
        (status = 200, description = "Ids of followed and unfollowed friends as `friends`", body = FriendsIdsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_friends_ids(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let friends = FriendService::new(state.user_repo.as_ref())
        .get_friends_ids(user.id)
        .await?;

    Ok(Json(ResponseDto::ok(
        "Fetched friends ids !",
        FriendsIdsDto { friends },
    )))
}

/// Positions of the followed friends who share them.
#[utoipa::path(
    post,
    path = "/listFriendsPos",
    tag = FRIEND_TAG,
    responses(
        (status = 200, description = "Friend positions as `positions`", body = PositionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_friends_pos(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let friends = FriendService::new(state.user_repo.as_ref())
        .list_friends_positions(user.id)
        .await?;

    let positions = friends.iter().map(|f| f.to_position_dto()).collect();

    Ok(Json(ResponseDto::ok(
        "Fetched friends positions !",
        PositionsDto { positions },
    )))
}

#[utoipa::path(
    post,
    path = "/removeFriend",
    tag = FRIEND_TAG,
    request_body(content = FriendIdParam, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Friendship removed, or an error envelope", body = EmptyDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_friend(
    State(state): State<AppState>,
    user: CurrentUser,
    PostParams(params): PostParams<FriendIdParam>,
) -> Result<impl IntoResponse, AppError> {
    let friend_id: i64 = require_param(params.friend_id, "friend_id")?;

    FriendService::new(state.user_repo.as_ref())
        .remove_friend(user.id, friend_id)
        .await?;

    Ok(Json(ResponseDto::ok("Removed friend !", EmptyDto {})))
}
