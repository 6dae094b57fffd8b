use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::{EmptyDto, ErrorDto, ResponseDto},
        user::{FriendDto, UserListDto},
    },
    server::{
        controller::param::{FriendIdParam, PostParams},
        error::AppError,
        middleware::auth::CurrentUser,
        service::invitation::InvitationService,
        state::AppState,
        util::parse::require_param,
    },
};

pub static INVITATION_TAG: &str = "invitation";

/// Always answers with success, even when the invitation is dropped because the caller
/// blocked `friend_id`.
#[utoipa::path(
    post,
    path = "/inviteFriend",
    tag = INVITATION_TAG,
    request_body(content = FriendIdParam, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Invitation sent, or an error envelope", body = EmptyDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn invite_friend(
    State(state): State<AppState>,
    user: CurrentUser,
    PostParams(params): PostParams<FriendIdParam>,
) -> Result<impl IntoResponse, AppError> {
    let friend_id: i64 = require_param(params.friend_id, "friend_id")?;

    InvitationService::new(state.user_repo.as_ref())
        .invite_friend(user.id, friend_id)
        .await?;

    Ok(Json(ResponseDto::ok("Invited friend !", EmptyDto {})))
}

#[utoipa::path(
    post,
    path = "/getInvitations",
    tag = INVITATION_TAG,
    responses(
        (status = 200, description = "Pending inviters as `list`, or an error envelope", body = UserListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_invitations(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let inviters = InvitationService::new(state.user_repo.as_ref())
        .get_invitations(user.id)
        .await?;

    let list = inviters.iter().map(|u| u.to_public_dto()).collect();

    Ok(Json(ResponseDto::ok(
        "Fetched invitations",
        UserListDto { list },
    )))
}

#[utoipa::path(
    post,
    path = "/acceptInvitation",
    tag = INVITATION_TAG,
    request_body(content = FriendIdParam, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "The new friend, or an error or feedback envelope", body = FriendDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_invitation(
    State(state): State<AppState>,
    user: CurrentUser,
    PostParams(params): PostParams<FriendIdParam>,
) -> Result<impl IntoResponse, AppError> {
    let friend_id: i64 = require_param(params.friend_id, "friend_id")?;

    let friend = InvitationService::new(state.user_repo.as_ref())
        .accept_invitation(user.id, friend_id)
        .await?;

    Ok(Json(ResponseDto::ok(
        "Accepted invitation !",
        friend.to_friend_dto(),
    )))
}

#[utoipa::path(
    post,
    path = "/declineInvitation",
    tag = INVITATION_TAG,
    request_body(content = FriendIdParam, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Invitation removed, or an error or feedback envelope", body = EmptyDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decline_invitation(
    State(state): State<AppState>,
    user: CurrentUser,
    PostParams(params): PostParams<FriendIdParam>,
) -> Result<impl IntoResponse, AppError> {
    let friend_id: i64 = require_param(params.friend_id, "friend_id")?;

    InvitationService::new(state.user_repo.as_ref())
        .decline_invitation(user.id, friend_id)
        .await?;

    Ok(Json(ResponseDto::ok("Declined invitation !", EmptyDto {})))
}
