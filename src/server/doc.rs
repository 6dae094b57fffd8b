//! OpenAPI document served by Swagger UI at `/docs` in debug mode.

use utoipa::OpenApi;

use crate::{
    model::{
        api::{EmptyDto, ErrorDto, ResponseStatus},
        user::{FriendDto, FriendsIdsDto, PositionDto, PositionsDto, PublicUserDto, UserListDto},
    },
    server::controller::param::{FriendIdParam, PositionParam, SearchParam, UserIdParam},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SmartMap server API",
        description = "Every route answers `{status, message}` followed by the documented fields."
    ),
    paths(
        crate::server::controller::user::get_user_info,
        crate::server::controller::user::update_pos,
        crate::server::controller::user::find_users,
        crate::server::controller::invitation::invite_friend,
        crate::server::controller::invitation::get_invitations,
        crate::server::controller::invitation::accept_invitation,
        crate::server::controller::invitation::decline_invitation,
        crate::server::controller::friend::get_friends_ids,
        crate::server::controller::friend::list_friends_pos,
        crate::server::controller::friend::remove_friend,
        crate::server::controller::auth::fake_auth,
    ),
    components(schemas(
        ResponseStatus,
        ErrorDto,
        EmptyDto,
        PublicUserDto,
        FriendDto,
        UserListDto,
        FriendsIdsDto,
        PositionDto,
        PositionsDto,
        UserIdParam,
        FriendIdParam,
        PositionParam,
        SearchParam,
    )),
    tags(
        (name = "user", description = "User information, position and search"),
        (name = "invitation", description = "Friend invitations"),
        (name = "friend", description = "Friendship links and positions"),
        (name = "auth", description = "Development login")
    )
)]
pub struct ApiDoc;
