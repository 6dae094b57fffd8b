use crate::server::{
    data::user::{DbUserRepository, UserRepository},
    error::AppError,
    model::{friendship::FriendshipStatus, user::Visibility},
};
use test_utils::{
    builder::TestBuilder,
    factory::{
        friendship::create_friendship,
        helpers::create_mutual_friends,
        invitation::create_invitation,
        user::{create_user, create_user_with_name, UserFactory},
    },
};

mod find_users;
mod friendship_links;
mod get_friends_ids;
mod get_user;
mod invitations;
mod update_position;
