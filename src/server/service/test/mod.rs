use mockall::predicate::eq;

use crate::server::{
    data::user::MockUserRepository,
    error::AppError,
    model::{
        friendship::FriendshipStatus,
        user::{User, Visibility},
    },
};


fn user(id: i64, name: &str) -> User {
    User::new(id, 1_000_000 + id, name, Visibility::Visible, 6.5668, 46.5191).unwrap()
}

fn invisible_user(id: i64, name: &str) -> User {
    let mut user = user(id, name);
    user.set_visibility(Visibility::Invisible);
    user
}
