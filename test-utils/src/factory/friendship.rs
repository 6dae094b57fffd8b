//! Factory for directed friendship links.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a link from `user_id` to `friend_id` with the given status string.
///
/// The status is stored verbatim so tests can also seed values the application
/// would never write.
pub async fn create_friendship(
    db: &DatabaseConnection,
    user_id: i64,
    friend_id: i64,
    status: impl Into<String>,
) -> Result<entity::friendship::Model, DbErr> {
    entity::friendship::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        friend_id: ActiveValue::Set(friend_id),
        status: ActiveValue::Set(status.into()),
    }
    .insert(db)
    .await
}
