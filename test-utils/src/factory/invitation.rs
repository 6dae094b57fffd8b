//! Factory for pending invitations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a pending invitation sent by `inviter_id` to `invitee_id`.
pub async fn create_invitation(
    db: &DatabaseConnection,
    inviter_id: i64,
    invitee_id: i64,
) -> Result<entity::invitation::Model, DbErr> {
    entity::invitation::ActiveModel {
        user_id: ActiveValue::Set(inviter_id),
        friend_id: ActiveValue::Set(invitee_id),
    }
    .insert(db)
    .await
}
