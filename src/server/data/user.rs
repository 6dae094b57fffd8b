//! User data repository.
//!
//! `UserRepository` is the capability the services depend on: user lookup, the friendship
//! graph, pending invitations, positions and name search. `DbUserRepository` implements it
//! over the SeaORM connection.

use async_trait::async_trait;
use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, LikeExpr},
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::{
    error::AppError,
    model::{friendship::FriendshipStatus, user::User},
};

/// Maximum number of users returned by a name search.
pub const SEARCH_LIMIT: u64 = 20;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user has this id
    /// - `Err(AppError)` - Database error or invalid stored row
    async fn get_user(&self, id: i64) -> Result<User, AppError>;

    /// Gets every existing user among `ids`, ordered by id. Unknown ids are skipped.
    async fn get_users(&self, ids: &[i64]) -> Result<Vec<User>, AppError>;

    /// Gets the ids of the users `user_id` links to.
    ///
    /// Only links whose status is in `include` (any status when empty) and not in
    /// `exclude` are returned.
    async fn get_friends_ids(
        &self,
        user_id: i64,
        include: &[FriendshipStatus],
        exclude: &[FriendshipStatus],
    ) -> Result<Vec<i64>, AppError>;

    /// Gets the ids of the users with a pending invitation to `user_id`.
    async fn get_invitation_ids(&self, user_id: i64) -> Result<Vec<i64>, AppError>;

    /// Records an invitation from `user_id` to `friend_id`. Duplicates collapse into one.
    async fn invite_friend(&self, user_id: i64, friend_id: i64) -> Result<(), AppError>;

    /// Deletes the invitation sent by `inviter_id` to `invitee_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - The invitation existed and was removed
    /// - `Ok(false)` - There was no such invitation
    async fn remove_invitation(&self, inviter_id: i64, invitee_id: i64)
        -> Result<bool, AppError>;

    /// Creates a `FOLLOWED` link from `user_id` to `friend_id`.
    ///
    /// An existing link keeps its status.
    async fn add_friendship_link(&self, user_id: i64, friend_id: i64) -> Result<(), AppError>;

    /// Deletes the link from `user_id` to `friend_id`, if any.
    async fn remove_friendship_link(&self, user_id: i64, friend_id: i64)
        -> Result<(), AppError>;

    /// Stores the position of `user_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Position stored
    /// - `Err(AppError::NotFound)` - No user has this id
    async fn update_position(
        &self,
        user_id: i64,
        longitude: f64,
        latitude: f64,
    ) -> Result<(), AppError>;

    /// Finds users whose name starts with `search_text`, ignoring case.
    ///
    /// The caller is never part of the result, which is ordered by name and capped at
    /// `SEARCH_LIMIT` users.
    async fn find_users(&self, user_id: i64, search_text: &str) -> Result<Vec<User>, AppError>;
}

/// SeaORM implementation of `UserRepository`.
#[derive(Clone)]
pub struct DbUserRepository {
    db: DatabaseConnection,
}

impl DbUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for DbUserRepository {
    async fn get_user(&self, id: i64) -> Result<User, AppError> {
        let entity = entity::prelude::User::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found.", id)))?;

        User::from_entity(entity)
    }

    async fn get_users(&self, ids: &[i64]) -> Result<Vec<User>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::user::Column::Id)
            .all(&self.db)
            .await?;

        entities.into_iter().map(User::from_entity).collect()
    }

    async fn get_friends_ids(
        &self,
        user_id: i64,
        include: &[FriendshipStatus],
        exclude: &[FriendshipStatus],
    ) -> Result<Vec<i64>, AppError> {
        let mut query = entity::prelude::Friendship::find()
            .filter(entity::friendship::Column::UserId.eq(user_id));

        if !include.is_empty() {
            query = query.filter(entity::friendship::Column::Status.is_in(status_names(include)));
        }
        if !exclude.is_empty() {
            query =
                query.filter(entity::friendship::Column::Status.is_not_in(status_names(exclude)));
        }

        let ids = query
            .select_only()
            .column(entity::friendship::Column::FriendId)
            .order_by_asc(entity::friendship::Column::FriendId)
            .into_tuple::<i64>()
            .all(&self.db)
            .await?;

        Ok(ids)
    }

    async fn get_invitation_ids(&self, user_id: i64) -> Result<Vec<i64>, AppError> {
        let ids = entity::prelude::Invitation::find()
            .filter(entity::invitation::Column::FriendId.eq(user_id))
            .select_only()
            .column(entity::invitation::Column::UserId)
            .order_by_asc(entity::invitation::Column::UserId)
            .into_tuple::<i64>()
            .all(&self.db)
            .await?;

        Ok(ids)
    }

    async fn invite_friend(&self, user_id: i64, friend_id: i64) -> Result<(), AppError> {
        entity::prelude::Invitation::insert(entity::invitation::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            friend_id: ActiveValue::Set(friend_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::invitation::Column::UserId,
                entity::invitation::Column::FriendId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await?;

        Ok(())
    }

    async fn remove_invitation(
        &self,
        inviter_id: i64,
        invitee_id: i64,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Invitation::delete_by_id((inviter_id, invitee_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn add_friendship_link(&self, user_id: i64, friend_id: i64) -> Result<(), AppError> {
        entity::prelude::Friendship::insert(entity::friendship::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            friend_id: ActiveValue::Set(friend_id),
            status: ActiveValue::Set(FriendshipStatus::Followed.as_str().to_string()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::friendship::Column::UserId,
                entity::friendship::Column::FriendId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await?;

        Ok(())
    }

    async fn remove_friendship_link(
        &self,
        user_id: i64,
        friend_id: i64,
    ) -> Result<(), AppError> {
        entity::prelude::Friendship::delete_by_id((user_id, friend_id))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn update_position(
        &self,
        user_id: i64,
        longitude: f64,
        latitude: f64,
    ) -> Result<(), AppError> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(entity::user::Column::Longitude, Expr::value(longitude))
            .col_expr(entity::user::Column::Latitude, Expr::value(latitude))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!(
                "User with id {} not found.",
                user_id
            )));
        }

        Ok(())
    }

    async fn find_users(&self, user_id: i64, search_text: &str) -> Result<Vec<User>, AppError> {
        let pattern = format!("{}%", escape_like(search_text));

        // SQLite LIKE ignores ASCII case
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Name.like(LikeExpr::new(pattern).escape('\\')))
            .filter(entity::user::Column::Id.ne(user_id))
            .order_by_asc(entity::user::Column::Name)
            .limit(SEARCH_LIMIT)
            .all(&self.db)
            .await?;

        entities.into_iter().map(User::from_entity).collect()
    }
}

fn status_names(statuses: &[FriendshipStatus]) -> Vec<&'static str> {
    statuses.iter().map(FriendshipStatus::as_str).collect()
}

/// Escapes the LIKE wildcards so user input only matches literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
