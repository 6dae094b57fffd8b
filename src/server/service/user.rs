//! User service.
//!
//! Reads and updates a single user's own data and searches users by name.

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

pub struct UserService<'a> {
    repo: &'a dyn UserRepository,
}

impl<'a> UserService<'a> {
    pub fn new(repo: &'a dyn UserRepository) -> Self {
        Self { repo }
    }

    /// Gets a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user has this id
    pub async fn get_user_info(&self, user_id: i64) -> Result<User, AppError> {
        self.repo.get_user(user_id).await
    }

    /// Stores the position of `user_id`.
    ///
    /// The coordinates go through the `User` setters first, so an out of range value
    /// fails with `AppError::UserErr` before anything is written.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with the new position
    /// - `Err(AppError::UserErr)` - Longitude or latitude out of range
    /// - `Err(AppError::NotFound)` - No user has this id
    pub async fn update_position(
        &self,
        user_id: i64,
        longitude: f64,
        latitude: f64,
    ) -> Result<User, AppError> {
        let mut user = self.repo.get_user(user_id).await?;
        user.set_longitude(longitude)?.set_latitude(latitude)?;

        self.repo
            .update_position(user.id(), user.longitude(), user.latitude())
            .await?;

        Ok(user)
    }

    /// Finds users other than `user_id` whose name starts with `search_text`.
    pub async fn find_users(&self, user_id: i64, search_text: &str) -> Result<Vec<User>, AppError> {
        self.repo.find_users(user_id, search_text).await
    }
}
