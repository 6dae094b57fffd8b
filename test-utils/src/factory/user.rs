//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .name("Alice")
///     .visibility("INVISIBLE")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: i64,
    fb_id: i64,
    name: String,
    visibility: String,
    longitude: f64,
    latitude: f64,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id and fb_id: next unique counter value
    /// - name: `"User {id}"`
    /// - visibility: `"VISIBLE"`
    /// - position: longitude `0.0`, latitude `0.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id,
            fb_id: id,
            name: format!("User {}", id),
            visibility: "VISIBLE".to_string(),
            longitude: 0.0,
            latitude: 0.0,
        }
    }

    /// Sets the user id.
    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Sets the Facebook id.
    pub fn fb_id(mut self, fb_id: i64) -> Self {
        self.fb_id = fb_id;
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stored visibility string.
    pub fn visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = visibility.into();
        self
    }

    /// Sets the longitude and latitude.
    pub fn position(mut self, longitude: f64, latitude: f64) -> Self {
        self.longitude = longitude;
        self.latitude = latitude;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            fb_id: ActiveValue::Set(self.fb_id),
            name: ActiveValue::Set(self.name),
            visibility: ActiveValue::Set(self.visibility),
            longitude: ActiveValue::Set(self.longitude),
            latitude: ActiveValue::Set(self.latitude),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific id and name.
pub async fn create_user_with_name(
    db: &DatabaseConnection,
    id: i64,
    name: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).id(id).name(name).build().await
}
