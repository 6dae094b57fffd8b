//! User domain model.
//!
//! `User` holds the validated attributes of one account: its id, the Facebook id it was
//! registered with, its display name, whether its position is shared, and its last known
//! position. Every field is checked when the user is built and again by each setter, so
//! a `User` can never be observed in an invalid state: a failing setter returns the
//! error and leaves the user unchanged.

use std::{fmt, str::FromStr};

use crate::{
    model::user::{FriendDto, PositionDto, PublicUserDto},
    server::error::{validation::UserValidationError, AppError},
};

/// Maximum length of a user name, in characters.
pub const MAX_NAME_LENGTH: usize = 60;

/// Whether a user's position is shared with their friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Invisible,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visible => "VISIBLE",
            Self::Invisible => "INVISIBLE",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts exactly `VISIBLE` or `INVISIBLE`.
impl FromStr for Visibility {
    type Err = UserValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "VISIBLE" => Ok(Self::Visible),
            "INVISIBLE" => Ok(Self::Invisible),
            other => Err(UserValidationError::InvalidVisibility(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: i64,
    fb_id: i64,
    name: String,
    visibility: Visibility,
    longitude: f64,
    latitude: f64,
}

impl User {
    /// Builds a user, validating every field.
    ///
    /// # Returns
    /// - `Ok(User)` - All fields are valid
    /// - `Err(UserValidationError)` - The first invalid field, checked in argument order
    pub fn new(
        id: i64,
        fb_id: i64,
        name: impl Into<String>,
        visibility: Visibility,
        longitude: f64,
        latitude: f64,
    ) -> Result<Self, UserValidationError> {
        let name = name.into();

        check_id(id)?;
        check_id(fb_id)?;
        check_name(&name)?;
        check_longitude(longitude)?;
        check_latitude(latitude)?;

        Ok(Self {
            id,
            fb_id,
            name,
            visibility,
            longitude,
            latitude,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn set_id(&mut self, id: i64) -> Result<&mut Self, UserValidationError> {
        check_id(id)?;
        self.id = id;
        Ok(self)
    }

    pub fn fb_id(&self) -> i64 {
        self.fb_id
    }

    pub fn set_fb_id(&mut self, fb_id: i64) -> Result<&mut Self, UserValidationError> {
        check_id(fb_id)?;
        self.fb_id = fb_id;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<&mut Self, UserValidationError> {
        let name = name.into();
        check_name(&name)?;
        self.name = name;
        Ok(self)
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Any `Visibility` value is valid; string input is validated by `Visibility::from_str`.
    pub fn set_visibility(&mut self, visibility: Visibility) -> &mut Self {
        self.visibility = visibility;
        self
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn set_longitude(&mut self, longitude: f64) -> Result<&mut Self, UserValidationError> {
        check_longitude(longitude)?;
        self.longitude = longitude;
        Ok(self)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn set_latitude(&mut self, latitude: f64) -> Result<&mut Self, UserValidationError> {
        check_latitude(latitude)?;
        self.latitude = latitude;
        Ok(self)
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// A stored row that fails validation is a broken invariant of the database, not a
    /// client mistake, so it is reported as an internal error.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalError)` - The stored row holds an invalid value
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let id = entity.id;
        let invalid = |e: UserValidationError| {
            AppError::InternalError(format!("Stored user {} is invalid: {}", id, e))
        };

        let visibility = entity.visibility.parse::<Visibility>().map_err(invalid)?;

        Self::new(
            entity.id,
            entity.fb_id,
            entity.name,
            visibility,
            entity.longitude,
            entity.latitude,
        )
        .map_err(invalid)
    }

    /// Only the fields any caller may see.
    pub fn to_public_dto(&self) -> PublicUserDto {
        PublicUserDto {
            id: self.id,
            name: self.name.clone(),
        }
    }

    pub fn to_friend_dto(&self) -> FriendDto {
        FriendDto {
            id: self.id,
            name: self.name.clone(),
            longitude: self.longitude,
            latitude: self.latitude,
        }
    }

    pub fn to_position_dto(&self) -> PositionDto {
        PositionDto {
            id: self.id,
            longitude: self.longitude,
            latitude: self.latitude,
        }
    }
}

fn check_id(id: i64) -> Result<(), UserValidationError> {
    if id <= 0 {
        return Err(UserValidationError::InvalidId(id));
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), UserValidationError> {
    let length = name.chars().count();
    if length == 0 || length > MAX_NAME_LENGTH {
        return Err(UserValidationError::InvalidName(name.to_string()));
    }
    Ok(())
}

// Range checks are written so that NaN fails them.
fn check_longitude(longitude: f64) -> Result<(), UserValidationError> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(UserValidationError::InvalidLongitude(longitude));
    }
    Ok(())
}

fn check_latitude(latitude: f64) -> Result<(), UserValidationError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(UserValidationError::InvalidLatitude(latitude));
    }
    Ok(())
}
