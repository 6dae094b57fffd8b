use thiserror::Error;

/// A `User` field was given a value outside of its allowed domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Id must be greater than 0.")]
    InvalidId(i64),

    #[error("Name must be between 1 and 60 characters.")]
    InvalidName(String),

    #[error("Visibility must be VISIBLE or INVISIBLE.")]
    InvalidVisibility(String),

    #[error("Longitude must be between -180 and 180.")]
    InvalidLongitude(f64),

    #[error("Latitude must be between -90 and 90.")]
    InvalidLatitude(f64),
}
