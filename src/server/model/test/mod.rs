use crate::server::{
    error::{validation::UserValidationError, AppError},
    model::user::{User, Visibility, MAX_NAME_LENGTH},
};


/// A valid user used as the starting point of setter tests.
fn sample_user() -> User {
    User::new(3, 1_000_003, "Alice", Visibility::Visible, 6.5668, 46.5191).unwrap()
}
