use axum::{extract::FromRequestParts, http::Request};
use test_utils::builder::TestBuilder;

use crate::server::{
    error::{control::ControlError, AppError},
    middleware::{auth::CurrentUser, session::AuthSession},
};

mod debug;
