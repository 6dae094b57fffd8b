//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::server::data::user::UserRepository;

/// Shared resources cloned into every handler through Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Repository behind every service, a trait object so tests can swap the backend.
    pub user_repo: Arc<dyn UserRepository>,

    /// Mirrors `Config::debug`; enables `/fakeAuth`.
    pub debug: bool,
}

impl AppState {
    pub fn new(user_repo: Arc<dyn UserRepository>, debug: bool) -> Self {
        Self { user_repo, debug }
    }
}
