//! Request extractors and middleware.
//!
//! - `session` wraps the raw `tower_sessions::Session` with typed accessors
//! - `auth` resolves the caller into an explicit `CurrentUser` value
//! - `request_log` logs every incoming request
//! - `debug` exposes error details in 500 responses when running in debug mode

pub mod auth;
pub mod debug;
pub mod request_log;
pub mod session;

#[cfg(test)]
mod test;
