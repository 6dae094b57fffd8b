//! HTTP request handlers.
//!
//! Every route is a POST taking form-encoded parameters and answering with the JSON
//! envelope `{status, message, ...payload}`. Handlers only extract parameters and the
//! caller, delegate to a service, and shape the envelope; failures are returned as
//! `AppError` and rendered by its `IntoResponse` implementation.

pub mod auth;
pub mod friend;
pub mod invitation;
pub mod param;
pub mod user;

#[cfg(test)]
mod test;
