//! API models shared by every route.
//!
//! These are the JSON shapes written to clients. Server-side domain models live in
//! `server::model` and are converted into these at the controller boundary.

pub mod api;
pub mod user;
