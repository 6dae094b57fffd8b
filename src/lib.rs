//! SmartMap server library.
//!
//! Exposes the shared API models (`model`) and the server implementation (`server`) so
//! the binary and the in-crate tests use the same router, state and error mapping.

pub mod model;
pub mod server;
