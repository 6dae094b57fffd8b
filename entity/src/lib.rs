//! SeaORM entity models for the SmartMap database schema.

pub mod prelude;

pub mod friendship;
pub mod invitation;
pub mod user;
