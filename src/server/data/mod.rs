//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and hand domain models to the
//! service layer, converting at the boundary. Services only see the `UserRepository`
//! trait so they can be tested against a mock.

pub mod user;

#[cfg(test)]
mod test;
