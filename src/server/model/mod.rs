//! Server-side domain models.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. `User` enforces its field
//! invariants itself, so any `User` value in the service layer is valid.

pub mod friendship;
pub mod user;

#[cfg(test)]
mod test;
