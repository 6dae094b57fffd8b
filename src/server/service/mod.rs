//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repository. They enforce the rules of
//! the friendship graph (blocked users, pending invitations, mutual links) and work with
//! `User` domain models, never with DTOs or entity models. Each service borrows the
//! repository as a trait object so tests can substitute a mock.

pub mod friend;
pub mod invitation;
pub mod user;

#[cfg(test)]
mod test;
