//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let alice = factory::user::create_user(&db).await?;
//! let bob = factory::user::UserFactory::new(&db)
//!     .name("Bob")
//!     .position(6.5668, 46.5191)
//!     .build()
//!     .await?;
//!
//! factory::invitation::create_invitation(&db, alice.id, bob.id).await?;
//! factory::friendship::create_friendship(&db, alice.id, bob.id, "BLOCKED").await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `friendship` - Create directed friendship links
//! - `invitation` - Create pending invitations
//! - `helpers` - Id generation and mutual friendship shorthand

pub mod friendship;
pub mod helpers;
pub mod invitation;
pub mod user;

pub use friendship::create_friendship;
pub use helpers::create_mutual_friends;
pub use invitation::create_invitation;
pub use user::create_user;
