pub use super::friendship::Entity as Friendship;
pub use super::invitation::Entity as Invitation;
pub use super::user::Entity as User;
