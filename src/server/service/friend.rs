//! Friend service.
//!
//! Queries and edits the friendship links of a user once invitations are accepted.

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        friendship::FriendshipStatus,
        user::{User, Visibility},
    },
};

pub struct FriendService<'a> {
    repo: &'a dyn UserRepository,
}

impl<'a> FriendService<'a> {
    pub fn new(repo: &'a dyn UserRepository) -> Self {
        Self { repo }
    }

    /// Gets the ids of the friends of `user_id`, whether followed or not.
    ///
    /// Blocked users are not friends.
    pub async fn get_friends_ids(&self, user_id: i64) -> Result<Vec<i64>, AppError> {
        self.repo
            .get_friends_ids(
                user_id,
                &[FriendshipStatus::Followed, FriendshipStatus::Unfollowed],
                &[FriendshipStatus::Blocked],
            )
            .await
    }

    /// Gets the friends whose position `user_id` may see.
    ///
    /// A friend is listed when `user_id` follows them and their visibility is `VISIBLE`.
    pub async fn list_friends_positions(&self, user_id: i64) -> Result<Vec<User>, AppError> {
        let followed_ids = self
            .repo
            .get_friends_ids(user_id, &[FriendshipStatus::Followed], &[])
            .await?;

        let friends = self.repo.get_users(&followed_ids).await?;

        Ok(friends
            .into_iter()
            .filter(|friend| friend.visibility() == Visibility::Visible)
            .collect())
    }

    /// Ends the friendship between `user_id` and `friend_id` by removing both links.
    pub async fn remove_friend(&self, user_id: i64, friend_id: i64) -> Result<(), AppError> {
        self.repo.remove_friendship_link(user_id, friend_id).await?;
        self.repo.remove_friendship_link(friend_id, user_id).await?;

        Ok(())
    }
}
