//! Invitation service.
//!
//! Handles the life cycle of a friend invitation: sending it, listing the pending ones,
//! and accepting or declining it. Accepting turns the invitation into a mutual friendship.

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{friendship::FriendshipStatus, user::User},
};

pub struct InvitationService<'a> {
    repo: &'a dyn UserRepository,
}

impl<'a> InvitationService<'a> {
    pub fn new(repo: &'a dyn UserRepository) -> Self {
        Self { repo }
    }

    /// Sends an invitation from `user_id` to `friend_id`.
    ///
    /// Nothing is recorded when `user_id` blocked `friend_id`, but the call still succeeds
    /// so the caller cannot tell a block from a sent invitation.
    ///
    /// # Returns
    /// - `Ok(())` - Invitation recorded, already pending, or silently dropped
    /// - `Err(AppError::InvalidArgument)` - `friend_id` is the caller
    /// - `Err(AppError::NotFound)` - No user has id `friend_id`
    /// - `Err(AppError)` - Repository error
    pub async fn invite_friend(&self, user_id: i64, friend_id: i64) -> Result<(), AppError> {
        if friend_id == user_id {
            return Err(AppError::InvalidArgument(
                "Cannot invite yourself !".to_string(),
            ));
        }

        let friend = self.repo.get_user(friend_id).await?;

        let blocked = self
            .repo
            .get_friends_ids(
                user_id,
                &[FriendshipStatus::Blocked],
                &[FriendshipStatus::Followed, FriendshipStatus::Unfollowed],
            )
            .await?;

        if blocked.contains(&friend.id()) {
            tracing::debug!(
                "User {} blocked user {}, invitation dropped",
                user_id,
                friend_id
            );
            return Ok(());
        }

        self.repo.invite_friend(user_id, friend.id()).await
    }

    /// Gets the users who sent a pending invitation to `user_id`.
    pub async fn get_invitations(&self, user_id: i64) -> Result<Vec<User>, AppError> {
        let inviter_ids = self.repo.get_invitation_ids(user_id).await?;

        self.repo.get_users(&inviter_ids).await
    }

    /// Accepts the invitation `friend_id` sent to `user_id`.
    ///
    /// Removes the invitation and links both users to each other.
    ///
    /// # Returns
    /// - `Ok(User)` - The new friend
    /// - `Err(AppError::Feedback)` - `friend_id` has no pending invitation to `user_id`;
    ///   nothing was written
    /// - `Err(AppError)` - Repository error
    pub async fn accept_invitation(&self, user_id: i64, friend_id: i64) -> Result<User, AppError> {
        let inviter_ids = self.repo.get_invitation_ids(user_id).await?;
        if !inviter_ids.contains(&friend_id) {
            return Err(not_invited(friend_id));
        }

        self.repo.remove_invitation(friend_id, user_id).await?;
        self.repo.add_friendship_link(user_id, friend_id).await?;
        self.repo.add_friendship_link(friend_id, user_id).await?;

        self.repo.get_user(friend_id).await
    }

    /// Declines the invitation `friend_id` sent to `user_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Invitation removed
    /// - `Err(AppError::Feedback)` - There was no such invitation
    pub async fn decline_invitation(&self, user_id: i64, friend_id: i64) -> Result<(), AppError> {
        if !self.repo.remove_invitation(friend_id, user_id).await? {
            return Err(not_invited(friend_id));
        }

        Ok(())
    }
}

fn not_invited(friend_id: i64) -> AppError {
    AppError::Feedback(format!("Not invited by user with id {} !", friend_id))
}
