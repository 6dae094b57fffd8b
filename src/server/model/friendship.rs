//! Friendship link statuses.

/// Status of a directed friendship link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FriendshipStatus {
    /// The link owner receives the friend's position.
    Followed,
    /// Still friends, but the owner stopped receiving the friend's position.
    Unfollowed,
    /// The owner blocked the friend; no invitation may be sent to them.
    Blocked,
}

impl FriendshipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Followed => "FOLLOWED",
            Self::Unfollowed => "UNFOLLOWED",
            Self::Blocked => "BLOCKED",
        }
    }
}
