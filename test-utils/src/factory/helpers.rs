//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicI64 = std::sync::atomic::AtomicI64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values are monotonically increasing across all factories so that user ids and
/// Facebook ids never collide within a test binary.
pub fn next_id() -> i64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Links two users as mutual friends with `FOLLOWED` links in both directions.
///
/// # Returns
/// - `Ok((forward, backward))` - The two created links
/// - `Err(DbErr)` - Database error during insert
pub async fn create_mutual_friends(
    db: &DatabaseConnection,
    user_id: i64,
    friend_id: i64,
) -> Result<(entity::friendship::Model, entity::friendship::Model), DbErr> {
    let forward = crate::factory::friendship::create_friendship(db, user_id, friend_id, "FOLLOWED")
        .await?;
    let backward =
        crate::factory::friendship::create_friendship(db, friend_id, user_id, "FOLLOWED").await?;

    Ok((forward, backward))
}
